use num_traits::ToPrimitive;

use crate::algorithms::convex_hull;
use crate::data::{Hull, Point};
use crate::Coordinate;

/// Ordered, mutable collection of points.
///
/// Insertion order is kept for display. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointSet<T = f64> {
  points: Vec<Point<T>>,
}

impl<T> Default for PointSet<T> {
  fn default() -> Self {
    PointSet { points: Vec::new() }
  }
}

impl<T> PointSet<T> {
  pub fn new() -> PointSet<T> {
    PointSet::default()
  }

  /// $O(1)$ Append a point. Never deduplicates.
  pub fn insert(&mut self, point: Point<T>) {
    self.points.push(point);
    log::trace!("insert at {}, len {}", self.points.len() - 1, self.points.len());
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  pub fn as_slice(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn clear(&mut self) {
    self.points.clear();
  }

  /// $O(n)$ The entry closest to `target` by Euclidean distance.
  ///
  /// Ties go to the entry found first in insertion order. Returns `None` only
  /// when the set is empty.
  pub fn nearest(&self, target: &Point<T>) -> Option<(usize, &Point<T>)>
  where
    T: ToPrimitive,
  {
    let mut iter = self.points.iter().enumerate();
    let mut closest = iter.next()?;
    let mut min_distance = closest.1.euclidean_distance(target);
    for (index, point) in iter {
      let distance = point.euclidean_distance(target);
      if distance < min_distance {
        min_distance = distance;
        closest = (index, point);
      }
    }
    Some(closest)
  }

  /// $O(n)$ Remove the single entry closest to `target` and return it.
  ///
  /// Does nothing on an empty set.
  pub fn remove_nearest(&mut self, target: &Point<T>) -> Option<Point<T>>
  where
    T: ToPrimitive,
  {
    let (index, _) = self.nearest(target)?;
    let removed = self.points.remove(index);
    log::trace!("remove at {}, len {}", index, self.points.len());
    Some(removed)
  }

  /// $O(n \log n)$ Convex hull of the current contents. The set itself is not reordered.
  pub fn convex_hull(&self) -> Hull<T>
  where
    T: Coordinate,
  {
    convex_hull(&self.points)
  }
}

impl<T> FromIterator<Point<T>> for PointSet<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
    PointSet {
      points: iter.into_iter().collect(),
    }
  }
}

impl<T> Extend<Point<T>> for PointSet<T> {
  fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
    self.points.extend(iter);
  }
}

impl<T> From<Vec<Point<T>>> for PointSet<T> {
  fn from(points: Vec<Point<T>>) -> Self {
    PointSet { points }
  }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}
