use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{Coordinate, Error, Orientation, TotalOrd};

/// Boundary of a convex hull.
///
/// Vertices are listed once each, starting at the lexicographically smallest
/// point, and every three consecutive vertices (wrapping around) turn
/// counter-clockwise. Hulls of zero, one or two vertices are degenerate: nothing,
/// a point or a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hull<T = f64> {
  vertices: Vec<Point<T>>,
}

impl<T> Hull<T> {
  /// $O(1)$
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    Hull { vertices }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.vertices.iter()
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.vertices
  }

  /// Line segments to draw for this hull.
  ///
  /// Nothing for fewer than two vertices, a single segment for two vertices and
  /// a closed ring (last vertex back to the first) otherwise.
  pub fn edges(&self) -> Edges<'_, T> {
    let count = match self.vertices.len() {
      0 | 1 => 0,
      2 => 1,
      n => n,
    };
    Edges {
      vertices: &self.vertices,
      index: 0,
      count,
    }
  }
}

impl<T: Coordinate> Hull<T> {
  /// $O(n^2)$ Build a hull from vertices that are already in hull order.
  ///
  /// # Errors
  /// Fails if the vertices do not pass [`Hull::validate`].
  pub fn new(vertices: Vec<Point<T>>) -> Result<Hull<T>, Error> {
    let hull = Hull::new_unchecked(vertices);
    hull.validate()?;
    Ok(hull)
  }

  /// $O(n^2)$ Check that the vertices are distinct, that every vertex is a strict
  /// counter-clockwise turn and that the boundary winds around exactly once.
  pub fn validate(&self) -> Result<(), Error> {
    let vertices = &self.vertices;
    for (i, pt) in vertices.iter().enumerate() {
      if vertices[i + 1..].contains(pt) {
        return Err(Error::DuplicatePoints);
      }
    }
    let n = vertices.len();
    if n < 3 {
      return Ok(());
    }
    for i in 0..n {
      let p = &vertices[i];
      let q = &vertices[(i + 1) % n];
      let r = &vertices[(i + 2) % n];
      match p.orientation(q, r) {
        Orientation::CounterClockWise => {}
        Orientation::ClockWise => return Err(Error::ClockWiseViolation),
        Orientation::CoLinear => return Err(Error::CoLinearViolation),
      }
    }
    // A boundary that only turns one way but winds around more than once changes
    // horizontal direction more than twice.
    let directions: Vec<Ordering> = self
      .edges()
      .map(|(p, q)| q.x_coord().total_cmp(p.x_coord()))
      .filter(|ord| *ord != Ordering::Equal)
      .collect();
    let changes = directions
      .iter()
      .zip(directions.iter().cycle().skip(1))
      .filter(|(a, b)| a != b)
      .count();
    if changes > 2 {
      return Err(Error::SelfIntersections);
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the hull.
  ///
  /// A degenerate hull has no inside: a point is on the boundary of a single-vertex
  /// hull only if it equals the vertex, and on the boundary of a two-vertex hull only
  /// if it lies on the segment.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [a] => {
        if a == pt {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        if a.orientation(b, pt).is_colinear()
          && between(a.x_coord(), b.x_coord(), pt.x_coord())
          && between(a.y_coord(), b.y_coord(), pt.y_coord())
        {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut on_boundary = false;
        for (p, q) in self.edges() {
          match p.orientation(q, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_boundary = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_boundary {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

fn between<T: TotalOrd>(a: &T, b: &T, value: &T) -> bool {
  let (lo, hi) = if a.total_cmp(b).is_le() { (a, b) } else { (b, a) };
  lo.total_cmp(value).is_le() && value.total_cmp(hi).is_le()
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.vertices
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.vertices
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

/// Iterator over the drawable edges of a [`Hull`].
#[derive(Debug, Clone)]
pub struct Edges<'a, T> {
  vertices: &'a [Point<T>],
  index: usize,
  count: usize,
}

impl<'a, T> Iterator for Edges<'a, T> {
  type Item = (&'a Point<T>, &'a Point<T>);

  fn next(&mut self) -> Option<Self::Item> {
    if self.index >= self.count {
      return None;
    }
    let start = &self.vertices[self.index];
    let end = &self.vertices[(self.index + 1) % self.vertices.len()];
    self.index += 1;
    Some((start, end))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.count - self.index;
    (remaining, Some(remaining))
  }
}

impl<T> ExactSizeIterator for Edges<'_, T> {}
impl<T> FusedIterator for Edges<'_, T> {}
