use num_traits::ToPrimitive;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::{Coordinate, Orientation, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T = f64> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: Coordinate,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Euclidean distance, `sqrt((x2-x1)^2 + (y2-y1)^2)`, evaluated in `f64` without
  /// overflowing in the squares.
  pub fn euclidean_distance(&self, rhs: &Point<T>) -> f64
  where
    T: ToPrimitive,
  {
    let dx = to_f64(&rhs.array[0]) - to_f64(&self.array[0]);
    let dy = to_f64(&rhs.array[1]) - to_f64(&self.array[1]);
    dx.hypot(dy)
  }
}

fn to_f64<T: ToPrimitive>(value: &T) -> f64 {
  value.to_f64().unwrap_or(f64::NAN)
}

// Lexicographic: by x, then by y.
impl<T: TotalOrd> TotalOrd for Point<T> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (self.x_coord(), self.y_coord()).total_cmp(&(other.x_coord(), other.y_coord()))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    Ok(Point {
      array: [NotNan::new(point.array[0])?, NotNan::new(point.array[1])?],
    })
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}
