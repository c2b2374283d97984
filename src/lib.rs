//! Interactive 2D point sets and their convex hulls.
//!
//! A [`PointSet`](data::PointSet) is mutated by user input and its convex hull is
//! recomputed from scratch with [`convex_hull`](algorithms::convex_hull) after every
//! change. The [`scene`] module ties both together the way an interactive pane would:
//! clicks go in, circles and hull edges come out.
//!
//! Coordinates follow screen conventions: x grows to the right and y grows
//! downwards. [`Orientation::CounterClockWise`] is a counter-clockwise turn as seen
//! on screen.
#![doc(test(no_crate_inject))]
use num_traits::ToPrimitive;
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
pub mod scene;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  DuplicatePoints,
  /// The boundary winds around more than once.
  SelfIntersections,
  /// Two consecutive hull edges turn clockwise.
  ClockWiseViolation,
  /// Three consecutive hull vertices are colinear.
  CoLinearViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::SelfIntersections => write!(f, "Self intersections"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::CoLinearViolation => write!(f, "Colinear violation"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Scalar type usable as a point coordinate.
pub trait Coordinate: std::fmt::Debug + Copy + PartialEq + TotalOrd + ToPrimitive {
  /// Sign of `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`.
  ///
  /// The sign is exact: fixed-precision types never overflow and floating-point
  /// types never round to the wrong side of zero.
  fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

// A signed 129-bit integer, wide enough for the product of two 64-bit differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SignedMagnitude {
  negative: bool,
  magnitude: u128,
}

impl SignedMagnitude {
  fn new(negative: bool, magnitude: u128) -> SignedMagnitude {
    SignedMagnitude {
      negative: negative && magnitude != 0,
      magnitude,
    }
  }

  fn times(self, other: SignedMagnitude) -> SignedMagnitude {
    SignedMagnitude::new(
      self.negative != other.negative,
      self.magnitude * other.magnitude,
    )
  }
}

impl Ord for SignedMagnitude {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self.negative, other.negative) {
      (false, false) => self.magnitude.cmp(&other.magnitude),
      (true, true) => other.magnitude.cmp(&self.magnitude),
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
    }
  }
}

impl PartialOrd for SignedMagnitude {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

macro_rules! fixed_precision {
  ( $( $ty:ty => $uty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl Coordinate for $ty {
        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          // diff(a, b) = b - a
          fn diff(a: $ty, b: $ty) -> SignedMagnitude {
            if b >= a {
              SignedMagnitude::new(false, b.wrapping_sub(a) as $uty as u128)
            } else {
              SignedMagnitude::new(true, a.wrapping_sub(b) as $uty as u128)
            }
          }
          let lhs = diff(p[1], q[1]).times(diff(q[0], r[0]));
          let rhs = diff(p[0], q[0]).times(diff(q[1], r[1]));
          lhs.cmp(&rhs)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty => $to_f64:expr ),* ) => {
    $(
      impl Coordinate for $ty {
        // `orient2d` evaluates the same determinant with the opposite sign, using
        // adaptive precision so the result is never rounded across zero.
        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let to_f64 = $to_f64;
          let orient = geometry_predicates::predicates::orient2d(
            [to_f64(p[0]), to_f64(p[1])],
            [to_f64(q[0]), to_f64(q[1])],
            [to_f64(r[0]), to_f64(r[1])],
          );
          if orient < 0.0 {
            Ordering::Greater
          } else if orient > 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

macro_rules! raw_float_total_ord {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          // -0.0 and 0.0 are the same coordinate.
          fn normalize(f: $ty) -> $ty {
            if f == 0.0 {
              0.0
            } else {
              f
            }
          }
          <$ty>::total_cmp(&normalize(*self), &normalize(*other))
        }
      }
    )*
  };
}

macro_rules! wrapped_float_total_ord {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }
    )*
  };
}

fixed_precision!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);
raw_float_total_ord!(f32, f64);
wrapped_float_total_ord!(
  OrderedFloat<f32>,
  OrderedFloat<f64>,
  NotNan<f32>,
  NotNan<f64>
);
floating_precision!(
  f32 => f64::from,
  f64 => |v: f64| v,
  OrderedFloat<f32> => |v: OrderedFloat<f32>| f64::from(v.into_inner()),
  OrderedFloat<f64> => |v: OrderedFloat<f64>| v.into_inner(),
  NotNan<f32> => |v: NotNan<f32>| f64::from(v.into_inner()),
  NotNan<f64> => |v: NotNan<f64>| v.into_inner()
);

#[cfg(test)]
pub mod testing;
