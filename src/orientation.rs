use std::cmp::Ordering;

use crate::Coordinate;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is the sign of `(p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y)`:
  /// positive is counter-clockwise, negative is clockwise and zero is colinear.
  /// Directions are as seen on screen, with y growing downwards.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use maximal_points::data::Point;
  /// # use maximal_points::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 1, 0 ]); // One unit to the right of p1.
  /// // (0,0) -> (1,0) -> (2,0) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 2, 0 ])).is_colinear());
  /// // (0,0) -> (1,0) -> (2,-1), turning up the screen.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 2, -1 ])).is_ccw());
  /// // (0,0) -> (1,0) -> (2,1), turning down the screen.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 2, 1 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: Coordinate,
  {
    match T::cmp_turn(p1, p2, p3) {
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
      Ordering::Greater => CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
