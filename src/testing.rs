// This module contains strategies for:
//  * points
//  * point clouds
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary points

impl<T: Arbitrary> Arbitrary for Point<T> {
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = <[T; 2] as Arbitrary>::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<[T; 2]>(params).prop_map(Point::new as fn([T; 2]) -> Point<T>)
  }
}

// Pixel positions inside the default 500x500 pane.
pub fn any_screen_point() -> impl Strategy<Value = Point<f64>> {
  (0..=500_i16, 0..=500_i16).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

// A 5x5 grid. Small enough that duplicates and colinear triples are common.
pub fn any_grid_point() -> impl Strategy<Value = Point<f64>> {
  (0..5_i8, 0..5_i8).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_fractional_point() -> impl Strategy<Value = Point<f64>> {
  (-1000.0..1000.0_f64, -1000.0..1000.0_f64).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Point clouds

pub fn screen_cloud(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_screen_point(), size)
}

pub fn grid_cloud(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_grid_point(), size)
}

pub fn fractional_cloud(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_fractional_point(), size)
}

// Any of the clouds above.
pub fn any_cloud() -> impl Strategy<Value = Vec<Point<f64>>> {
  prop_oneof![
    screen_cloud(0..60),
    grid_cloud(0..30),
    fractional_cloud(0..60),
  ]
}
