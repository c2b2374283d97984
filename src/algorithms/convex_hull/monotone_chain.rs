use crate::data::{Hull, Point};
use crate::{Coordinate, TotalOrd};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    Never mutates the input.
//    Results with three or more vertices are valid convex polygons.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] algorithm (Andrew's variant of the Graham scan) for
/// finding the smallest convex polygon which contains all the given points.
/// The points are sorted by x (then y) in a private copy, so the caller's order
/// is left untouched.
///
/// The function is total:
/// * Zero or one point: the hull is the input itself.
/// * Two distinct points, or any number of colinear points: the hull is the
///   segment between the two extreme points.
/// * Duplicate points are only reported once.
/// * Colinear points on an edge of the hull are not vertices.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * The vertices turn counter-clockwise (on screen) at every step.
///
/// # Examples
///
/// ```rust
/// # use maximal_points::algorithms::convex_hull;
/// # use maximal_points::data::Point;
/// let points = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
///   Point::new([2, 2]),
/// ];
/// let hull = convex_hull(&points);
/// assert_eq!(
///   hull.vertices(),
///   &[
///     Point::new([0, 0]),
///     Point::new([0, 4]),
///     Point::new([4, 4]),
///     Point::new([4, 0]),
///   ]
/// );
/// ```
///
/// ```rust
/// # use maximal_points::algorithms::convex_hull;
/// # use maximal_points::data::Point;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert!(convex_hull(&empty_set).is_empty());
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(points: &[Point<T>]) -> Hull<T>
where
  T: Coordinate,
{
  if points.len() < 2 {
    return Hull::new_unchecked(points.to_vec());
  }

  let mut sorted = points.to_vec();
  sorted.sort_unstable_by(TotalOrd::total_cmp);
  sorted.dedup();
  if sorted.len() < 2 {
    return Hull::new_unchecked(sorted);
  }

  let mut lower = half_hull(sorted.iter());
  let mut upper = half_hull(sorted.iter().rev());
  // The last point of each chain is the first point of the other.
  lower.pop();
  upper.pop();
  lower.append(&mut upper);

  log::trace!(
    "convex hull of {} points has {} vertices",
    points.len(),
    lower.len()
  );
  Hull::new_unchecked(lower)
}

// Scan the points in order, keeping only strict counter-clockwise turns.
fn half_hull<'a, T, I>(points: I) -> Vec<Point<T>>
where
  T: Coordinate + 'a,
  I: Iterator<Item = &'a Point<T>>,
{
  let mut chain: Vec<Point<T>> = Vec::new();
  for point in points {
    while chain.len() >= 2
      && !chain[chain.len() - 2]
        .orientation(&chain[chain.len() - 1], point)
        .is_ccw()
    {
      chain.pop();
    }
    chain.push(*point);
  }
  chain
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::prelude::*;
  use proptest::proptest as proptest_block;
  use test_strategy::proptest;

  fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn single_point() {
    let input = pts(&[[0.0, 0.0]]);
    assert_eq!(convex_hull(&input).into_vec(), input);
  }

  #[test]
  fn empty_set() {
    let input: Vec<Point> = vec![];
    assert!(convex_hull(&input).is_empty());
  }

  #[test]
  fn two_points() {
    let hull = convex_hull(&pts(&[[1.0, 1.0], [0.0, 0.0]]));
    assert_eq!(hull.into_vec(), pts(&[[0.0, 0.0], [1.0, 1.0]]));
  }

  #[test]
  fn square_with_interior_point() {
    let input = pts(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [2.0, 2.0]]);
    let hull = convex_hull(&input);
    assert_eq!(
      hull.into_vec(),
      pts(&[[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]])
    );
  }

  #[test]
  fn colinear_base_with_apex() {
    let input = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, 1.0]]);
    let hull = convex_hull(&input);
    assert_eq!(hull.into_vec(), pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]));
  }

  #[test]
  fn all_colinear() {
    let input = pts(&[[1.0, 1.0], [3.0, 3.0], [0.0, 0.0], [2.0, 2.0]]);
    assert_eq!(
      convex_hull(&input).into_vec(),
      pts(&[[0.0, 0.0], [3.0, 3.0]])
    );
    let vertical = pts(&[[0.0, 3.0], [0.0, 1.0], [0.0, 2.0]]);
    assert_eq!(
      convex_hull(&vertical).into_vec(),
      pts(&[[0.0, 1.0], [0.0, 3.0]])
    );
  }

  #[test]
  fn duplicates() {
    let copies = pts(&[[1.0, 1.0]]).repeat(3);
    assert_eq!(convex_hull(&copies).into_vec(), pts(&[[1.0, 1.0]]));

    let pair = pts(&[[0.0, 0.0], [0.0, 0.0], [2.0, 2.0]]);
    assert_eq!(
      convex_hull(&pair).into_vec(),
      pts(&[[0.0, 0.0], [2.0, 2.0]])
    );

    let triangle = pts(&[[0.0, 0.0], [2.0, 0.0], [0.0, 0.0], [1.0, 2.0], [2.0, 0.0]]);
    let hull = convex_hull(&triangle);
    assert_eq!(hull.len(), 3);
    assert_ok!(hull.validate());
  }

  #[test]
  fn signed_zero() {
    let input = pts(&[[-0.0, 0.0], [0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    let hull = convex_hull(&input);
    assert_eq!(hull.len(), 3);
    assert_ok!(hull.validate());
  }

  #[test]
  fn input_is_not_reordered() {
    let input = pts(&[[4.0, 4.0], [0.0, 0.0], [2.0, 1.0], [4.0, 0.0], [0.0, 4.0]]);
    let copy = input.clone();
    convex_hull(&input);
    assert_eq!(input, copy);
  }

  #[test]
  fn colinear_regression() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([3, 0]),
      Point::new([4, 0]),
      Point::new([1, 1]),
    ];
    let hull = convex_hull(&points);
    assert_ok!(hull.validate());
    assert_eq!(
      hull.into_vec(),
      vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([4, 0])]
    );
  }

  proptest_block! {
    #[test]
    fn convex_hull_prop(pts in any_cloud()) {
      let hull = convex_hull(&pts);
      // Prop #1: Results are valid.
      prop_assert!(hull.validate().is_ok());
      // Prop #2: No points from the input set are outside the hull.
      for pt in pts.iter() {
        prop_assert_ne!(hull.locate(pt), PointLocation::Outside);
      }
      // Prop #3: All vertices are in the input set.
      for pt in hull.iter() {
        prop_assert!(pts.contains(pt));
      }
    }

    #[test]
    fn idempotent(pts in any_cloud()) {
      let hull = convex_hull(&pts);
      prop_assert_eq!(convex_hull(hull.vertices()), hull);
    }

    #[test]
    fn does_not_mutate(pts in any_cloud()) {
      let copy = pts.clone();
      let _ = convex_hull(&pts);
      prop_assert_eq!(pts, copy);
    }

    #[test]
    fn order_independent(pts in any_cloud(), seed in any::<u64>()) {
      use rand::seq::SliceRandom;
      use rand::SeedableRng;
      let mut shuffled = pts.clone();
      shuffled.shuffle(&mut rand::rngs::SmallRng::seed_from_u64(seed));
      prop_assert_eq!(convex_hull(&shuffled), convex_hull(&pts));
    }
  }

  #[proptest]
  fn does_not_panic_i8(pts: Vec<Point<i8>>) {
    convex_hull(&pts);
  }

  #[proptest]
  fn is_valid_i64(pts: Vec<Point<i64>>) {
    let hull = convex_hull(&pts);
    assert_ok!(hull.validate());
    for pt in pts.iter() {
      assert_ne!(hull.locate(pt), PointLocation::Outside);
    }
  }

  #[proptest]
  fn integers_agree_with_floats(pts: Vec<Point<i16>>) {
    let as_float: Vec<Point> = pts.iter().map(|pt| pt.cast(f64::from)).collect();
    let expected: Vec<Point> = convex_hull(&pts)
      .iter()
      .map(|pt| pt.cast(f64::from))
      .collect();
    assert_eq!(convex_hull(&as_float).into_vec(), expected);
  }
}
