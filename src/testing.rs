// Strategies for points and point clouds.
use crate::data::Point;

use proptest::collection::vec;
use proptest::prelude::*;

const COORD_RANGE: std::ops::Range<f64> = -1000.0..1000.0;

// Finite coordinates only. The range keeps squared distances far away from
// overflow.
pub fn any_finite<const N: usize>() -> impl Strategy<Value = Point<f64, N>> {
  vec(COORD_RANGE, N).prop_map(|coords| Point {
    array: coords.try_into().unwrap(),
  })
}

// Small integer grid. Produces plenty of duplicate points and ties on the
// first coordinate.
pub fn any_grid<const N: usize>() -> impl Strategy<Value = Point<f64, N>> {
  vec(-5_i8..5, N).prop_map(|coords| Point {
    array: coords
      .into_iter()
      .map(f64::from)
      .collect::<Vec<f64>>()
      .try_into()
      .unwrap(),
  })
}

pub fn any_cloud<const N: usize>(
  len: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<Point<f64, N>>> {
  prop_oneof![vec(any_finite::<N>(), len.clone()), vec(any_grid::<N>(), len)]
}
