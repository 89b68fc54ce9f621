//! Closest-unvisited-point queries over a [`PointSet`](crate::data::PointSet).
use crate::data::PointId;

use num_traits::Float;

pub mod axis_sweep;
pub mod naive;

/// Result of a closest-unvisited query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<T> {
  pub id: PointId,
  pub distance: T,
}

// Whether a candidate at `distance` replaces the current best. The first
// candidate is always taken, even with a NaN distance, and a NaN best gives
// way to any comparable distance. Ties keep the earlier candidate.
fn improves<T: Float>(best: Option<&Neighbor<T>>, distance: T) -> bool {
  match best {
    None => true,
    Some(best) => distance < best.distance || (best.distance.is_nan() && !distance.is_nan()),
  }
}
