use super::{improves, Neighbor};
use crate::data::{Point, PointId, PointSet};
use crate::{Error, TourScalar};

// Axis the point set is sorted on.
const SWEEP_AXIS: usize = 0;

/// Find the unvisited point closest to `source`.
///
/// The set is scanned outwards from `source` in sorted order, first towards
/// lower ids and then towards higher ids. Both scans share one running best
/// distance. A scan stops as soon as the gap along the first axis to the point
/// just examined exceeds that distance: points further along are at least as
/// far away on that axis alone, so none of them can be closer. The pruning is
/// exact and never skips the true nearest point.
///
/// Among candidates at equal distance, the first one met wins: the nearest id
/// below `source`, otherwise the nearest id above it.
///
/// # Errors
///
/// * [`Error::IndexOutOfBounds`] if `source` is not an id of `set`.
/// * [`Error::NoUnvisitedPoints`] if every point other than `source` is
///   visited. Tour construction treats this as completion.
///
/// # Panics
///
/// Panics if `set` has not been sorted with
/// [`PointSet::sort_by_first_coordinate`].
///
/// # Time complexity
/// $O(n)$ worst case, when the points share their first coordinate. Far less
/// when the first coordinates are well spread.
pub fn closest_unvisited<T, const N: usize>(
  set: &PointSet<T, N>,
  source: PointId,
) -> Result<Neighbor<T>, Error>
where
  T: TourScalar,
{
  assert!(
    set.is_sorted(),
    "point set must be sorted by its first coordinate"
  );
  let origin = set.point(source)?;
  let mut best = None;
  sweep(set, origin, (0..source.usize()).rev(), &mut best);
  sweep(set, origin, source.usize() + 1..set.len(), &mut best);
  best.ok_or(Error::NoUnvisitedPoints)
}

fn sweep<T, const N: usize>(
  set: &PointSet<T, N>,
  origin: &Point<T, N>,
  indices: impl Iterator<Item = usize>,
  best: &mut Option<Neighbor<T>>,
) where
  T: TourScalar,
{
  for idx in indices {
    let id = PointId::from(idx);
    let candidate = &set[id];
    if !set.visited_unchecked(idx) {
      let distance = origin.euclidean_distance(candidate);
      if improves(best.as_ref(), distance) {
        *best = Some(Neighbor { id, distance });
      }
    }
    // Visited points still bound the scan.
    if let Some(found) = best {
      if origin.axis_distance(candidate, SWEEP_AXIS) > found.distance {
        break;
      }
    }
  }
}
