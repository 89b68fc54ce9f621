use super::{improves, Neighbor};
use crate::data::{PointId, PointSet};
use crate::{Error, TourScalar};

/// Find the unvisited point closest to `source` by measuring the distance to
/// every other point. Works on unsorted sets. Ties go to the lowest id.
///
/// # Time complexity
/// $O(n)$
pub fn closest_unvisited_naive<T, const N: usize>(
  set: &PointSet<T, N>,
  source: PointId,
) -> Result<Neighbor<T>, Error>
where
  T: TourScalar,
{
  let origin = set.point(source)?;
  let mut best = None;
  for id in set.ids() {
    if id == source || set.visited_unchecked(id.usize()) {
      continue;
    }
    let distance = origin.euclidean_distance(&set[id]);
    if improves(best.as_ref(), distance) {
      best = Some(Neighbor { id, distance });
    }
  }
  best.ok_or(Error::NoUnvisitedPoints)
}
