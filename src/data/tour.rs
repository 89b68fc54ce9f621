use super::{Point, PointId, PointSet};

use num_traits::Float;

/// Visiting order over a [`PointSet`]. The tour owns the set and refers to its
/// points by id.
#[derive(Debug, Clone)]
pub struct Tour<T, const N: usize> {
  set: PointSet<T, N>,
  order: Vec<PointId>,
}

impl<T, const N: usize> Tour<T, N> {
  pub(crate) fn new(set: PointSet<T, N>, order: Vec<PointId>) -> Tour<T, N> {
    Tour { set, order }
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  pub fn ids(&self) -> &[PointId] {
    &self.order
  }

  pub fn point_set(&self) -> &PointSet<T, N> {
    &self.set
  }

  /// Points in visiting order.
  pub fn iter(&self) -> impl ExactSizeIterator<Item = &Point<T, N>> + '_ {
    self.order.iter().map(move |&pid| &self.set[pid])
  }

  /// Visiting order expressed as positions in the input sequence.
  pub fn input_order(&self) -> Vec<usize> {
    self
      .order
      .iter()
      .filter_map(|&pid| self.set.original_index(pid).ok())
      .collect()
  }

  /// Every point of the set appears exactly once.
  pub fn is_complete(&self) -> bool {
    if self.order.len() != self.set.len() {
      return false;
    }
    let mut seen = vec![false; self.set.len()];
    for pid in self.order.iter() {
      match seen.get_mut(pid.usize()) {
        Some(slot) if !*slot => *slot = true,
        _ => return false,
      }
    }
    true
  }

  /// Length of the open path from the first to the last point.
  pub fn path_length(&self) -> T
  where
    T: Float,
  {
    self
      .iter()
      .zip(self.iter().skip(1))
      .fold(T::zero(), |acc, (a, b)| acc + a.euclidean_distance(b))
  }

  /// Points in visiting order.
  pub fn into_points(self) -> Vec<Point<T, N>> {
    let mut slots: Vec<Option<Point<T, N>>> = self.set.into_points().into_iter().map(Some).collect();
    self
      .order
      .iter()
      .filter_map(|&pid| slots[pid.usize()].take())
      .collect()
  }
}
