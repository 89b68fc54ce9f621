use super::Point;
use crate::{Error, TotalOrd};

use std::ops::Index;

/// Position of a point inside a [`PointSet`]. Ids are assigned after sorting,
/// so neighbouring ids have neighbouring first coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PointId(usize);

impl PointId {
  pub fn usize(self) -> usize {
    self.0
  }
}

impl From<PointId> for usize {
  fn from(pid: PointId) -> usize {
    pid.0
  }
}

impl From<usize> for PointId {
  fn from(idx: usize) -> PointId {
    PointId(idx)
  }
}

impl std::fmt::Display for PointId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Arena of points with a parallel visited array.
///
/// The number of points is fixed at construction. The only state that ever
/// changes is the visited flag of each point, and it only goes from `false`
/// to `true`.
#[derive(Debug, Clone)]
pub struct PointSet<T, const N: usize> {
  points: Vec<Point<T, N>>,
  visited: Vec<bool>,
  // Position of each point in the caller's input.
  origin: Vec<usize>,
  sorted: bool,
}

impl<T, const N: usize> PointSet<T, N> {
  /// Takes ownership of `points`, keeping their input order.
  ///
  /// # Errors
  ///
  /// * [`Error::ZeroDimensions`] if `N == 0`.
  /// * [`Error::EmptyInput`] if `points` is empty.
  pub fn new(points: Vec<Point<T, N>>) -> Result<PointSet<T, N>, Error> {
    if N == 0 {
      return Err(Error::ZeroDimensions);
    }
    if points.is_empty() {
      return Err(Error::EmptyInput);
    }
    let len = points.len();
    Ok(PointSet {
      points,
      visited: vec![false; len],
      origin: (0..len).collect(),
      sorted: len == 1,
    })
  }

  /// Stable sort by `coords[0]`. Equal first coordinates keep their input
  /// order. Sorting an already sorted set does nothing.
  ///
  /// # Panics
  ///
  /// Panics if a point has already been visited. Ids handed out before the
  /// sort would silently change meaning otherwise.
  pub fn sort_by_first_coordinate(&mut self)
  where
    T: TotalOrd,
  {
    if self.sorted {
      return;
    }
    assert!(
      self.visited.iter().all(|&v| !v),
      "point set must be sorted before any point is visited"
    );
    let points = &self.points;
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].array[0].total_cmp(&points[b].array[0]));

    let mut slots: Vec<Option<Point<T, N>>> = self.points.drain(..).map(Some).collect();
    self.points = order
      .iter()
      .filter_map(|&idx| slots[idx].take())
      .collect();
    self.origin = order.iter().map(|&idx| self.origin[idx]).collect();
    self.sorted = true;
  }

  pub fn is_sorted(&self) -> bool {
    self.sorted
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  /// Always `false`: an empty set cannot be constructed.
  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, pid: PointId) -> Result<&Point<T, N>, Error> {
    self.points.get(pid.0).ok_or(Error::IndexOutOfBounds {
      index: pid.0,
      len: self.len(),
    })
  }

  pub fn is_visited(&self, pid: PointId) -> Result<bool, Error> {
    self.check(pid)?;
    Ok(self.visited[pid.0])
  }

  /// Marking a visited point again is a no-op.
  pub fn mark_visited(&mut self, pid: PointId) -> Result<(), Error> {
    self.check(pid)?;
    self.visited[pid.0] = true;
    Ok(())
  }

  /// Index of the point in the sequence originally passed to [`PointSet::new`].
  pub fn original_index(&self, pid: PointId) -> Result<usize, Error> {
    self.check(pid)?;
    Ok(self.origin[pid.0])
  }

  /// Id of the point that was at `index` in the input sequence.
  pub fn id_of_original(&self, index: usize) -> Result<PointId, Error> {
    self
      .origin
      .iter()
      .position(|&o| o == index)
      .map(PointId)
      .ok_or(Error::IndexOutOfBounds {
        index,
        len: self.len(),
      })
  }

  pub fn unvisited_count(&self) -> usize {
    self.visited.iter().filter(|&&v| !v).count()
  }

  pub fn ids(&self) -> impl ExactSizeIterator<Item = PointId> {
    (0..self.len()).map(PointId)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, N>> {
    self.points.iter()
  }

  pub fn into_points(self) -> Vec<Point<T, N>> {
    self.points
  }

  // Unchecked accessors for the hot search loop. Callers only pass ids in
  // `0..len`.
  pub(crate) fn visited_unchecked(&self, idx: usize) -> bool {
    self.visited[idx]
  }

  fn check(&self, pid: PointId) -> Result<(), Error> {
    if pid.0 < self.len() {
      Ok(())
    } else {
      Err(Error::IndexOutOfBounds {
        index: pid.0,
        len: self.len(),
      })
    }
  }
}

// Panics on out-of-range ids, like slice indexing.
impl<T, const N: usize> Index<PointId> for PointSet<T, N> {
  type Output = Point<T, N>;
  fn index(&self, pid: PointId) -> &Point<T, N> {
    &self.points[pid.0]
  }
}
