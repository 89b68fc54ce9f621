use super::nearest_neighbor::axis_sweep::closest_unvisited;
use crate::data::{Point, PointId, PointSet, Tour};
use crate::{Error, TourScalar};

use log::{debug, trace};
use rand::Rng;

/// Greedy nearest-neighbor walk over a set of points.
///
/// The builder is an iterator: the first item is the start point, and every
/// later item is the unvisited point closest to the previous one. It is
/// exhausted once every point has been visited. A caller with a deadline can
/// stop pulling items at any step and resume later.
///
/// ```
/// use sensor_tour::algorithms::TourBuilder;
/// use sensor_tour::data::Point;
///
/// let pts = vec![Point::new([0.0, 0.0]), Point::new([3.0, 0.0]), Point::new([1.0, 0.0])];
/// let mut builder = TourBuilder::new(pts, 1).unwrap();
/// let first = builder.next().unwrap();
/// assert_eq!(builder.point_set()[first], Point::new([3.0, 0.0]));
/// let tour = builder.finish();
/// assert_eq!(tour.input_order(), vec![1, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct TourBuilder<T, const N: usize> {
  set: PointSet<T, N>,
  order: Vec<PointId>,
  start: PointId,
  done: bool,
}

impl<T, const N: usize> TourBuilder<T, N>
where
  T: TourScalar,
{
  /// Sorts `points` by their first coordinate and prepares a walk starting
  /// at `points[start]`.
  ///
  /// # Errors
  ///
  /// * [`Error::ZeroDimensions`] if `N == 0`.
  /// * [`Error::EmptyInput`] if `points` is empty.
  /// * [`Error::IndexOutOfBounds`] if `start >= points.len()`.
  pub fn new(points: Vec<Point<T, N>>, start: usize) -> Result<TourBuilder<T, N>, Error> {
    let mut set = PointSet::new(points)?;
    if start >= set.len() {
      return Err(Error::IndexOutOfBounds {
        index: start,
        len: set.len(),
      });
    }
    set.sort_by_first_coordinate();
    debug!("sorted {} points by first coordinate", set.len());
    let start = set.id_of_original(start)?;
    debug!("starting tour at input point {}", set[start]);
    Ok(TourBuilder {
      order: Vec::with_capacity(set.len()),
      set,
      start,
      done: false,
    })
  }

  pub fn point_set(&self) -> &PointSet<T, N> {
    &self.set
  }

  /// Points visited so far, in order.
  pub fn visited(&self) -> &[PointId] {
    &self.order
  }

  pub fn current(&self) -> Option<PointId> {
    self.order.last().copied()
  }

  pub fn is_complete(&self) -> bool {
    self.order.len() == self.set.len()
  }

  /// Visits every remaining point and returns the finished tour.
  pub fn finish(mut self) -> Tour<T, N> {
    self.by_ref().for_each(drop);
    debug_assert!(self.is_complete());
    debug!("tour complete with {} points", self.order.len());
    Tour::new(self.set, self.order)
  }

  fn visit(&mut self, pid: PointId) -> Option<PointId> {
    self.set.mark_visited(pid).ok()?;
    self.order.push(pid);
    Some(pid)
  }
}

impl<T, const N: usize> Iterator for TourBuilder<T, N>
where
  T: TourScalar,
{
  type Item = PointId;

  fn next(&mut self) -> Option<PointId> {
    if self.done {
      return None;
    }
    let current = match self.current() {
      None => return self.visit(self.start),
      Some(current) => current,
    };
    if self.is_complete() {
      self.done = true;
      return None;
    }
    match closest_unvisited(&self.set, current) {
      Ok(neighbor) => {
        trace!(
          "{} -> {} at distance {}",
          current,
          neighbor.id,
          neighbor.distance
        );
        self.visit(neighbor.id)
      }
      Err(err) => {
        // `current` is always a valid id, so the only possible failure is
        // running out of points.
        debug_assert_eq!(err, Error::NoUnvisitedPoints);
        self.done = true;
        None
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = if self.done {
      0
    } else {
      self.set.len() - self.order.len()
    };
    (remaining, Some(remaining))
  }
}

/// Build a nearest-neighbor tour over `points`.
///
/// `start` is a position in `points`. Without one, the start point is picked
/// uniformly at random.
///
/// # Errors
///
/// * [`Error::EmptyInput`] if `points` is empty.
/// * [`Error::ZeroDimensions`] if `N == 0`.
/// * [`Error::IndexOutOfBounds`] if `start` is not a position in `points`.
///
/// # Time complexity
/// $O(n \log n)$ for the sort plus one closest-unvisited query per point,
/// each $O(n)$ in the worst case.
pub fn build_tour<T, const N: usize>(
  points: Vec<Point<T, N>>,
  start: Option<usize>,
) -> Result<Tour<T, N>, Error>
where
  T: TourScalar,
{
  match start {
    Some(start) => build_tour_with(points, |_| start),
    None => build_tour_random(points, &mut rand::thread_rng()),
  }
}

/// Build a tour whose start point is chosen by `choose_start`. The policy is
/// given the number of points and returns a position in `points`. It is not
/// called for empty input.
pub fn build_tour_with<T, F, const N: usize>(
  points: Vec<Point<T, N>>,
  choose_start: F,
) -> Result<Tour<T, N>, Error>
where
  T: TourScalar,
  F: FnOnce(usize) -> usize,
{
  if points.is_empty() {
    return Err(Error::EmptyInput);
  }
  let start = choose_start(points.len());
  Ok(TourBuilder::new(points, start)?.finish())
}

/// Build a tour from a start point drawn uniformly with `rng`.
pub fn build_tour_random<T, R, const N: usize>(
  points: Vec<Point<T, N>>,
  rng: &mut R,
) -> Result<Tour<T, N>, Error>
where
  T: TourScalar,
  R: Rng + ?Sized,
{
  build_tour_with(points, |len| rng.gen_range(0..len))
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::algorithms::nearest_neighbor::naive::closest_unvisited_naive;
  use crate::testing::any_cloud;
  use claims::{assert_err_eq, assert_ok};
  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn xs<const N: usize>(tour: &Tour<f64, N>) -> Vec<f64> {
    tour.iter().map(|pt| pt[0]).collect()
  }

  #[test]
  fn closest_first() {
    let pts = vec![
      Point::new([0.0, 0.0, 0.0, 0.0]),
      Point::new([10.0, 0.0, 0.0, 0.0]),
      Point::new([1.0, 0.0, 0.0, 0.0]),
    ];
    let tour = build_tour(pts, Some(0)).unwrap();
    assert_eq!(
      tour.into_points(),
      vec![
        Point::new([0.0, 0.0, 0.0, 0.0]),
        Point::new([1.0, 0.0, 0.0, 0.0]),
        Point::new([10.0, 0.0, 0.0, 0.0]),
      ]
    );
  }

  #[test]
  fn empty_input() {
    assert_err_eq!(build_tour::<f64, 4>(vec![], Some(0)), Error::EmptyInput);
    assert_err_eq!(build_tour::<f64, 4>(vec![], None), Error::EmptyInput);
    let mut called = false;
    let ret = build_tour_with::<f64, _, 2>(vec![], |_| {
      called = true;
      0
    });
    assert_err_eq!(ret, Error::EmptyInput);
    assert!(!called);
  }

  #[test]
  fn zero_dimensions() {
    assert_err_eq!(
      build_tour(vec![Point::<f64, 0>::new([]); 2], Some(0)),
      Error::ZeroDimensions
    );
  }

  #[test]
  fn start_out_of_bounds() {
    let pts = vec![Point::new([0.0]), Point::new([1.0])];
    assert_err_eq!(
      build_tour(pts, Some(2)),
      Error::IndexOutOfBounds { index: 2, len: 2 }
    );
  }

  #[test]
  fn single_point() {
    let mut builder = TourBuilder::new(vec![Point::new([2.0, 7.0])], 0).unwrap();
    assert_eq!(builder.next(), Some(PointId::from(0)));
    assert!(builder.is_complete());
    assert_eq!(builder.next(), None);
    let tour = builder.finish();
    assert_eq!(tour.len(), 1);
    assert!(tour.is_complete());
  }

  #[test]
  fn two_points() {
    for start in 0..2 {
      let pts = vec![Point::new([5.0, 1.0]), Point::new([-2.0, 3.0])];
      let tour = build_tour(pts, Some(start)).unwrap();
      assert_eq!(tour.len(), 2);
      assert!(tour.is_complete());
      assert_eq!(tour.input_order()[0], start);
    }
  }

  #[test]
  fn start_refers_to_input_order() {
    let pts = vec![
      Point::new([9.0, 0.0]),
      Point::new([0.0, 0.0]),
      Point::new([5.0, 0.0]),
    ];
    let tour = build_tour(pts, Some(0)).unwrap();
    assert_eq!(xs(&tour), vec![9.0, 5.0, 0.0]);
    assert_eq!(tour.input_order(), vec![0, 2, 1]);
  }

  #[test]
  fn shared_first_coordinate() {
    let pts: Vec<Point<f64, 3>> = (0..50)
      .map(|i| Point::new([1.0, f64::from(i % 7), f64::from(i / 7)]))
      .collect();
    let tour = build_tour(pts, Some(17)).unwrap();
    assert_eq!(tour.len(), 50);
    assert!(tour.is_complete());
  }

  #[test]
  fn nan_coordinates() {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([f64::NAN, 1.0]),
      Point::new([1.0, f64::NAN]),
      Point::new([2.0, 0.0]),
    ];
    let tour = build_tour(pts, Some(0)).unwrap();
    assert!(tour.is_complete());
  }

  #[test]
  fn interruptible() {
    let pts: Vec<Point<f64, 1>> = (0..10).map(|i| Point::new([f64::from(i)])).collect();
    let mut builder = TourBuilder::new(pts, 4).unwrap();
    assert_eq!(builder.size_hint(), (10, Some(10)));
    let head: Vec<PointId> = builder.by_ref().take(3).collect();
    assert_eq!(head.len(), 3);
    assert_eq!(builder.visited(), &head[..]);
    assert_eq!(builder.current(), head.last().copied());
    assert!(!builder.is_complete());
    let tour = builder.finish();
    assert!(tour.is_complete());
    assert_eq!(&tour.ids()[..3], &head[..]);
  }

  #[test]
  fn start_policy() {
    let pts = vec![Point::new([0.0]), Point::new([1.0]), Point::new([2.0])];
    let tour = build_tour_with(pts, |len| len - 1).unwrap();
    assert_eq!(xs(&tour), vec![2.0, 1.0, 0.0]);
  }

  #[test]
  fn seeded_random_start() {
    let pts: Vec<Point<f64, 4>> = {
      let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
      (0..100).map(|_| rng.gen()).collect()
    };
    let a = build_tour_random(pts.clone(), &mut rand::rngs::SmallRng::seed_from_u64(1)).unwrap();
    let b = build_tour_random(pts.clone(), &mut rand::rngs::SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(a.ids(), b.ids());
    assert!(a.is_complete());
    assert_ok!(build_tour(pts, None));
  }

  #[test]
  fn f32_points() {
    let pts = vec![Point::new([0.0_f32, 1.0]), Point::new([3.0, 1.0]), Point::new([1.0, 1.0])];
    let tour = build_tour(pts, Some(1)).unwrap();
    assert_eq!(tour.path_length(), 3.0);
  }

  #[proptest]
  fn tour_is_permutation(
    #[strategy(any_cloud::<4>(1..150))] pts: Vec<Point<f64, 4>>,
    #[strategy(any::<usize>())] seed: usize,
  ) {
    let len = pts.len();
    let tour = build_tour(pts, Some(seed % len)).unwrap();
    prop_assert_eq!(tour.len(), len);
    prop_assert!(tour.is_complete());
    let mut input_order = tour.input_order();
    input_order.sort_unstable();
    prop_assert_eq!(input_order, (0..len).collect::<Vec<usize>>());
  }

  // Every step moves to a point as close as the brute-force choice.
  #[proptest]
  fn steps_are_greedy(
    #[strategy(any_cloud::<3>(2..80))] pts: Vec<Point<f64, 3>>,
    #[strategy(any::<usize>())] seed: usize,
  ) {
    let len = pts.len();
    let tour = build_tour(pts.clone(), Some(seed % len)).unwrap();
    let mut replay = PointSet::new(pts).unwrap();
    replay.sort_by_first_coordinate();
    for (&from, &to) in tour.ids().iter().zip(tour.ids().iter().skip(1)) {
      replay.mark_visited(from).unwrap();
      let expected = closest_unvisited_naive(&replay, from).unwrap();
      prop_assert!(!replay.is_visited(to).unwrap());
      prop_assert_eq!(replay[from].euclidean_distance(&replay[to]), expected.distance);
    }
  }
}
