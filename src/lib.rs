// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Approximate metric travelling-salesman paths over points in `N`-dimensional
//! space.
//!
//! The tour is built with the nearest-neighbor heuristic. Points are sorted
//! once along their first coordinate, and every nearest-unvisited query scans
//! outwards from the current point in that order, stopping in each direction
//! as soon as the gap along the first axis exceeds the best distance found.
//!
//! ```
//! use sensor_tour::algorithms::build_tour;
//! use sensor_tour::data::Point;
//!
//! let pts = vec![
//!   Point::new([0.0, 0.0, 0.0, 0.0]),
//!   Point::new([10.0, 0.0, 0.0, 0.0]),
//!   Point::new([1.0, 0.0, 0.0, 0.0]),
//! ];
//! let tour = build_tour(pts, Some(0)).unwrap();
//! let xs: Vec<f64> = tour.iter().map(|pt| pt[0]).collect();
//! assert_eq!(xs, vec![0.0, 1.0, 10.0]);
//! ```
use num_traits::Float;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod io;

#[cfg(test)]
pub mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// No points were supplied, so there is no start point to pick.
  EmptyInput,
  /// Points have no coordinates, so there is no axis to sort on.
  ZeroDimensions,
  IndexOutOfBounds {
    index: usize,
    len: usize,
  },
  /// Every point other than the source has already been visited.
  NoUnvisitedPoints,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::EmptyInput => write!(f, "Empty input: at least one point is required"),
      Error::ZeroDimensions => write!(f, "Points must have at least one coordinate"),
      Error::IndexOutOfBounds { index, len } => {
        write!(f, "Index out of bounds: the index is {} but the length is {}", index, len)
      }
      Error::NoUnvisitedPoints => write!(f, "No unvisited points"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

/// Coordinate type of a tour. Distances are computed in the scalar itself, so
/// only floating point types qualify.
pub trait TourScalar: Float + TotalOrd + std::fmt::Debug + std::fmt::Display {}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl TourScalar for $ty {}
    )*
  };
}

floating_precision!(f32, f64);
