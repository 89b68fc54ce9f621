use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// Straight-line distance in `N` dimensions.
  ///
  /// NaN and infinite coordinates are not special-cased; they propagate into
  /// the result.
  pub fn euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (&a, &b)| {
        let diff = a - b;
        acc + diff * diff
      })
  }

  /// Distance between the projections of both points onto one axis. Never
  /// larger than the Euclidean distance.
  ///
  /// # Panics
  ///
  /// Panics if `axis >= N`.
  pub fn axis_distance(&self, rhs: &Point<T, N>, axis: usize) -> T
  where
    T: Float,
  {
    (self.array[axis] - rhs.array[axis]).abs()
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

// Comma-joined coordinates, e.g. "1,2.5,-3,0".
impl<T: fmt::Display, const N: usize> fmt::Display for Point<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, coord) in self.array.iter().enumerate() {
      if i > 0 {
        write!(f, ",")?;
      }
      write!(f, "{}", coord)?;
    }
    Ok(())
  }
}
