//! Plain-text point files: one point per line, coordinates separated by
//! commas.
use crate::data::{Point, Tour};

use array_init::try_array_init;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug)]
pub enum InputError {
  Io(std::io::Error),
  /// Line `line` (1-based) has the wrong number of coordinates.
  Arity {
    line: usize,
    expected: usize,
    found: usize,
  },
  /// A field on line `line` (1-based) is not a number.
  Malformed { line: usize, field: String },
}

impl fmt::Display for InputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputError::Io(err) => write!(f, "I/O error: {}", err),
      InputError::Arity {
        line,
        expected,
        found,
      } => write!(
        f,
        "Line {}: expected {} coordinates but found {}",
        line, expected, found
      ),
      InputError::Malformed { line, field } => {
        write!(f, "Line {}: {:?} is not a number", line, field)
      }
    }
  }
}

impl std::error::Error for InputError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      InputError::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for InputError {
  fn from(err: std::io::Error) -> InputError {
    InputError::Io(err)
  }
}

/// Parse one comma separated record. A single trailing comma is allowed.
/// `line` is only used for error messages.
pub fn parse_point<T, const N: usize>(record: &str, line: usize) -> Result<Point<T, N>, InputError>
where
  T: FromStr,
{
  let mut fields: Vec<&str> = record.split(',').map(str::trim).collect();
  if fields.len() == N + 1 && fields.last() == Some(&"") {
    fields.pop();
  }
  if fields.len() != N {
    return Err(InputError::Arity {
      line,
      expected: N,
      found: fields.len(),
    });
  }
  let array = try_array_init(|i| {
    fields[i].parse::<T>().map_err(|_| InputError::Malformed {
      line,
      field: fields[i].to_string(),
    })
  })?;
  Ok(Point::new(array))
}

/// Read every point from `reader`. Blank lines are skipped.
pub fn read_points<T, R, const N: usize>(reader: R) -> Result<Vec<Point<T, N>>, InputError>
where
  T: FromStr,
  R: BufRead,
{
  let mut points = Vec::new();
  for (nth, line) in reader.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }
    points.push(parse_point(&line, nth + 1)?);
  }
  Ok(points)
}

/// Write the points of `tour` in visiting order, one per line.
pub fn write_tour<T, W, const N: usize>(mut writer: W, tour: &Tour<T, N>) -> std::io::Result<()>
where
  T: fmt::Display,
  W: Write,
{
  for pt in tour.iter() {
    writeln!(writer, "{}", pt)?;
  }
  writer.flush()
}
