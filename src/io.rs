//! Loading the initial point list.
//!
//! The format is a sequence of decimal numbers separated by any whitespace,
//! consumed in pairs as `x y`. Line breaks carry no meaning:
//!
//! ```text
//! 100 100
//! 250.5 80
//! 400 300 120 420
//! ```
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::Point;

#[derive(Debug)]
pub enum LoadError {
  Io(std::io::Error),
  /// The token at `index` (counting from zero) is not a number.
  InvalidNumber { index: usize, token: String },
  /// The token at `index` is NaN or infinite.
  NonFinite { index: usize, token: String },
  /// The input ends in the middle of a point.
  OddCoordinateCount { count: usize },
}

impl fmt::Display for LoadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LoadError::Io(err) => write!(f, "Failed to read points: {}", err),
      LoadError::InvalidNumber { index, token } => {
        write!(f, "Token {} is not a number: {:?}", index, token)
      }
      LoadError::NonFinite { index, token } => {
        write!(f, "Token {} is not a finite number: {:?}", index, token)
      }
      LoadError::OddCoordinateCount { count } => write!(
        f,
        "Expected an even number of coordinates, found {}",
        count
      ),
    }
  }
}

impl std::error::Error for LoadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      LoadError::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for LoadError {
  fn from(err: std::io::Error) -> LoadError {
    LoadError::Io(err)
  }
}

/// Parse whitespace-separated coordinate pairs.
pub fn parse_points(input: &str) -> Result<Vec<Point>, LoadError> {
  let mut coordinates: Vec<f64> = Vec::new();
  for (index, token) in input.split_whitespace().enumerate() {
    let value: f64 = token.parse().map_err(|_| LoadError::InvalidNumber {
      index,
      token: token.to_owned(),
    })?;
    if !value.is_finite() {
      return Err(LoadError::NonFinite {
        index,
        token: token.to_owned(),
      });
    }
    coordinates.push(value);
  }
  if coordinates.len() % 2 != 0 {
    return Err(LoadError::OddCoordinateCount {
      count: coordinates.len(),
    });
  }
  Ok(
    coordinates
      .chunks_exact(2)
      .map(|pair| Point::new([pair[0], pair[1]]))
      .collect(),
  )
}

pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<Point>, LoadError> {
  let mut input = String::new();
  reader.read_to_string(&mut input)?;
  parse_points(&input)
}

pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, LoadError> {
  let path = path.as_ref();
  let points = read_points(File::open(path)?)?;
  log::debug!("loaded {} points from {}", points.len(), path.display());
  Ok(points)
}
