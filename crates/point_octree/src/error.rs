//! Error types for octree construction.

use std::fmt;

use thiserror::Error;

/// Coordinate axis, used to report which extent was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl fmt::Display for Axis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Axis::X => f.write_str("x"),
      Axis::Y => f.write_str("y"),
      Axis::Z => f.write_str("z"),
    }
  }
}

/// Errors that can occur when constructing an octree.
///
/// Inserts and queries are total; only the root geometry can be invalid.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum OctreeError {
  /// A full extent was zero, negative, NaN or infinite.
  #[error("invalid {axis} extent {value}: extents must be finite and positive")]
  InvalidExtent {
    /// Axis of the rejected extent.
    axis: Axis,
    /// The rejected full extent.
    value: f64,
  },

  /// The origin had a NaN or infinite coordinate.
  #[error("origin ({x}, {y}, {z}) must be finite")]
  NonFiniteOrigin {
    /// X coordinate.
    x: f64,
    /// Y coordinate.
    y: f64,
    /// Z coordinate.
    z: f64,
  },
}

/// Result type alias for octree construction.
pub type Result<T> = std::result::Result<T, OctreeError>;
