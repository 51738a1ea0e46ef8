//! Point collaborator trait.

use glam::{DVec3, Vec3};

/// A point in 3D space that the octree can store or be queried with.
///
/// Only the three coordinate accessors are required. The octree routes and
/// compares points exclusively through [`Location::position`] and
/// [`Location::quick_distance_to`].
pub trait Location {
  /// X coordinate.
  fn x(&self) -> f64;
  /// Y coordinate.
  fn y(&self) -> f64;
  /// Z coordinate.
  fn z(&self) -> f64;

  /// Coordinates as a double-precision vector.
  #[inline]
  fn position(&self) -> DVec3 {
    DVec3::new(self.x(), self.y(), self.z())
  }

  /// Fast distance to another location.
  ///
  /// Returns the squared Euclidean distance: monotonic with the true
  /// distance and free of a square root, so it is only meaningful for
  /// comparisons against values produced the same way.
  #[inline]
  fn quick_distance_to<L: Location + ?Sized>(&self, other: &L) -> f64 {
    self.position().distance_squared(other.position())
  }
}

impl Location for DVec3 {
  #[inline]
  fn x(&self) -> f64 {
    self.x
  }
  #[inline]
  fn y(&self) -> f64 {
    self.y
  }
  #[inline]
  fn z(&self) -> f64 {
    self.z
  }
  #[inline]
  fn position(&self) -> DVec3 {
    *self
  }
}

impl Location for Vec3 {
  #[inline]
  fn x(&self) -> f64 {
    self.x as f64
  }
  #[inline]
  fn y(&self) -> f64 {
    self.y as f64
  }
  #[inline]
  fn z(&self) -> f64 {
    self.z as f64
  }
}

impl Location for [f64; 3] {
  #[inline]
  fn x(&self) -> f64 {
    self[0]
  }
  #[inline]
  fn y(&self) -> f64 {
    self[1]
  }
  #[inline]
  fn z(&self) -> f64 {
    self[2]
  }
}

impl Location for (f64, f64, f64) {
  #[inline]
  fn x(&self) -> f64 {
    self.0
  }
  #[inline]
  fn y(&self) -> f64 {
    self.1
  }
  #[inline]
  fn z(&self) -> f64 {
    self.2
  }
}

impl<L: Location + ?Sized> Location for &L {
  #[inline]
  fn x(&self) -> f64 {
    (**self).x()
  }
  #[inline]
  fn y(&self) -> f64 {
    (**self).y()
  }
  #[inline]
  fn z(&self) -> f64 {
    (**self).z()
  }
  #[inline]
  fn position(&self) -> DVec3 {
    (**self).position()
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
