//! Octant index rule.
//!
//! Maps a point to one of the eight children of an interior node:
//!
//! ```text
//! bit 0 (1): center.x < point.x
//! bit 1 (2): center.y < point.y
//! bit 2 (4): center.z < point.z
//! ```
//!
//! Comparisons are strict, so a coordinate equal to the center resolves to
//! the low side. NaN coordinates compare false and also resolve low.

use glam::DVec3;

use crate::constants::{OCTANT_X, OCTANT_Y, OCTANT_Z};

/// Octant index of `point` relative to `center`.
#[inline]
pub fn octant_index(center: DVec3, point: DVec3) -> u8 {
  let mut index = 0;
  if center.x < point.x {
    index |= OCTANT_X;
  }
  if center.y < point.y {
    index |= OCTANT_Y;
  }
  if center.z < point.z {
    index |= OCTANT_Z;
  }
  index
}

/// Center of the child cuboid for `index`.
///
/// Offsets `center` by half of `half_extents` on every axis: added where the
/// octant bit is set, subtracted where it is clear.
#[inline]
pub fn octant_center(center: DVec3, half_extents: DVec3, index: u8) -> DVec3 {
  let quarter = half_extents * 0.5;
  DVec3::new(
    offset(center.x, quarter.x, index & OCTANT_X != 0),
    offset(center.y, quarter.y, index & OCTANT_Y != 0),
    offset(center.z, quarter.z, index & OCTANT_Z != 0),
  )
}

#[inline]
fn offset(value: f64, by: f64, positive: bool) -> f64 {
  if positive {
    value + by
  } else {
    value - by
  }
}

#[cfg(test)]
#[path = "octant_test.rs"]
mod octant_test;
