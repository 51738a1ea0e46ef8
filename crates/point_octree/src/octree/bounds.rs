//! Axis-aligned bounding cuboid with double precision.

use glam::DVec3;

use super::octant;

/// Double-precision axis-aligned cuboid stored as center and half extents.
///
/// The center doubles as the octant splitting origin of an interior node, so
/// it is kept exactly as computed by the split rule rather than derived from
/// corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DAabb3 {
	/// Center of the cuboid (the splitting origin).
	pub center: DVec3,
	/// Half of the full extent along each axis.
	pub half_extents: DVec3,
}

impl DAabb3 {
	/// Create a cuboid from center and half extents.
	///
	/// # Panics
	/// Debug-asserts that all half extents are non-negative.
	pub fn new(center: DVec3, half_extents: DVec3) -> Self {
		debug_assert!(
			half_extents.cmpge(DVec3::ZERO).all(),
			"half extents must be >= 0 on all axes"
		);
		Self {
			center,
			half_extents,
		}
	}

	/// Create a cuboid from full extents centered at `origin`.
	pub fn from_extents(origin: DVec3, extents: DVec3) -> Self {
		Self::new(origin, extents * 0.5)
	}

	/// Minimum corner (inclusive).
	#[inline]
	pub fn min(&self) -> DVec3 {
		self.center - self.half_extents
	}

	/// Maximum corner (inclusive).
	#[inline]
	pub fn max(&self) -> DVec3 {
		self.center + self.half_extents
	}

	/// Check if this cuboid contains a point (boundary inclusive).
	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		let min = self.min();
		let max = self.max();
		point.cmpge(min).all() && point.cmple(max).all()
	}

	/// Sub-cuboid for one of the eight octants.
	///
	/// The child center is offset from this center by half of the half
	/// extents (a quarter of the full extent) on every axis, towards the
	/// positive side where the octant bit is set.
	#[inline]
	pub fn octant(&self, index: u8) -> DAabb3 {
		DAabb3 {
			center: octant::octant_center(self.center, self.half_extents, index),
			half_extents: self.half_extents * 0.5,
		}
	}
}
