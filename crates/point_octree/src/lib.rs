//! point_octree - Eagerly splitting octree over 3D points
//!
//! This crate stores points in a recursive axis-aligned subdivision of space
//! and answers nearest-point queries. Every interior node routes a point to
//! one of its eight octants by a fixed sign-bit rule; a leaf holds a single
//! point and splits into a new interior node the moment a second point
//! lands on it.
//!
//! # Features
//!
//! - **Octant routing**: deterministic 3-bit octant index, boundary-equal
//!   coordinates always resolve to the low side
//! - **Eager splitting**: occupied leaves become interior nodes one level
//!   deeper, bounded by [`OctreeConfig::max_depth`] without losing points
//! - **Nearest point**: greedy octant descent or exact branch-and-bound
//!   search ([`NearestSearch`])
//! - **Batch queries**: read-only queries answered in parallel with rayon
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use point_octree::Octree;
//!
//! let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
//! tree.insert(DVec3::new(10.0, 10.0, 10.0));
//! tree.insert(DVec3::new(-10.0, -10.0, -10.0));
//! tree.insert(DVec3::new(10.0, -10.0, 10.0));
//!
//! let nearest = tree.find_nearest(&DVec3::splat(9.0));
//! assert_eq!(nearest, Some(&DVec3::splat(10.0)));
//! assert_eq!(tree.collect_all().len(), 3);
//! ```

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{DEFAULT_MAX_DEPTH, OCTANT_COUNT};
pub use error::{Axis, OctreeError, Result};
pub use types::Location;

// Octree module: node protocol, configuration and the public facade
pub mod octree;
pub use octree::{
  DAabb3, Insertion, NearestSearch, Octree, OctreeConfig, OctreeStats, Points,
};
