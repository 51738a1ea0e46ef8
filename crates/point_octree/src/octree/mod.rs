//! Octree module: explicit point octree with eager leaf splitting.
//!
//! The root is an interior node with eight slots. Inserting routes a point
//! through interior nodes by its octant index until it reaches an empty slot
//! (stored as a leaf) or an occupied leaf (split one level deeper, or shared
//! at the depth limit).
//!
//! # Depth Convention
//!
//! Root = depth 0, each split adds one level. A node at depth `d` has half
//! extents `root_half_extents / 2^d`.
//!
//! ```text
//! child center = parent center ± parent half extents / 2   (per octant bit)
//! ```
//!
//! # Module Structure
//!
//! - [`bounds`]: `DAabb3` - center / half-extent cuboid
//! - [`octant`]: octant index and child-center rules
//! - `node`: slot and interior node protocol (insert, nearest search)
//! - [`config`]: `OctreeConfig` - depth limit, merge tolerance, search
//! - [`stats`]: `OctreeStats` - structural snapshot
//! - [`iter`]: `Points` - depth-first traversal
//! - [`tree`]: `Octree` - public facade

pub mod bounds;
pub mod config;
pub mod iter;
pub(crate) mod node;
pub mod octant;
pub mod stats;
pub mod tree;

// Re-exports
pub use bounds::DAabb3;
pub use config::{NearestSearch, OctreeConfig};
pub use iter::Points;
pub use node::Insertion;
pub use octant::{octant_center, octant_index};
pub use stats::OctreeStats;
pub use tree::Octree;
