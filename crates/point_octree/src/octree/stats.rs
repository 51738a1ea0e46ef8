//! Structural statistics for an octree.

use super::node::{Interior, Slot};

/// Snapshot of the tree's shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
	/// Points stored in leaves.
	pub points: usize,
	/// Occupied leaves.
	pub leaves: usize,
	/// Leaves at the depth limit holding more than one point.
	pub shared_leaves: usize,
	/// Interior nodes, including the root.
	pub interior_nodes: usize,
	/// Empty slots (empty leaves).
	pub empty_slots: usize,
	/// Depth of the deepest interior node (root = 0).
	pub max_depth: u32,
	/// Inserts merged into an occupied leaf since construction.
	pub merged: usize,
}

impl OctreeStats {
	/// Walk the tree under `root`. `merged` is carried over from the tree's
	/// running counter.
	pub(crate) fn collect<P>(root: &Interior<P>, merged: usize) -> Self {
		let mut stats = Self {
			merged,
			..Default::default()
		};
		let mut pending = vec![(root, 0u32)];

		while let Some((node, depth)) = pending.pop() {
			stats.interior_nodes += 1;
			stats.max_depth = stats.max_depth.max(depth);
			for slot in &node.children {
				match slot {
					Slot::Empty => stats.empty_slots += 1,
					Slot::Leaf(points) => {
						stats.leaves += 1;
						stats.points += points.len();
						if points.len() > 1 {
							stats.shared_leaves += 1;
						}
					}
					Slot::Interior(child) => pending.push((&**child, depth + 1)),
				}
			}
		}

		stats
	}

	/// Total child slots across all interior nodes.
	#[inline]
	pub fn total_slots(&self) -> usize {
		self.interior_nodes * crate::OCTANT_COUNT
	}

	/// Fraction of slots holding a point or an interior node.
	#[inline]
	pub fn occupancy(&self) -> f64 {
		if self.interior_nodes == 0 {
			0.0
		} else {
			1.0 - self.empty_slots as f64 / self.total_slots() as f64
		}
	}

	/// Total points handed to `insert`, stored or merged.
	#[inline]
	pub fn inserted(&self) -> usize {
		self.points + self.merged
	}
}
