//! Node protocol - slots, interior nodes, insertion and nearest search.
//!
//! The tree is a chain of owned boxes. An interior node always owns exactly
//! eight slots, so the "all children present or all absent" invariant holds
//! by construction. A slot is empty (an empty leaf), a leaf, or another
//! interior node.
//!
//! A leaf holds one point. Only a leaf at the depth limit can hold more:
//! points that could not be separated by splitting share it.
//!
//! There are no parent links. Splitting an occupied leaf needs the parent's
//! center and extents, so the interior node that owns the slot performs the
//! split itself.

use glam::DVec3;
use smallvec::{smallvec, SmallVec};

use super::octant::octant_index;
use super::{DAabb3, OctreeConfig};
use crate::constants::OCTANT_COUNT;
use crate::Location;

/// Outcome of a single insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Insertion {
  /// The point is stored in a leaf owned by the interior node at `depth`.
  ///
  /// At the depth limit the leaf may be shared with points that could not
  /// be separated from it.
  Stored {
    /// Depth of the interior node owning the leaf (root = 0).
    depth: u32,
  },
  /// The point lay within [`OctreeConfig::merge_epsilon`] of a stored point
  /// and was dropped. The point already stored is kept.
  Merged {
    /// Depth of the interior node owning the occupied leaf.
    depth: u32,
  },
}

impl Insertion {
  /// True if the point was stored.
  #[inline]
  pub fn is_stored(&self) -> bool {
    matches!(self, Insertion::Stored { .. })
  }

  /// True if the point was merged into an existing leaf.
  #[inline]
  pub fn is_merged(&self) -> bool {
    matches!(self, Insertion::Merged { .. })
  }

  /// Depth of the interior node owning the affected leaf.
  #[inline]
  pub fn depth(&self) -> u32 {
    match *self {
      Insertion::Stored { depth } | Insertion::Merged { depth } => depth,
    }
  }
}

/// Points held by one leaf, never empty.
pub(crate) type Bucket<P> = SmallVec<[P; 1]>;

/// One of the eight child positions of an interior node.
#[derive(Debug)]
pub(crate) enum Slot<P> {
  /// Empty leaf.
  Empty,
  /// Leaf holding one point (several only at the depth limit).
  Leaf(Bucket<P>),
  /// Interior node.
  Interior(Box<Interior<P>>),
}

/// Interior node: splitting origin, extents and eight owned slots.
#[derive(Debug)]
pub(crate) struct Interior<P> {
  /// `bounds.center` is the octant splitting origin.
  pub bounds: DAabb3,
  pub children: [Slot<P>; OCTANT_COUNT],
}

impl<P> Interior<P> {
  /// Interior node with eight empty slots.
  pub fn new(bounds: DAabb3) -> Self {
    Self {
      bounds,
      children: std::array::from_fn(|_| Slot::Empty),
    }
  }
}

impl<P: Location> Interior<P> {
  /// Insert `point` into the subtree rooted at this node.
  ///
  /// `depth` is this node's depth. Descends one slot per level:
  /// - empty slot: becomes a leaf holding `point`
  /// - interior slot: descend
  /// - occupied leaf: merge when within tolerance, share the leaf at the
  ///   depth limit, otherwise split it into an interior node one level
  ///   deeper and continue into it
  pub fn insert(&mut self, point: P, depth: u32, config: &OctreeConfig) -> Insertion {
    let position = point.position();
    let merge_threshold = config.merge_threshold();
    let depth_limit = config.depth_limit();
    let mut node = self;
    let mut depth = depth;

    loop {
      let bounds = node.bounds;
      let index = octant_index(bounds.center, position);
      let slot = &mut node.children[index as usize];

      if let Slot::Leaf(points) = slot {
        let separation = points
          .iter()
          .map(|stored| stored.quick_distance_to(&point))
          .fold(f64::INFINITY, f64::min);
        if separation <= merge_threshold {
          #[cfg(feature = "tracing")]
          tracing::debug!(depth, separation, "octree: merged point into occupied leaf");
          return Insertion::Merged { depth };
        }
        if depth >= depth_limit {
          points.push(point);
          #[cfg(feature = "tracing")]
          tracing::debug!(depth, shared = points.len(), "octree: leaf shared at depth limit");
          return Insertion::Stored { depth };
        }

        let split = Interior::split(std::mem::take(points), bounds.octant(index));
        *slot = Slot::Interior(split);
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = depth + 1, octant = index, "octree: split occupied leaf");
      }

      // Occupied leaves were split above, so only an empty slot falls through.
      let Slot::Interior(child) = slot else {
        *slot = Slot::Leaf(smallvec![point]);
        return Insertion::Stored { depth };
      };
      node = child.as_mut();
      depth += 1;
    }
  }

  /// Interior node covering `bounds` holding the points of a split leaf.
  fn split(points: Bucket<P>, bounds: DAabb3) -> Box<Self> {
    let mut interior = Interior::new(bounds);
    for point in points {
      let index = octant_index(bounds.center, point.position());
      match &mut interior.children[index as usize] {
        Slot::Leaf(shared) => shared.push(point),
        slot => *slot = Slot::Leaf(smallvec![point]),
      }
    }
    Box::new(interior)
  }

  /// Nearest point by greedy octant descent.
  ///
  /// Resolves a candidate for every occupied slot (a leaf's closest point,
  /// or an interior child's own answer), then keeps the closest. The first
  /// candidate in octant order wins ties. Returns `None` when every slot is
  /// empty.
  pub fn nearest_greedy<Q: Location + ?Sized>(&self, query: &Q) -> Option<(&P, f64)> {
    let mut best = None;

    for slot in &self.children {
      match slot {
        Slot::Empty => {}
        Slot::Leaf(points) => {
          for point in points {
            offer(&mut best, point, point.quick_distance_to(query));
          }
        }
        Slot::Interior(child) => {
          if let Some((point, distance)) = child.nearest_greedy(query) {
            offer(&mut best, point, distance);
          }
        }
      }
    }

    best
  }

  /// Nearest point by branch-and-bound.
  ///
  /// `region` is the space this node is responsible for. It starts
  /// unbounded at the root because points outside the root cuboid are
  /// routed to the outer octants. Children are visited in octant order and
  /// skipped when their region is strictly farther than `best`, so the
  /// answer and its tie-break match [`Interior::nearest_greedy`].
  pub fn nearest_exact<'a, Q: Location + ?Sized>(
    &'a self,
    query: &Q,
    region: Region,
    best: &mut Option<(&'a P, f64)>,
  ) {
    let position = query.position();
    let center = self.bounds.center;

    for (index, slot) in self.children.iter().enumerate() {
      if matches!(slot, Slot::Empty) {
        continue;
      }

      let child_region = region.octant(center, index as u8);
      if let Some((_, best_distance)) = *best {
        if child_region.distance_squared_to(position) > best_distance {
          continue;
        }
      }

      match slot {
        Slot::Empty => {}
        Slot::Leaf(points) => {
          for point in points {
            offer(best, point, point.quick_distance_to(query));
          }
        }
        Slot::Interior(child) => child.nearest_exact(query, child_region, best),
      }
    }
  }
}

/// Replace `best` when `distance` is strictly closer.
///
/// A NaN distance never replaces a number, and a number always replaces a
/// NaN, so a point with NaN coordinates is only returned when nothing
/// comparable is stored.
#[inline]
fn offer<'a, P>(best: &mut Option<(&'a P, f64)>, point: &'a P, distance: f64) {
  let closer = match *best {
    None => true,
    Some((_, best_distance)) => {
      distance < best_distance || (best_distance.is_nan() && !distance.is_nan())
    }
  };
  if closer {
    *best = Some((point, distance));
  }
}

/// Region of space routed to a node, possibly unbounded.
///
/// Unlike the nominal cuboid, regions on the outside of the tree extend to
/// infinity: the outer octants also receive every point lying outside the
/// root bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Region {
  pub min: DVec3,
  pub max: DVec3,
}

impl Region {
  /// All of space.
  pub const EVERYWHERE: Self = Self {
    min: DVec3::NEG_INFINITY,
    max: DVec3::INFINITY,
  };

  /// Part of this region routed to octant `index` of a node centered at
  /// `center`. Set bits take the half above the center, clear bits the half
  /// at or below it.
  pub fn octant(&self, center: DVec3, index: u8) -> Self {
    let mut min = self.min;
    let mut max = self.max;
    for axis in 0..3 {
      if index & (1 << axis) != 0 {
        min[axis] = min[axis].max(center[axis]);
      } else {
        max[axis] = max[axis].min(center[axis]);
      }
    }
    Self { min, max }
  }

  /// Squared distance from `point` to the closest point of the region.
  pub fn distance_squared_to(&self, point: DVec3) -> f64 {
    let mut total = 0.0;
    for axis in 0..3 {
      let v = point[axis];
      let d = if v < self.min[axis] {
        self.min[axis] - v
      } else if v > self.max[axis] {
        v - self.max[axis]
      } else {
        0.0
      };
      total += d * d;
    }
    total
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
