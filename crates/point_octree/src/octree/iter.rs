//! Depth-first traversal over stored points.

use std::iter::FusedIterator;
use std::slice;

use smallvec::SmallVec;

use super::node::{Interior, Slot};

/// Iterator over every point stored in an [`Octree`](super::Octree).
///
/// Visits slots depth-first in octant index order, and the points of a
/// shared leaf in insertion order. The traversal is finite and single-pass; call [`Octree::iter`](super::Octree::iter) again to
/// start over.
pub struct Points<'a, P> {
  stack: SmallVec<[slice::Iter<'a, Slot<P>>; 16]>,
  leaf: slice::Iter<'a, P>,
  remaining: usize,
}

impl<'a, P> Points<'a, P> {
  pub(crate) fn new(root: &'a Interior<P>, len: usize) -> Self {
    let mut stack = SmallVec::new();
    stack.push(root.children.iter());
    Self {
      stack,
      leaf: Default::default(),
      remaining: len,
    }
  }
}

impl<'a, P> Iterator for Points<'a, P> {
  type Item = &'a P;

  fn next(&mut self) -> Option<&'a P> {
    loop {
      if let Some(point) = self.leaf.next() {
        self.remaining = self.remaining.saturating_sub(1);
        return Some(point);
      }

      let slot = match self.stack.last_mut()?.next() {
        Some(slot) => slot,
        None => {
          self.stack.pop();
          continue;
        }
      };

      match slot {
        Slot::Empty => {}
        Slot::Leaf(points) => self.leaf = points.iter(),
        Slot::Interior(child) => self.stack.push(child.children.iter()),
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<P> ExactSizeIterator for Points<'_, P> {}

impl<P> FusedIterator for Points<'_, P> {}
