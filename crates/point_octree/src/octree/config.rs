//! OctreeConfig - depth limit, merge tolerance and nearest-point strategy.

use crate::constants::{DEFAULT_MAX_DEPTH, MAX_USEFUL_DEPTH};

/// Strategy used by nearest-point queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NearestSearch {
  /// Greedy octant descent.
  ///
  /// Each interior node resolves a candidate point per occupied child and
  /// keeps the closest one. Among equally close points the first in
  /// traversal order (lowest octant index at every level) wins. Every
  /// occupied child is resolved, so the answer is exact, but every node is
  /// visited on every query.
  #[default]
  Greedy,
  /// Greedy's answers with pruning.
  ///
  /// Depth-first search in octant order that skips every subtree whose
  /// region is strictly farther away than the best point found so far.
  /// Ties resolve exactly as in [`NearestSearch::Greedy`].
  BranchAndBound,
}

/// Configuration for insertion limits and queries.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
  /// Deepest interior node allowed below the root (root = depth 0).
  ///
  /// A leaf at this depth is never split; further points routed to it are
  /// kept alongside the ones already there. Values above
  /// [`MAX_USEFUL_DEPTH`] act as [`MAX_USEFUL_DEPTH`].
  pub max_depth: u32,

  /// Distance at or under which an incoming point is merged into an occupied
  /// leaf and dropped. `0.0` merges exact duplicates only.
  pub merge_epsilon: f64,

  /// Strategy used by [`Octree::find_nearest`](super::Octree::find_nearest).
  pub search: NearestSearch,
}

impl OctreeConfig {
  /// Greedy search, default depth limit, exact-duplicate merging.
  pub const DEFAULT: Self = Self {
    max_depth: DEFAULT_MAX_DEPTH,
    merge_epsilon: 0.0,
    search: NearestSearch::Greedy,
  };

  /// Same limits as [`OctreeConfig::DEFAULT`] with exact nearest search.
  pub const EXACT: Self = Self {
    search: NearestSearch::BranchAndBound,
    ..Self::DEFAULT
  };

  /// Set the depth limit, clamped to [`MAX_USEFUL_DEPTH`].
  pub fn with_max_depth(mut self, max_depth: u32) -> Self {
    self.max_depth = max_depth.min(MAX_USEFUL_DEPTH);
    self
  }

  /// Set the merge tolerance. Negative or NaN values become `0.0`.
  pub fn with_merge_epsilon(mut self, merge_epsilon: f64) -> Self {
    self.merge_epsilon = if merge_epsilon > 0.0 { merge_epsilon } else { 0.0 };
    self
  }

  /// Set the nearest-point strategy.
  pub fn with_search(mut self, search: NearestSearch) -> Self {
    self.search = search;
    self
  }

  /// Depth limit applied by inserts, whichever way `max_depth` was set.
  #[inline]
  pub(crate) fn depth_limit(&self) -> u32 {
    self.max_depth.min(MAX_USEFUL_DEPTH)
  }

  /// Merge threshold on the quick-distance (squared) scale.
  #[inline]
  pub(crate) fn merge_threshold(&self) -> f64 {
    self.merge_epsilon * self.merge_epsilon
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
