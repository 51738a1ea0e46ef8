//! Octree - public facade over the node protocol.

use std::fmt;

use glam::DVec3;
use rayon::prelude::*;

use super::node::{Interior, Region};
use super::{DAabb3, Insertion, NearestSearch, OctreeConfig, OctreeStats, Points};
use crate::error::{Axis, OctreeError, Result};
use crate::Location;

/// Octree over points of type `P`.
///
/// The root is always an interior node centered at the construction origin,
/// so an empty tree is a root with eight empty slots. Each leaf holds one
/// point; a second point landing on an occupied leaf splits it into a new
/// interior node one level deeper. Points that cannot be separated above
/// [`OctreeConfig::max_depth`] share the leaf at the limit.
///
/// Not synchronized. Shared `&Octree` queries may run concurrently (see
/// [`Octree::find_nearest_many`]); inserts need exclusive access.
pub struct Octree<P> {
  pub(super) root: Interior<P>,
  config: OctreeConfig,
  len: usize,
  merged: usize,
}

impl<P: Location> Octree<P> {
  /// Create an empty tree with full extents `x_width` x `y_height` x
  /// `z_depth` centered at `origin`.
  ///
  /// # Panics
  /// Panics if an extent is not finite and positive, or if the origin is
  /// not finite. Use [`Octree::try_new`] to handle this as an error.
  pub fn new(x_width: f64, y_height: f64, z_depth: f64, origin: impl Location) -> Self {
    Self::with_config(
      DVec3::new(x_width, y_height, z_depth),
      origin,
      OctreeConfig::default(),
    )
  }

  /// Create an empty tree with an explicit configuration.
  ///
  /// # Panics
  /// Same preconditions as [`Octree::new`].
  pub fn with_config(extents: DVec3, origin: impl Location, config: OctreeConfig) -> Self {
    match Self::try_with_config(extents, origin, config) {
      Ok(tree) => tree,
      Err(err) => panic!("invalid octree geometry: {err}"),
    }
  }

  /// Create an empty tree, validating the geometry.
  pub fn try_new(extents: DVec3, origin: impl Location) -> Result<Self> {
    Self::try_with_config(extents, origin, OctreeConfig::default())
  }

  /// Create an empty tree with an explicit configuration, validating the
  /// geometry.
  pub fn try_with_config(
    extents: DVec3,
    origin: impl Location,
    config: OctreeConfig,
  ) -> Result<Self> {
    for (axis, value) in [(Axis::X, extents.x), (Axis::Y, extents.y), (Axis::Z, extents.z)] {
      if !value.is_finite() || value <= 0.0 {
        return Err(OctreeError::InvalidExtent { axis, value });
      }
    }

    let origin = origin.position();
    if !origin.is_finite() {
      return Err(OctreeError::NonFiniteOrigin {
        x: origin.x,
        y: origin.y,
        z: origin.z,
      });
    }

    Ok(Self {
      root: Interior::new(DAabb3::from_extents(origin, extents)),
      config,
      len: 0,
      merged: 0,
    })
  }

  /// Insert a point.
  ///
  /// Never fails. Points outside the root bounds are accepted and routed to
  /// the outer octants. Points that could only be separated below
  /// [`OctreeConfig::max_depth`] share a leaf at the limit and stay
  /// retrievable. A point that coincides with a stored one (within
  /// [`OctreeConfig::merge_epsilon`]) is merged: the stored point is kept and
  /// [`Insertion::Merged`] is returned.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::insert"))]
  pub fn insert(&mut self, point: P) -> Insertion {
    let outcome = self.root.insert(point, 0, &self.config);
    match outcome {
      Insertion::Stored { .. } => self.len += 1,
      Insertion::Merged { .. } => self.merged += 1,
    }
    outcome
  }

  /// Stored point closest to `query`, using the configured strategy.
  ///
  /// Returns `None` only when the tree holds no points.
  pub fn find_nearest<Q: Location + ?Sized>(&self, query: &Q) -> Option<&P> {
    self.find_nearest_with(query, self.config.search)
  }

  /// Stored point closest to `query`, using an explicit strategy.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::find_nearest"))]
  pub fn find_nearest_with<Q: Location + ?Sized>(
    &self,
    query: &Q,
    search: NearestSearch,
  ) -> Option<&P> {
    if self.len == 0 {
      return None;
    }

    match search {
      NearestSearch::Greedy => self.root.nearest_greedy(query).map(|(point, _)| point),
      NearestSearch::BranchAndBound => {
        let mut best = None;
        self.root.nearest_exact(query, Region::EVERYWHERE, &mut best);
        best.map(|(point, _)| point)
      }
    }
  }

  /// Answer a batch of nearest-point queries in parallel.
  ///
  /// Results are in query order.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::find_nearest_many"))]
  pub fn find_nearest_many<Q>(&self, queries: &[Q]) -> Vec<Option<&P>>
  where
    P: Sync,
    Q: Location + Sync,
  {
    queries.par_iter().map(|query| self.find_nearest(query)).collect()
  }

  /// All stored points as an owned vector, in traversal order.
  pub fn collect_all(&self) -> Vec<P>
  where
    P: Clone,
  {
    self.iter().cloned().collect()
  }

  /// Structural statistics, computed by walking the tree.
  pub fn stats(&self) -> OctreeStats {
    OctreeStats::collect(&self.root, self.merged)
  }
}

impl<P> Octree<P> {
  /// Iterate over stored points depth-first in octant order.
  pub fn iter(&self) -> Points<'_, P> {
    Points::new(&self.root, self.len)
  }

  /// Number of stored points (merged inserts excluded).
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// True if no point has been stored.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Root cuboid given at construction.
  #[inline]
  pub fn bounds(&self) -> DAabb3 {
    self.root.bounds
  }

  /// Active configuration.
  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }
}

impl<'a, P> IntoIterator for &'a Octree<P> {
  type Item = &'a P;
  type IntoIter = Points<'a, P>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<P: Location> Extend<P> for Octree<P> {
  fn extend<I: IntoIterator<Item = P>>(&mut self, points: I) {
    for point in points {
      self.insert(point);
    }
  }
}

impl<P> fmt::Debug for Octree<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Octree")
      .field("points", &self.len)
      .field("merged", &self.merged)
      .field("bounds", &self.root.bounds)
      .field("config", &self.config)
      .finish()
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
