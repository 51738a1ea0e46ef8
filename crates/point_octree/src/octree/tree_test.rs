use glam::{DVec3, Vec3};

use super::*;

// =========================================================================
// Batch 1: Construction
// =========================================================================

#[test]
fn test_new_tree_is_empty() {
  let tree: Octree<DVec3> = Octree::new(100.0, 50.0, 20.0, DVec3::new(1.0, 2.0, 3.0));

  assert!(tree.is_empty());
  assert_eq!(tree.len(), 0);
  assert_eq!(tree.bounds().center, DVec3::new(1.0, 2.0, 3.0));
  assert_eq!(tree.bounds().half_extents, DVec3::new(50.0, 25.0, 10.0));
  assert_eq!(*tree.config(), OctreeConfig::default());
  assert_eq!(tree.iter().count(), 0);
}

#[test]
fn test_try_new_rejects_non_positive_extent() {
  let err = Octree::<DVec3>::try_new(DVec3::new(10.0, 0.0, 10.0), DVec3::ZERO)
    .expect_err("zero height must be rejected");
  assert_eq!(
    err,
    OctreeError::InvalidExtent {
      axis: Axis::Y,
      value: 0.0
    }
  );

  let err = Octree::<DVec3>::try_new(DVec3::new(10.0, 10.0, -1.0), DVec3::ZERO)
    .expect_err("negative depth must be rejected");
  assert!(matches!(err, OctreeError::InvalidExtent { axis: Axis::Z, .. }));
}

#[test]
fn test_try_new_rejects_non_finite_geometry() {
  assert!(matches!(
    Octree::<DVec3>::try_new(DVec3::new(f64::INFINITY, 1.0, 1.0), DVec3::ZERO),
    Err(OctreeError::InvalidExtent { axis: Axis::X, .. })
  ));
  assert!(matches!(
    Octree::<DVec3>::try_new(DVec3::new(f64::NAN, 1.0, 1.0), DVec3::ZERO),
    Err(OctreeError::InvalidExtent { axis: Axis::X, .. })
  ));
  assert!(matches!(
    Octree::<DVec3>::try_new(DVec3::ONE, DVec3::new(0.0, f64::NAN, 0.0)),
    Err(OctreeError::NonFiniteOrigin { .. })
  ));
}

#[test]
fn test_error_messages() {
  let err = OctreeError::InvalidExtent {
    axis: Axis::X,
    value: -2.0,
  };
  assert_eq!(
    err.to_string(),
    "invalid x extent -2: extents must be finite and positive"
  );
}

#[test]
#[should_panic(expected = "invalid octree geometry")]
fn test_new_panics_on_invalid_extent() {
  let _tree: Octree<DVec3> = Octree::new(0.0, 1.0, 1.0, DVec3::ZERO);
}

#[test]
fn test_with_config_keeps_config() {
  let tree: Octree<DVec3> = Octree::with_config(DVec3::splat(8.0), DVec3::ZERO, OctreeConfig::EXACT);
  assert_eq!(tree.config().search, NearestSearch::BranchAndBound);
}

// =========================================================================
// Batch 2: Insert Bookkeeping
// =========================================================================

#[test]
fn test_len_counts_stored_points_only() {
  let mut tree = Octree::new(10.0, 10.0, 10.0, DVec3::ZERO);

  assert!(tree.insert(DVec3::splat(1.0)).is_stored());
  assert!(tree.insert(DVec3::splat(1.0)).is_merged());
  assert!(tree.insert(DVec3::splat(2.0)).is_stored());

  assert_eq!(tree.len(), 2);
  let stats = tree.stats();
  assert_eq!(stats.points, 2);
  assert_eq!(stats.merged, 1);
  assert_eq!(stats.inserted(), 3);
}

/// Points outside the root cuboid are accepted.
#[test]
fn test_insert_outside_bounds() {
  let mut tree = Octree::new(10.0, 10.0, 10.0, DVec3::ZERO);

  assert!(tree.insert(DVec3::new(500.0, -500.0, 0.0)).is_stored());
  assert!(!tree.bounds().contains_point(DVec3::new(500.0, -500.0, 0.0)));
  assert_eq!(tree.find_nearest(&DVec3::ZERO), Some(&DVec3::new(500.0, -500.0, 0.0)));
}

#[test]
fn test_extend_inserts_each_point() {
  let mut tree = Octree::new(10.0, 10.0, 10.0, DVec3::ZERO);
  tree.extend([DVec3::splat(1.0), DVec3::splat(-1.0), DVec3::splat(1.0)]);

  assert_eq!(tree.len(), 2);
  assert_eq!(tree.stats().merged, 1);
}

#[test]
fn test_stats_after_split() {
  let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
  tree.insert(DVec3::splat(10.0));
  tree.insert(DVec3::splat(20.0));

  let stats = tree.stats();
  assert_eq!(stats.points, 2);
  assert_eq!(stats.interior_nodes, 3);
  assert_eq!(stats.max_depth, 2);
  assert_eq!(stats.empty_slots, 3 * 8 - 2 - 2);
}

// =========================================================================
// Batch 3: Queries
// =========================================================================

#[test]
fn test_find_nearest_with_both_strategies() {
  let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
  tree.extend([
    DVec3::new(10.0, 10.0, 10.0),
    DVec3::new(-10.0, -10.0, -10.0),
    DVec3::new(10.0, -10.0, 10.0),
  ]);

  let query = DVec3::new(12.0, -8.0, 9.0);
  let expected = Some(&DVec3::new(10.0, -10.0, 10.0));
  assert_eq!(tree.find_nearest_with(&query, NearestSearch::Greedy), expected);
  assert_eq!(tree.find_nearest_with(&query, NearestSearch::BranchAndBound), expected);
}

#[test]
fn test_find_nearest_accepts_other_location_types() {
  let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
  tree.insert(DVec3::new(10.0, 10.0, 10.0));
  tree.insert(DVec3::new(-10.0, -10.0, -10.0));

  assert_eq!(tree.find_nearest(&[-9.0, -9.0, -9.0]), Some(&DVec3::splat(-10.0)));
  assert_eq!(tree.find_nearest(&Vec3::splat(8.0)), Some(&DVec3::splat(10.0)));
  assert_eq!(tree.find_nearest(&(7.0, 7.0, 7.0)), Some(&DVec3::splat(10.0)));
}

#[test]
fn test_find_nearest_many_preserves_order() {
  let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
  tree.extend([DVec3::splat(10.0), DVec3::splat(-10.0), DVec3::new(10.0, -10.0, 10.0)]);

  let queries = [DVec3::splat(9.0), DVec3::splat(-9.0), DVec3::new(9.0, -9.0, 9.0)];
  let results = tree.find_nearest_many(&queries);

  assert_eq!(
    results,
    vec![
      Some(&DVec3::splat(10.0)),
      Some(&DVec3::splat(-10.0)),
      Some(&DVec3::new(10.0, -10.0, 10.0)),
    ]
  );
}

#[test]
fn test_find_nearest_many_on_empty_tree() {
  let tree: Octree<DVec3> = Octree::new(1.0, 1.0, 1.0, DVec3::ZERO);
  assert_eq!(tree.find_nearest_many(&[DVec3::ZERO, DVec3::ONE]), vec![None, None]);
}

// =========================================================================
// Batch 4: Traversal
// =========================================================================

/// Traversal is depth-first in octant index order.
#[test]
fn test_iter_order() {
  let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
  tree.insert(DVec3::splat(40.0));
  tree.insert(DVec3::splat(-10.0));
  tree.insert(DVec3::splat(10.0));
  tree.insert(DVec3::new(10.0, -10.0, 10.0));

  let order: Vec<DVec3> = tree.iter().copied().collect();
  assert_eq!(
    order,
    vec![
      DVec3::splat(-10.0),
      DVec3::new(10.0, -10.0, 10.0),
      DVec3::splat(10.0),
      DVec3::splat(40.0),
    ]
  );
}

#[test]
fn test_iter_is_exact_size_and_fused() {
  let mut tree = Octree::new(100.0, 100.0, 100.0, DVec3::ZERO);
  tree.extend([DVec3::splat(1.0), DVec3::splat(2.0), DVec3::splat(-3.0)]);

  let mut points = tree.iter();
  assert_eq!(points.len(), 3);
  points.next();
  assert_eq!(points.len(), 2);
  assert_eq!(points.by_ref().count(), 2);
  assert_eq!(points.next(), None);
  assert_eq!(points.next(), None);
}

#[test]
fn test_into_iterator_for_reference() {
  let mut tree = Octree::new(10.0, 10.0, 10.0, DVec3::ZERO);
  tree.insert(DVec3::splat(1.0));

  let mut seen = 0;
  for point in &tree {
    assert_eq!(*point, DVec3::splat(1.0));
    seen += 1;
  }
  assert_eq!(seen, 1);
}

#[test]
fn test_debug_summary() {
  let mut tree = Octree::new(10.0, 10.0, 10.0, DVec3::ZERO);
  tree.insert(DVec3::splat(1.0));

  let debug = format!("{:?}", tree);
  assert!(debug.starts_with("Octree"));
  assert!(debug.contains("points: 1"));
}
