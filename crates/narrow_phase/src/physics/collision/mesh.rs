//! Point-set colliders
//!
//! A [`MeshCollider`] is a convex hull given by its vertices (or any superset
//! of them, such as box corners). Support queries scan every point, which is
//! the right trade for the small hitboxes the world layer hands us.

use crate::foundation::math::{utils, Vec2, Vec3};
use super::collider::Collider;
use super::error::CollisionError;
use super::primitives::Aabb;

/// A collider backed by an explicit, non-empty point set
///
/// The points are a snapshot: a moving shape should be re-snapshotted (or
/// translated) between queries, never mutated during one.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCollider {
    points: Vec<Vec3>,
}

impl MeshCollider {
    /// Creates a collider from 3D points
    ///
    /// Fails with [`CollisionError::InvalidCollider`] when the set is empty or
    /// any coordinate is NaN or infinite.
    pub fn new(points: Vec<Vec3>) -> Result<Self, CollisionError> {
        if points.is_empty() {
            return Err(CollisionError::invalid_collider("mesh collider needs at least one point"));
        }
        if let Some(index) = points.iter().position(|p| !utils::is_finite3(p)) {
            return Err(CollisionError::invalid_collider(format!(
                "point {} has a non-finite coordinate: {:?}",
                index, points[index]
            )));
        }
        Ok(Self { points })
    }

    /// Creates a planar collider (all points at `z = 0`)
    pub fn from_points_2d(points: &[Vec2]) -> Result<Self, CollisionError> {
        Self::new(points.iter().map(utils::embed).collect())
    }

    /// Creates a collider from the eight corners of a box
    ///
    /// Corner order is fixed: x varies slowest, and on every axis the minimum
    /// comes before the maximum. Support ties therefore favour minimum corners.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self { points: aabb.corners().to_vec() }
    }

    /// The stored points in insertion order
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of stored points (never zero)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept alongside [`MeshCollider::len`]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Centroid of the point set
    pub fn center(&self) -> Vec3 {
        // Point count is tiny, the lossy cast is fine
        #[allow(clippy::cast_precision_loss)]
        let count = self.points.len() as f32;
        self.points.iter().sum::<Vec3>() / count
    }

    /// Move every point by `offset`
    pub fn translate(&mut self, offset: &Vec3) {
        for point in &mut self.points {
            *point += offset;
        }
    }

    /// Copy of this collider moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: &Vec3) -> Self {
        let mut moved = self.clone();
        moved.translate(offset);
        moved
    }
}

impl Collider for MeshCollider {
    fn find_furthest_point(&self, direction: &Vec3) -> Vec3 {
        let first = self.points[0];
        let (furthest, _) = self.points[1..].iter().fold(
            (first, first.dot(direction)),
            |(best, best_dot), point| {
                let d = point.dot(direction);
                // Strict comparison keeps the first of equal candidates
                if d > best_dot {
                    (*point, d)
                } else {
                    (best, best_dot)
                }
            },
        );
        furthest
    }
}
