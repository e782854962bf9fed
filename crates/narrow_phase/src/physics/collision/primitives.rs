//! Primitive bounding volumes
//!
//! Entity hitboxes and terrain bounds are usually boxes; spheres cover
//! projectiles and pickups. Both answer support queries directly so they can
//! be passed to GJK without building a point set first.

use crate::foundation::math::Vec3;
use super::collider::Collider;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Creates a box spanning two opposite corners (given in any order)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Creates a box from its center and half extents
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Width, height and depth
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half of [`Aabb::dimensions`]
    pub fn half_extents(&self) -> Vec3 {
        self.dimensions() * 0.5
    }

    /// Interval overlap on all three axes (touching faces count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| self.max[axis] >= other.min[axis] && self.min[axis] <= other.max[axis])
    }

    /// Whether `point` lies inside or on the boundary
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Copy moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Copy grown by `amount` on every side
    #[must_use]
    pub fn inflated(&self, amount: f32) -> Self {
        let grow = Vec3::repeat(amount);
        Self::new(self.min - grow, self.max + grow)
    }

    /// Smallest box containing both boxes
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Smallest box containing this box and `point`
    #[must_use]
    pub fn including(&self, point: &Vec3) -> Self {
        Self {
            min: self.min.inf(point),
            max: self.max.sup(point),
        }
    }

    /// The eight corners; x varies slowest and minimum comes first on each axis
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

impl Collider for Aabb {
    fn find_furthest_point(&self, direction: &Vec3) -> Vec3 {
        // Minimum wins ties, matching the corner order of `corners`
        Vec3::new(
            if direction.x > 0.0 { self.max.x } else { self.min.x },
            if direction.y > 0.0 { self.max.y } else { self.min.y },
            if direction.z > 0.0 { self.max.z } else { self.min.z },
        )
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Tight box around the sphere
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.center, Vec3::repeat(self.radius))
    }
}

impl Collider for BoundingSphere {
    fn find_furthest_point(&self, direction: &Vec3) -> Vec3 {
        let length = direction.magnitude();
        if length <= f32::EPSILON {
            // Every surface point is equally far along a zero direction
            return self.center;
        }
        self.center + direction * (self.radius / length)
    }
}
