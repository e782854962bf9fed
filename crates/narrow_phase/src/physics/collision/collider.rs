//! Support-point capability shared by every collider
//!
//! GJK never looks at a shape's geometry directly; it only asks for the point
//! furthest along a direction. Anything convex that can answer that query can
//! take part in a narrow-phase test.

use crate::foundation::math::{utils, Vec2, Vec3};

/// A convex shape that can report its furthest point along a direction
///
/// Implementations must be deterministic and side-effect free. The direction
/// is not normalized and may have any positive length.
pub trait Collider {
    /// Point of the shape maximizing `dot(point, direction)`
    fn find_furthest_point(&self, direction: &Vec3) -> Vec3;
}

impl<T: Collider + ?Sized> Collider for &T {
    fn find_furthest_point(&self, direction: &Vec3) -> Vec3 {
        (**self).find_furthest_point(direction)
    }
}

impl<T: Collider + ?Sized> Collider for Box<T> {
    fn find_furthest_point(&self, direction: &Vec3) -> Vec3 {
        (**self).find_furthest_point(direction)
    }
}

/// One point of the Minkowski difference `a ⊖ b` along `direction`
pub fn support<A, B>(a: &A, b: &B, direction: &Vec3) -> Vec3
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    a.find_furthest_point(direction) - b.find_furthest_point(&-direction)
}

/// Planar support point: queries at `z = 0` and drops `z` from the result
pub fn support_2d<A, B>(a: &A, b: &B, direction: &Vec2) -> Vec2
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    let direction = utils::embed(direction);
    let furthest_a = a.find_furthest_point(&direction);
    let furthest_b = b.find_furthest_point(&-direction);
    utils::project(&furthest_a) - utils::project(&furthest_b)
}
