//! Math utilities and types
//!
//! Provides the vector types the collision code is written against.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Vector helper functions
pub mod utils {
    use super::{Vec2, Vec3};

    /// Lift a planar vector into 3D at `z = 0`
    pub fn embed(v: &Vec2) -> Vec3 {
        Vec3::new(v.x, v.y, 0.0)
    }

    /// Drop the `z` component of a 3D vector
    pub fn project(v: &Vec3) -> Vec2 {
        Vec2::new(v.x, v.y)
    }

    /// Planar triple product `(a × b) × c`
    ///
    /// The operands are embedded at `z = 0` and the 3D result is projected back
    /// to `(x, y)`. The result lies in the plane, perpendicular to `c`, on the
    /// side selected by the winding of `a` and `b`.
    pub fn triple_product_2d(a: &Vec2, b: &Vec2, c: &Vec2) -> Vec2 {
        project(&embed(a).cross(&embed(b)).cross(&embed(c)))
    }

    /// True when every component is neither NaN nor infinite
    pub fn is_finite3(v: &Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }

    /// True when every component is neither NaN nor infinite
    pub fn is_finite2(v: &Vec2) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triple_product_matches_3d_cross() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 0.5);
        let c = Vec2::new(0.25, -4.0);

        let expected = Vec3::new(a.x, a.y, 0.0)
            .cross(&Vec3::new(b.x, b.y, 0.0))
            .cross(&Vec3::new(c.x, c.y, 0.0));

        assert_relative_eq!(triple_product_2d(&a, &b, &c), Vec2::new(expected.x, expected.y));
    }

    #[test]
    fn test_triple_product_is_perpendicular_to_last_operand() {
        let ab = Vec2::new(2.0, 1.0);
        let ao = Vec2::new(-1.0, 3.0);

        let perp = triple_product_2d(&ab, &ao, &ab);

        assert_relative_eq!(perp.dot(&ab), 0.0);
        // Points to the same side of AB as AO
        assert!(perp.dot(&ao) > 0.0);
    }

    #[test]
    fn test_finite_checks() {
        assert!(is_finite3(&Vec3::new(1.0, -2.0, 3.0)));
        assert!(!is_finite3(&Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(!is_finite2(&Vec2::new(0.0, f32::INFINITY)));
    }
}
