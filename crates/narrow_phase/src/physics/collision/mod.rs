//! Collider shapes for narrow-phase testing
//!
//! # Module Organization
//!
//! - [`collider`] - The support-point capability and Minkowski support functions
//! - [`mesh`] - Point-set colliders built from hull vertices or box corners
//! - [`primitives`] - Boxes and spheres that answer support queries analytically
//! - [`error`] - Errors shared by collider construction and GJK queries

pub mod collider;
pub mod error;
pub mod mesh;
pub mod primitives;

// Re-export commonly used types
pub use collider::{support, support_2d, Collider};
pub use error::CollisionError;
pub use mesh::MeshCollider;
pub use primitives::{Aabb, BoundingSphere};
