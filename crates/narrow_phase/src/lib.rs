//! # Narrow Phase
//!
//! Exact pairwise overlap tests for convex bounding volumes, used by the world
//! physics layer once broad-phase culling has produced candidate pairs.
//!
//! ## Features
//!
//! - **GJK 3D**: Gilbert–Johnson–Keerthi over a tetrahedron simplex
//! - **GJK 2D**: the planar variant over a triangle simplex
//! - **Colliders**: point-set meshes, axis-aligned boxes and spheres
//! - **Configurable**: iteration cap and degeneracy epsilon from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use narrow_phase::prelude::*;
//!
//! fn main() -> Result<(), CollisionError> {
//!     let a = MeshCollider::from_aabb(&Aabb::from_center(Vec3::zeros(), Vec3::repeat(0.5)));
//!     let b = MeshCollider::from_aabb(&Aabb::from_center(Vec3::new(0.5, 0.0, 0.0), Vec3::repeat(0.5)));
//!
//!     assert!(collides(&a, &b)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

// Core modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod physics;

/// Common imports for collision users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec2, Vec3},
        physics::{
            collides, collides_2d, support, support_2d,
            Aabb, BoundingSphere, Collider, CollisionChecker, CollisionError, MeshCollider,
        },
        config::{Config, ConfigError},
        core::config::GjkConfig,
    };
}
