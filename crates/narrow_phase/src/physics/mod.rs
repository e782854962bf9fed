//! Physics module for narrow-phase collision detection
//!
//! Broad-phase culling and collision response live with the world layer; this
//! module only answers "do these two convex volumes overlap?".

pub mod collision;
pub mod gjk;

#[cfg(test)]
mod tests;

pub use collision::{
    support,
    support_2d,
    Aabb,
    BoundingSphere,
    Collider,
    CollisionError,
    MeshCollider,
};
pub use gjk::{collides, collides_2d, CollisionChecker};
