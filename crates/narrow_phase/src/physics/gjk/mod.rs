//! Gilbert–Johnson–Keerthi overlap tests
//!
//! Two engines share one contract: given two convex colliders, decide whether
//! their Minkowski difference contains the origin.
//!
//! - [`collides`] works on full 3D shapes (tetrahedron simplex)
//! - [`collides_2d`] works on the `(x, y)` projection (triangle simplex)
//!
//! # Boundary conventions
//!
//! Shapes whose surfaces only touch do not collide. The main loop reports a
//! miss as soon as a support point fails to pass the origin (`dot(p, d) <= 0`).
//! Contact can also surface in two other ways, and both end in a surface check
//! along the coordinate axes and the normals of the final simplex:
//!
//! - the search direction collapses while the simplex is a point or a
//!   segment, so the origin lies on that feature
//! - the final simplex encloses the origin on one of its faces or edges
//!
//! The check reports touching when the difference stops at the origin along
//! some candidate direction but extends past it the other way. A difference
//! with no such direction (a single point, or a segment through the origin)
//! overlaps, so two coincident points collide. Contacts whose normal is
//! neither an axis nor a simplex face normal can still read as overlapping.
//!
//! A search direction counts as collapsed when it is shorter than
//! `degeneracy_epsilon` relative to the feature that produced it, so the test
//! behaves the same for millimetre and kilometre shapes. A collapse on a
//! triangle or tetrahedron means the simplex went flat from rounding, which
//! is reported as [`CollisionError::NumericDegeneracy`].

pub(crate) mod simplex;
mod gjk2d;
mod gjk3d;

use nalgebra::SVector;

use crate::config::ConfigError;
use crate::core::config::GjkConfig;
use crate::physics::collision::{Collider, CollisionError};

/// Result of one simplex reduction step
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Evolution<V> {
    /// The simplex encloses the origin
    Contains,
    /// Query the next support point along `direction`
    ///
    /// `scale` is the length `direction` would have if the origin sat
    /// squarely off the feature; the ratio of the two measures collapse.
    Search { direction: V, scale: f32 },
}

/// What the loop should do with a freshly computed direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Heading<V> {
    /// Direction is usable
    Search(V),
    /// The origin lies on the current point or segment
    Touching,
}

/// Vet a search direction before the next support query
pub(crate) fn screen_direction<const D: usize>(
    direction: SVector<f32, D>,
    scale: f32,
    simplex_len: usize,
    iteration: u32,
    config: &GjkConfig,
) -> Result<Heading<SVector<f32, D>>, CollisionError> {
    if !direction.iter().all(|c| c.is_finite()) || !scale.is_finite() {
        log::warn!("GJK: non-finite search direction at iteration {}", iteration);
        return Err(CollisionError::degeneracy(
            iteration,
            format!("search direction {:?} (scale {}) is not finite", direction.as_slice(), scale),
        ));
    }

    if scale > 0.0 && (direction / scale).norm_squared() > config.degeneracy_epsilon {
        return Ok(Heading::Search(direction));
    }

    if simplex_len <= 2 {
        Ok(Heading::Touching)
    } else {
        log::warn!(
            "GJK: search direction collapsed on a {}-point simplex at iteration {}",
            simplex_len,
            iteration
        );
        Err(CollisionError::degeneracy(
            iteration,
            format!("search direction vanished on a flat {simplex_len}-point simplex"),
        ))
    }
}

/// Unit vectors along each coordinate axis
pub(crate) fn axes<const D: usize>() -> impl Iterator<Item = SVector<f32, D>> {
    (0..D).map(|axis| {
        let mut unit = SVector::<f32, D>::zeros();
        unit[axis] = 1.0;
        unit
    })
}

/// Whether the origin sits on the surface of a difference known to contain it
///
/// `support` samples the difference. A candidate `d` (or its negation) shows a
/// surface contact when the difference reaches no further than the origin
/// along it while extending past the origin in the opposite direction.
pub(crate) fn on_surface<const D: usize>(
    support: impl Fn(&SVector<f32, D>) -> SVector<f32, D>,
    candidates: impl IntoIterator<Item = SVector<f32, D>>,
) -> bool {
    let reach = |direction: &SVector<f32, D>| support(direction).dot(direction);

    candidates.into_iter().any(|direction| {
        let forward = reach(&direction);
        let backward = reach(&-direction);
        (forward <= 0.0 && backward > 0.0) || (backward <= 0.0 && forward > 0.0)
    })
}

/// Narrow-phase checker carrying its engine settings
///
/// The checker holds no per-query state; one instance can serve any number of
/// queries, from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionChecker {
    config: GjkConfig,
}

impl CollisionChecker {
    /// Checker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Checker with explicit settings
    ///
    /// Fails with [`ConfigError::Invalid`] when [`GjkConfig::validate`] rejects
    /// the settings.
    pub fn with_config(config: GjkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active settings
    pub fn config(&self) -> &GjkConfig {
        &self.config
    }

    /// Whether the convex hulls of `a` and `b` overlap in 3D
    pub fn collides<A, B>(&self, a: &A, b: &B) -> Result<bool, CollisionError>
    where
        A: Collider + ?Sized,
        B: Collider + ?Sized,
    {
        gjk3d::collides(a, b, &self.config)
    }

    /// Whether the `(x, y)` projections of `a` and `b` overlap
    pub fn collides_2d<A, B>(&self, a: &A, b: &B) -> Result<bool, CollisionError>
    where
        A: Collider + ?Sized,
        B: Collider + ?Sized,
    {
        gjk2d::collides(a, b, &self.config)
    }
}

/// Whether the convex hulls of `a` and `b` overlap in 3D, with default settings
pub fn collides<A, B>(a: &A, b: &B) -> Result<bool, CollisionError>
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    CollisionChecker::new().collides(a, b)
}

/// Whether the `(x, y)` projections of `a` and `b` overlap, with default settings
pub fn collides_2d<A, B>(a: &A, b: &B) -> Result<bool, CollisionError>
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    CollisionChecker::new().collides_2d(a, b)
}
