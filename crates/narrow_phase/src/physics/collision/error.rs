//! Collision query errors

/// Failures a narrow-phase query can report instead of a verdict
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// The collider cannot answer support queries (empty or non-finite points)
    #[error("Invalid collider: {reason}")]
    InvalidCollider {
        /// What was wrong with the input
        reason: String,
    },

    /// A support point or search direction stopped being usable
    #[error("Numeric degeneracy at iteration {iteration}: {detail}")]
    NumericDegeneracy {
        /// Iteration the degeneracy was detected on (0 is the seed)
        iteration: u32,
        /// Which quantity degenerated
        detail: String,
    },

    /// The simplex did not converge within the configured cap
    #[error("GJK did not converge within {max_iterations} iterations")]
    IterationLimit {
        /// The cap that was hit
        max_iterations: u32,
    },
}

impl CollisionError {
    /// Build an [`CollisionError::InvalidCollider`]
    pub fn invalid_collider(reason: impl Into<String>) -> Self {
        Self::InvalidCollider { reason: reason.into() }
    }

    /// Build a [`CollisionError::NumericDegeneracy`]
    pub fn degeneracy(iteration: u32, detail: impl Into<String>) -> Self {
        Self::NumericDegeneracy { iteration, detail: detail.into() }
    }
}
