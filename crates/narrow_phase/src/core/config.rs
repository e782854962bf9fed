//! # GJK Configuration
//!
//! Tuning for the narrow-phase engines. The defaults suit convex hitboxes
//! measured in world units; loading from TOML or RON comes from [`Config`].

use serde::{Serialize, Deserialize};

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// Default iteration cap for a single GJK query
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// Default squared length ratio below which a search direction counts as zero
pub const DEFAULT_DEGENERACY_EPSILON: f32 = 1e-10;

/// # GJK Engine Configuration
///
/// Convergence is only guaranteed for convex input; the iteration cap turns a
/// runaway query on malformed colliders into an error instead of a hang.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GjkConfig {
    /// Maximum support queries after the seed point
    pub max_iterations: u32,
    /// Squared ratio of a search direction to the size of the feature it came
    /// from, at or below which the direction counts as zero; must lie in `[0, 1)`
    pub degeneracy_epsilon: f32,
}

impl Default for GjkConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            degeneracy_epsilon: DEFAULT_DEGENERACY_EPSILON,
        }
    }
}

impl GjkConfig {
    /// Override the iteration cap
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Override the degeneracy epsilon
    #[must_use]
    pub fn with_degeneracy_epsilon(mut self, epsilon: f32) -> Self {
        self.degeneracy_epsilon = epsilon;
        self
    }

    /// Reject settings the engines cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid("max_iterations must be at least 1".to_string()));
        }
        if !(0.0..1.0).contains(&self.degeneracy_epsilon) {
            return Err(ConfigError::Invalid(format!(
                "degeneracy_epsilon must lie in [0, 1), got {}",
                self.degeneracy_epsilon
            )));
        }
        Ok(())
    }
}

impl Config for GjkConfig {}
