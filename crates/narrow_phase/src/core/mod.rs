//! # Core Module
//!
//! Shared settings used by the collision engines.
//!
//! ## Organization
//!
//! - **Config**: tuning knobs for the GJK engines

pub mod config;

// Re-export commonly used config types
pub use config::{GjkConfig, Config, ConfigError};
