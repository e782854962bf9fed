//! Cross-module tests for the GJK engines
//!
//! These exercise whole queries against independent reference answers
//! (interval overlap, sphere distance) rather than individual reduction steps.
