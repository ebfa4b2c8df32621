//! Engine error taxonomy.
//!
//! An infeasible budget is deliberately not an error: it comes back as
//! `Recommendation::feasible = false` so callers can present it as a warning.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed cart or profile. Fails fast, never silently coerced.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rejected policy at load time. Fatal at process start, not per call.
    #[error("configuration error: {0}")]
    Configuration(String),
}
