//! Error types for the ranksim library.
//!
//! All errors are represented by the [`RankSimError`] enum.
//!
//! # Examples
//!
//! ```
//! use ranksim::error::{RankSimError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RankSimError::input("expected a sequence"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for ranksim operations.
#[derive(Error, Debug)]
pub enum RankSimError {
    /// Malformed input (not a sequence, missing key field, unusable key value)
    #[error("Input error: {0}")]
    Input(String),

    /// Operation called in the wrong lifecycle state
    #[error("State error: {0}")]
    State(String),

    /// Invalid scorer configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Score did not reach the success threshold
    #[error("Ranking similarity {score:.4} is below the success threshold {threshold:.4}")]
    BelowThreshold { score: f64, threshold: f64 },

    /// I/O errors (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RankSimError.
pub type Result<T> = std::result::Result<T, RankSimError>;

impl RankSimError {
    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        RankSimError::Input(msg.into())
    }

    /// Create a new state error.
    pub fn state<S: Into<String>>(msg: S) -> Self {
        RankSimError::State(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RankSimError::InvalidConfig(msg.into())
    }
}
