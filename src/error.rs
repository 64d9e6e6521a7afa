//! Error types for the Xyston library.
//!
//! All errors are represented by the [`XystonError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(XystonError::scorer("Scoring service unavailable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::rerank::config::WeightConfig;

/// The main error type for Xyston operations.
///
/// This enum represents all possible errors that can occur in the Xyston
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum XystonError {
    /// Scoring weights whose components do not sum to exactly 1.
    #[error("Invalid weight configuration: components must sum to 1, got {sum} from {weights:?}")]
    InvalidWeights {
        /// Exact decimal sum of the merged weights.
        sum: Decimal,
        /// The merged weights that failed validation.
        weights: WeightConfig,
    },

    /// Engine configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Relevance scoring errors (collaborator unavailable, malformed response, etc.)
    #[error("Scorer error: {0}")]
    Scorer(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        XystonError::Config(msg.into())
    }

    /// Create a new scorer error.
    pub fn scorer<S: Into<String>>(msg: S) -> Self {
        XystonError::Scorer(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        XystonError::Cancelled(msg.into())
    }
}
