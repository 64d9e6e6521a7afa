//! Configuration for reranking.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::{Result, XystonError};

/// Default number of results returned after reranking.
pub const DEFAULT_TOP_K: usize = 3;

/// Weights for the three scoring components.
///
/// The components must be non-negative and sum to exactly 1. The sum is
/// checked with decimal arithmetic, so the binary floating-point encoding
/// of values like 0.4 cannot fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Weight for the semantic relevance score.
    pub semantic: f32,
    /// Weight for the similarity score carried from the initial search.
    pub vector: f32,
    /// Weight for the position decay score.
    pub position: f32,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            semantic: 0.4,
            vector: 0.4,
            position: 0.2,
        }
    }
}

impl WeightConfig {
    /// Merge partial overrides over the default weights.
    pub fn merged(overrides: &WeightOverrides) -> Self {
        let defaults = Self::default();
        Self {
            semantic: overrides.semantic.unwrap_or(defaults.semantic),
            vector: overrides.vector.unwrap_or(defaults.vector),
            position: overrides.position.unwrap_or(defaults.position),
        }
    }

    /// Validate that the components are non-negative and sum to exactly 1.
    pub fn validate(&self) -> Result<()> {
        if self.semantic < 0.0 || self.vector < 0.0 || self.position < 0.0 {
            return Err(XystonError::config("weights must be non-negative"));
        }

        let sum =
            to_decimal(self.semantic)? + to_decimal(self.vector)? + to_decimal(self.position)?;
        if sum != Decimal::ONE {
            return Err(XystonError::InvalidWeights {
                sum,
                weights: *self,
            });
        }

        Ok(())
    }
}

// Conversion goes through the shortest decimal representation of the float,
// not its binary expansion.
fn to_decimal(value: f32) -> Result<Decimal> {
    Decimal::from_str(&value.to_string())
        .map_err(|_| XystonError::config(format!("weight {value} is not a finite number")))
}

/// Partial weight overrides.
///
/// Fields left unset keep the corresponding default from
/// [`WeightConfig::default`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeightOverrides {
    /// Override for the semantic weight.
    pub semantic: Option<f32>,
    /// Override for the vector weight.
    pub vector: Option<f32>,
    /// Override for the position weight.
    pub position: Option<f32>,
}

impl WeightOverrides {
    /// Set the semantic weight.
    pub fn with_semantic(mut self, weight: f32) -> Self {
        self.semantic = Some(weight);
        self
    }

    /// Set the vector weight.
    pub fn with_vector(mut self, weight: f32) -> Self {
        self.vector = Some(weight);
        self
    }

    /// Set the position weight.
    pub fn with_position(mut self, weight: f32) -> Self {
        self.position = Some(weight);
        self
    }
}

/// Options for a single rerank invocation.
#[derive(Debug, Clone, Default)]
pub struct RerankOptions {
    /// Partial weight overrides merged over the defaults.
    pub weights: Option<WeightOverrides>,
    /// Query embedding used for magnitude-based score adjustment.
    pub query_embedding: Option<Vec<f32>>,
    /// Number of results to keep, clamped to the candidate count.
    /// Defaults to [`DEFAULT_TOP_K`].
    pub top_k: Option<usize>,
    /// Caller-supplied cancellation signal observed while scoring.
    pub cancellation: Option<CancellationToken>,
}

impl RerankOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set partial weight overrides.
    pub fn with_weights(mut self, weights: WeightOverrides) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the query embedding.
    pub fn with_query_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.query_embedding = Some(embedding);
        self
    }

    /// Set the number of results to keep.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set the cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_config_default() {
        let weights = WeightConfig::default();
        assert_eq!(weights.semantic, 0.4);
        assert_eq!(weights.vector, 0.4);
        assert_eq!(weights.position, 0.2);
    }

    #[test]
    fn test_default_weights_validate() {
        // 0.4 + 0.4 + 0.2 has no exact binary representation, but the
        // decimal sum is exactly 1.
        assert!(WeightConfig::default().validate().is_ok());
    }

    #[test]
    fn test_exact_sum_validates() {
        let weights = WeightConfig {
            semantic: 0.3,
            vector: 0.3,
            position: 0.4,
        };
        assert!(weights.validate().is_ok());

        let weights = WeightConfig {
            semantic: 1.0,
            vector: 0.0,
            position: 0.0,
        };
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_invalid_sum_fails_with_sum() {
        let weights = WeightConfig {
            semantic: 0.5,
            vector: 0.5,
            position: 0.2,
        };

        match weights.validate() {
            Err(XystonError::InvalidWeights { sum, weights }) => {
                assert_eq!(sum.to_string(), "1.2");
                assert_eq!(weights.position, 0.2);
            }
            other => panic!("Expected InvalidWeights, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_weight_fails() {
        let weights = WeightConfig {
            semantic: 1.5,
            vector: -0.5,
            position: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_merged_overrides() {
        let overrides = WeightOverrides::default().with_semantic(0.6).with_vector(0.2);
        let merged = WeightConfig::merged(&overrides);

        assert_eq!(merged.semantic, 0.6);
        assert_eq!(merged.vector, 0.2);
        assert_eq!(merged.position, 0.2); // Default kept
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_merged_empty_overrides_keep_defaults() {
        let merged = WeightConfig::merged(&WeightOverrides::default());
        assert_eq!(merged, WeightConfig::default());
    }

    #[test]
    fn test_rerank_options_builder() {
        let options = RerankOptions::new()
            .with_weights(WeightOverrides::default().with_position(0.1))
            .with_query_embedding(vec![1.0, 2.0])
            .with_top_k(5);

        assert_eq!(options.weights.unwrap().position, Some(0.1));
        assert_eq!(options.query_embedding.unwrap().len(), 2);
        assert_eq!(options.top_k, Some(5));
        assert!(options.cancellation.is_none());
    }
}
