//! Relevance scorer trait.

use async_trait::async_trait;

use crate::error::Result;

/// Produces a relevance judgment for a candidate text against a query.
///
/// Scoring may suspend on a remote call and may fail with a scorer error.
/// Implementations must be `Send + Sync` to support concurrent scoring
/// across candidates.
#[async_trait]
pub trait RelevanceScorer: Send + Sync {
    /// Score the relevance of `text` to `query`.
    async fn relevance_score(&self, query: &str, text: &str) -> Result<f32>;

    /// Get the name/identifier of this scorer.
    ///
    /// This is useful for logging and debugging purposes.
    fn name(&self) -> &str {
        "unknown"
    }
}
