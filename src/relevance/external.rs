//! Relevance scoring delegated to a dedicated external reranking service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::relevance::scorer::RelevanceScorer;

/// External reranking service collaborator interface.
///
/// Given a model identifier, a query, and a document, the service returns
/// a relevance score. How a call is transported or authenticated is up to
/// the implementation.
#[async_trait]
pub trait RerankingApi: Send + Sync {
    /// Score the relevance of `document` to `query` with the given model.
    async fn relevance_score(&self, model_id: &str, query: &str, document: &str) -> Result<f32>;
}

/// Relevance scorer that delegates to a dedicated reranking service.
pub struct ExternalApiRelevanceScorer {
    model_id: String,
    api: Arc<dyn RerankingApi>,
}

impl ExternalApiRelevanceScorer {
    /// Create a scorer for the given reranking model.
    pub fn new<S: Into<String>>(model_id: S, api: Arc<dyn RerankingApi>) -> Self {
        Self {
            model_id: model_id.into(),
            api,
        }
    }

    /// Model identifier sent to the service.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl RelevanceScorer for ExternalApiRelevanceScorer {
    async fn relevance_score(&self, query: &str, text: &str) -> Result<f32> {
        self.api.relevance_score(&self.model_id, query, text).await
    }

    fn name(&self) -> &str {
        "external-api"
    }
}
