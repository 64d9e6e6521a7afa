//! Rerank engine implementation.

use std::sync::Arc;

use futures::future;
use tracing::debug;

use crate::error::{Result, XystonError};
use crate::relevance::{
    AgentRelevanceScorer, ExternalApiRelevanceScorer, LanguageModel, RelevanceScorer, RerankingApi,
};
use crate::rerank::config::{DEFAULT_TOP_K, RerankOptions, WeightConfig};
use crate::rerank::scoring::{ScoreCombiner, analyze_query_embedding, position_score};
use crate::rerank::types::{Candidate, RerankResult, ScoringDetails};

/// Model identifier reserved for the external reranking service.
pub const EXTERNAL_RERANK_MODEL_ID: &str = "rerank-v3.5";

/// Scorer variant resolved from a model identifier.
///
/// This is a closed dispatch: new variants are added by enumerating
/// further reserved identifiers in [`ScorerKind::for_model_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    /// Agent-based scoring through a generative model.
    Agent,
    /// Scoring delegated to the dedicated external reranking service.
    ExternalApi,
}

impl ScorerKind {
    /// Resolve the scorer variant for a model identifier.
    pub fn for_model_id(model_id: &str) -> Self {
        match model_id {
            EXTERNAL_RERANK_MODEL_ID => ScorerKind::ExternalApi,
            _ => ScorerKind::Agent,
        }
    }
}

/// Engine that reranks vector search candidates.
///
/// Each invocation is self-contained: weights are validated, the query
/// embedding is analyzed once, every candidate is scored concurrently, and
/// the combined results are sorted and truncated to the requested top-K.
/// A single scoring failure aborts the whole invocation.
#[derive(Default)]
pub struct RerankEngine {
    /// Client used when the external reranking service is selected.
    reranking_api: Option<Arc<dyn RerankingApi>>,
}

impl RerankEngine {
    /// Create an engine without an external reranking service client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the client used when the external reranking service is
    /// selected.
    pub fn with_reranking_api(mut self, api: Arc<dyn RerankingApi>) -> Self {
        self.reranking_api = Some(api);
        self
    }

    /// Rerank candidates, selecting the scorer from the model identifier.
    ///
    /// The reserved identifier [`EXTERNAL_RERANK_MODEL_ID`] selects the
    /// external reranking service; any other identifier selects agent-based
    /// scoring with the model itself.
    pub async fn rerank(
        &self,
        candidates: Vec<Candidate>,
        query: &str,
        model: Arc<dyn LanguageModel>,
        options: RerankOptions,
    ) -> Result<Vec<RerankResult>> {
        let scorer = self.select_scorer(model)?;
        self.rerank_with_scorer(candidates, query, scorer, options)
            .await
    }

    /// Rerank candidates with an explicitly chosen scorer.
    pub async fn rerank_with_scorer(
        &self,
        candidates: Vec<Candidate>,
        query: &str,
        scorer: Arc<dyn RelevanceScorer>,
        options: RerankOptions,
    ) -> Result<Vec<RerankResult>> {
        let weights = match &options.weights {
            Some(overrides) => WeightConfig::merged(overrides),
            None => WeightConfig::default(),
        };
        weights.validate()?;

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let top_k = options.top_k.unwrap_or(DEFAULT_TOP_K);
        let total = candidates.len();
        let analysis = options
            .query_embedding
            .as_deref()
            .map(analyze_query_embedding);
        let combiner = ScoreCombiner::new(weights);

        debug!(
            candidates = total,
            top_k,
            scorer = scorer.name(),
            "reranking candidates"
        );

        // One concurrent scoring task per candidate. The query analysis is
        // computed once above and shared read-only.
        let tasks: Vec<_> = candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                let scorer = Arc::clone(&scorer);
                let analysis = analysis.clone();
                async move {
                    let semantic = match candidate.text.as_deref() {
                        Some(text) => scorer.relevance_score(query, text).await?,
                        None => 0.0,
                    };

                    let vector = candidate.score;
                    let position = position_score(index, total);
                    let score = combiner.combine(semantic, vector, position, analysis.as_ref());

                    Ok::<RerankResult, XystonError>(RerankResult {
                        candidate,
                        score,
                        details: ScoringDetails {
                            semantic,
                            vector,
                            position,
                            query_analysis: analysis,
                        },
                    })
                }
            })
            .collect();

        // All-complete barrier; completion order never affects the output.
        let joined = future::join_all(tasks);
        let task_results = match &options.cancellation {
            Some(token) => tokio::select! {
                _ = token.cancelled() => {
                    return Err(XystonError::cancelled("rerank aborted while scoring"));
                }
                results = joined => results,
            },
            None => joined.await,
        };

        let mut results = Vec::with_capacity(total);
        for task_result in task_results {
            results.push(task_result?);
        }

        // Stable sort keeps the original order for equal scores.
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    /// Resolve and instantiate the scorer for the given model.
    fn select_scorer(&self, model: Arc<dyn LanguageModel>) -> Result<Arc<dyn RelevanceScorer>> {
        match ScorerKind::for_model_id(model.model_id()) {
            ScorerKind::ExternalApi => {
                let api = self.reranking_api.clone().ok_or_else(|| {
                    XystonError::config(format!(
                        "model {} requires an external reranking client, but none is configured",
                        model.model_id()
                    ))
                })?;
                Ok(Arc::new(ExternalApiRelevanceScorer::new(
                    model.model_id(),
                    api,
                )))
            }
            ScorerKind::Agent => {
                let provider = model.provider().to_string();
                Ok(Arc::new(AgentRelevanceScorer::new(provider, model)))
            }
        }
    }
}
