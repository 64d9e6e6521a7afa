//! Agent-based relevance scoring backed by a generative model.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, XystonError};
use crate::relevance::model::LanguageModel;
use crate::relevance::scorer::RelevanceScorer;

/// Relevance scorer that asks a generative model to judge relevance.
///
/// The model is prompted to rate the candidate text against the query and
/// reply with a bare number; a reply that does not parse as a number is a
/// scorer error.
pub struct AgentRelevanceScorer {
    provider: String,
    model: Arc<dyn LanguageModel>,
}

impl AgentRelevanceScorer {
    /// Create a scorer for the given provider tag and model.
    pub fn new<S: Into<String>>(provider: S, model: Arc<dyn LanguageModel>) -> Self {
        Self {
            provider: provider.into(),
            model,
        }
    }

    /// Provider tag this scorer was created with.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    fn relevance_prompt(query: &str, text: &str) -> String {
        format!(
            "Rate the relevance of the following text to the query on a scale \
             from 0.0 to 1.0. Respond with the number only.\n\n\
             Query: {query}\n\nText: {text}\n\nRelevance score:"
        )
    }
}

#[async_trait]
impl RelevanceScorer for AgentRelevanceScorer {
    async fn relevance_score(&self, query: &str, text: &str) -> Result<f32> {
        let prompt = Self::relevance_prompt(query, text);
        let response = self.model.generate(&prompt).await?;

        let score = response.trim().parse::<f32>().map_err(|_| {
            XystonError::scorer(format!(
                "model {} returned a non-numeric relevance judgment: {response:?}",
                self.model.model_id()
            ))
        })?;

        debug!(
            provider = self.provider.as_str(),
            model = self.model.model_id(),
            score,
            "agent relevance score"
        );

        Ok(score)
    }

    fn name(&self) -> &str {
        "agent"
    }
}
