//! Generative language model collaborator interface.

use async_trait::async_trait;

use crate::error::Result;

/// A generative language model used for agent-based relevance scoring.
///
/// The provider tag and model identifier describe the model; the
/// identifier also drives scorer selection in the engine. How a call is
/// transported or authenticated is up to the implementation.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Provider tag, e.g. "openai".
    fn provider(&self) -> &str;

    /// Full model identifier, e.g. "gpt-4o-mini".
    fn model_id(&self) -> &str;

    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
