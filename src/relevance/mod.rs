//! Relevance scoring capability for the rerank engine.
//!
//! This module provides the [`RelevanceScorer`] trait and its two concrete
//! implementations:
//! - [`AgentRelevanceScorer`] asks a generative language model to judge
//!   relevance
//! - [`ExternalApiRelevanceScorer`] delegates scoring to a dedicated
//!   external reranking service
//!
//! Both collaborators are consumed through narrow traits
//! ([`LanguageModel`], [`RerankingApi`]); transport and authentication are
//! the implementation's concern.

pub mod agent;
pub mod external;
pub mod model;
pub mod scorer;

pub use agent::AgentRelevanceScorer;
pub use external::{ExternalApiRelevanceScorer, RerankingApi};
pub use model::LanguageModel;
pub use scorer::RelevanceScorer;
