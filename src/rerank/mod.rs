//! Second-pass reranking of vector search candidates.
//!
//! This module rescores a candidate list returned by a vector similarity
//! search, blending several signals into one final ordering:
//! - A semantic relevance judgment from a pluggable scorer
//! - The similarity score the candidate carried from the initial search
//! - A positional decay score rewarding candidates ranked earlier
//!
//! Scoring fans out concurrently across candidates and joins before the
//! final sort, so completion order never affects the result.

pub mod config;
pub mod engine;
pub mod scoring;
pub mod types;

pub use config::{DEFAULT_TOP_K, RerankOptions, WeightConfig, WeightOverrides};
pub use engine::{EXTERNAL_RERANK_MODEL_ID, RerankEngine, ScorerKind};
pub use scoring::{ScoreCombiner, analyze_query_embedding, position_score};
pub use types::{Candidate, QueryAnalysis, RerankResult, ScoringDetails};
