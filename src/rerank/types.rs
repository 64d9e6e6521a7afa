//! Types and data structures for reranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One candidate from the initial similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Document identifier.
    pub id: String,
    /// Text payload used for semantic scoring, if any.
    pub text: Option<String>,
    /// Similarity score carried from the initial search.
    pub score: f32,
    /// Additional metadata.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(id: S, score: f32) -> Self {
        Self {
            id: id.into(),
            text: None,
            score,
            metadata: HashMap::new(),
        }
    }

    /// Set the text payload.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Magnitude and dominant-feature summary of a query embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Euclidean norm of the embedding.
    pub magnitude: f32,
    /// Indices of the largest-magnitude components, strongest first.
    pub dominant_features: Vec<usize>,
}

/// Component scores produced for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDetails {
    /// Semantic relevance score, 0 when the candidate had no text.
    pub semantic: f32,
    /// Similarity score carried from the initial search.
    pub vector: f32,
    /// Position decay score.
    pub position: f32,
    /// Query analysis shared across the invocation, if an embedding was
    /// supplied.
    pub query_analysis: Option<QueryAnalysis>,
}

/// A reranked candidate with its final score and component breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankResult {
    /// The original candidate.
    pub candidate: Candidate,
    /// Final combined score.
    pub score: f32,
    /// Component scores behind the final score.
    pub details: ScoringDetails,
}
