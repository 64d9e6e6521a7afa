//! Scoring primitives used by the rerank engine.

use crate::rerank::config::WeightConfig;
use crate::rerank::types::QueryAnalysis;

/// Number of dominant feature indices reported per query embedding.
const DOMINANT_FEATURE_COUNT: usize = 5;

/// Decay score for a candidate based on its rank in the original list.
///
/// `index` is the zero-based rank and `total` the candidate count, so the
/// score decreases strictly with `index`. Callers must not pass
/// `total == 0`; the engine short-circuits empty input before scoring.
pub fn position_score(index: usize, total: usize) -> f32 {
    1.0 - index as f32 / total as f32
}

/// Analyze a query embedding.
///
/// Computes the Euclidean magnitude over all components and the indices of
/// the strongest components by absolute value, strongest first. Ties keep
/// ascending index order (stable sort).
pub fn analyze_query_embedding(embedding: &[f32]) -> QueryAnalysis {
    let magnitude = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();

    let mut components: Vec<(usize, f32)> = embedding
        .iter()
        .enumerate()
        .map(|(index, value)| (index, value.abs()))
        .collect();
    components.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let dominant_features = components
        .into_iter()
        .take(DOMINANT_FEATURE_COUNT)
        .map(|(index, _)| index)
        .collect();

    QueryAnalysis {
        magnitude,
        dominant_features,
    }
}

/// Combines component scores into a final score using validated weights.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCombiner {
    weights: WeightConfig,
}

impl ScoreCombiner {
    /// Create a combiner over the given weights.
    pub fn new(weights: WeightConfig) -> Self {
        Self { weights }
    }

    /// Blend the component scores, then apply the query-magnitude boosts.
    pub fn combine(
        &self,
        semantic: f32,
        vector: f32,
        position: f32,
        analysis: Option<&QueryAnalysis>,
    ) -> f32 {
        let score = self.weights.semantic * semantic
            + self.weights.vector * vector
            + self.weights.position * position;

        match analysis {
            Some(analysis) => adjust_for_query(score, analysis),
            None => score,
        }
    }
}

/// Scale a combined score by the query-embedding magnitude boosts.
///
/// The boosts compound: a magnitude above 10 also clears the 5 threshold,
/// so both multipliers apply.
fn adjust_for_query(score: f32, analysis: &QueryAnalysis) -> f32 {
    let magnitude_boost = if analysis.magnitude > 10.0 { 1.1 } else { 1.0 };
    let feature_boost = if analysis.magnitude > 5.0 { 1.05 } else { 1.0 };

    score * magnitude_boost * feature_boost
}
