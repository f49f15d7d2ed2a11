pub mod engine;
pub mod physics;
pub mod types;

pub use self::types::{ErgonomicMetrics, MetricsDelta, ScoreDetails};
use crate::config::ScoringWeights;
use crate::core_types::ToolParameters;

/// The ergonomic score calculator. Holds only its constants; every call is pure.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Optimized scoring for interactive updates (Fast)
    pub fn score(&self, params: &ToolParameters) -> ErgonomicMetrics {
        engine::score_full(self, params)
    }

    /// Detailed scoring for reports (Rich Data)
    pub fn score_debug(&self, params: &ToolParameters) -> ScoreDetails {
        engine::score_debug(self, params)
    }

    pub fn ideal_diameter(&self, params: &ToolParameters) -> f32 {
        physics::ideal_diameter(&self.weights, params.hand_size, params.grip)
    }
}
