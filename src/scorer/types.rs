use serde::{Deserialize, Serialize};

/// Derived scores for one parameter set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErgonomicMetrics {
    pub comfort: f32,
    pub precision: f32,
    pub stability: f32,
    /// kPa, unbounded.
    pub pressure: f32,
    pub score: f32,
}

impl ErgonomicMetrics {
    pub fn delta_from(&self, baseline: &ErgonomicMetrics) -> MetricsDelta {
        MetricsDelta {
            comfort: self.comfort - baseline.comfort,
            precision: self.precision - baseline.precision,
            stability: self.stability - baseline.stability,
            pressure: self.pressure - baseline.pressure,
            score: self.score - baseline.score,
        }
    }
}

/// Current minus baseline. Positive is better except for pressure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsDelta {
    pub comfort: f32,
    pub precision: f32,
    pub stability: f32,
    pub pressure: f32,
    pub score: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub metrics: ErgonomicMetrics,

    // Reference Geometry
    pub ideal_diameter: f32,
    pub diameter_deviation: f32,
    pub contact_area: f32,

    // Raw (Unclamped) Indices
    pub raw_comfort: f32,
    pub raw_precision: f32,
    pub raw_stability: f32,

    // Comfort Adjustments
    pub bonus_silicone: f32,
    pub bonus_neutral_curve: f32,

    // Precision Adjustments
    pub bonus_steel: f32,
    pub bonus_pinch: f32,
    pub penalty_long_handle: f32,
    pub penalty_thin_diameter: f32,

    // Stability Adjustments
    pub bonus_power: f32,
    pub bonus_high_curve: f32,
}
