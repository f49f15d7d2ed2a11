use crate::config::ScoringWeights;
use crate::core_types::{GripType, HandSize};
use std::f32::consts::PI;

pub const INDEX_MIN: f32 = 0.0;
pub const INDEX_MAX: f32 = 100.0;

/// Reference handle diameter for a hand class, shifted down for pinch grips.
pub fn ideal_diameter(weights: &ScoringWeights, hand: HandSize, grip: Option<GripType>) -> f32 {
    let base = match hand {
        HandSize::Small => weights.ideal_diameter_small,
        HandSize::Medium => weights.ideal_diameter_medium,
        HandSize::Large => weights.ideal_diameter_large,
    };
    match grip {
        Some(GripType::Pinch) => base - weights.pinch_diameter_offset,
        _ => base,
    }
}

/// Cylindrical palm contact: circumference times the gripped share of the length.
/// A zero area is replaced by 1 so pressure stays finite.
pub fn contact_area(weights: &ScoringWeights, diameter: f32, handle_length: f32) -> f32 {
    let area = diameter * PI * (handle_length * weights.contact_length_factor);
    if area == 0.0 {
        1.0
    } else {
        area
    }
}

/// kPa
pub fn contact_pressure(weights: &ScoringWeights, grip_force: f32, area: f32) -> f32 {
    (grip_force * weights.pressure_force_scale) / area
}

/// NaN collapses to `INDEX_MIN` so every index stays inside the scale.
#[inline(always)]
pub fn clamp_index(v: f32) -> f32 {
    if v.is_nan() {
        INDEX_MIN
    } else {
        v.clamp(INDEX_MIN, INDEX_MAX)
    }
}

pub fn in_band(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_is_substituted() {
        let w = ScoringWeights::default();
        assert_eq!(contact_area(&w, 0.0, 120.0), 1.0);
        assert_eq!(contact_area(&w, 12.0, 0.0), 1.0);
    }

    #[test]
    fn pinch_shrinks_ideal() {
        let w = ScoringWeights::default();
        let power = ideal_diameter(&w, HandSize::Large, Some(GripType::Power));
        let pinch = ideal_diameter(&w, HandSize::Large, Some(GripType::Pinch));
        assert_eq!(power, 35.0);
        assert_eq!(pinch, 29.0);
    }

    #[test]
    fn nan_index_is_floored() {
        assert_eq!(clamp_index(f32::NAN), INDEX_MIN);
        assert_eq!(clamp_index(f32::INFINITY), INDEX_MAX);
        assert_eq!(clamp_index(f32::NEG_INFINITY), INDEX_MIN);
    }
}
