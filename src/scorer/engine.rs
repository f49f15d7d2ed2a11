use super::physics::{clamp_index, contact_area, contact_pressure, ideal_diameter, in_band};
use super::types::{ErgonomicMetrics, ScoreDetails};
use super::Scorer;
use crate::core_types::{GripType, Material, ToolParameters};
use tracing::debug;

#[inline(always)]
fn bonus(cond: bool, value: f32) -> f32 {
    if cond {
        value
    } else {
        0.0
    }
}

#[inline(always)]
fn finish(comfort: f32, precision: f32, stability: f32, pressure: f32) -> ErgonomicMetrics {
    let comfort = clamp_index(comfort);
    let precision = clamp_index(precision);
    let stability = clamp_index(stability);
    let score = clamp_index((comfort + precision + stability) / 3.0);
    ErgonomicMetrics {
        comfort,
        precision,
        stability,
        pressure,
        score,
    }
}

/// Hot path used on every input event.
pub fn score_full(scorer: &Scorer, p: &ToolParameters) -> ErgonomicMetrics {
    let w = &scorer.weights;
    let ideal = ideal_diameter(w, p.hand_size, p.grip);
    let deviation = (p.diameter - ideal).abs();

    let mut comfort = w.comfort_base - deviation * w.comfort_deviation_slope;
    comfort += bonus(p.material == Material::Silicone, w.bonus_comfort_silicone);
    comfort += bonus(
        in_band(p.curvature, w.neutral_curve_min, w.neutral_curve_max),
        w.bonus_comfort_neutral_curve,
    );

    let mut precision = w.precision_base - p.diameter * w.precision_diameter_slope;
    precision += bonus(p.material == Material::Steel, w.bonus_precision_steel);
    precision += bonus(p.grip == Some(GripType::Pinch), w.bonus_precision_pinch);
    precision -= bonus(p.handle_length > w.threshold_long_handle, w.penalty_long_handle);
    precision -= bonus(p.diameter < w.threshold_thin_diameter, w.penalty_thin_diameter);

    let mut stability =
        p.diameter * w.stability_diameter_slope + p.grip_force / w.stability_force_divisor;
    stability += bonus(p.grip == Some(GripType::Power), w.bonus_stability_power);
    stability += bonus(p.curvature > w.threshold_high_curve, w.bonus_stability_high_curve);

    let area = contact_area(w, p.diameter, p.handle_length);
    let pressure = contact_pressure(w, p.grip_force, area);

    finish(comfort, precision, stability, pressure)
}

/// Same formulas as [`score_full`], keeping every intermediate term.
pub fn score_debug(scorer: &Scorer, p: &ToolParameters) -> ScoreDetails {
    let w = &scorer.weights;
    let mut d = ScoreDetails {
        ideal_diameter: ideal_diameter(w, p.hand_size, p.grip),
        ..Default::default()
    };
    d.diameter_deviation = (p.diameter - d.ideal_diameter).abs();

    // Comfort
    d.bonus_silicone = bonus(p.material == Material::Silicone, w.bonus_comfort_silicone);
    d.bonus_neutral_curve = bonus(
        in_band(p.curvature, w.neutral_curve_min, w.neutral_curve_max),
        w.bonus_comfort_neutral_curve,
    );
    d.raw_comfort = w.comfort_base - d.diameter_deviation * w.comfort_deviation_slope
        + d.bonus_silicone
        + d.bonus_neutral_curve;

    // Precision
    d.bonus_steel = bonus(p.material == Material::Steel, w.bonus_precision_steel);
    d.bonus_pinch = bonus(p.grip == Some(GripType::Pinch), w.bonus_precision_pinch);
    d.penalty_long_handle = bonus(p.handle_length > w.threshold_long_handle, w.penalty_long_handle);
    d.penalty_thin_diameter =
        bonus(p.diameter < w.threshold_thin_diameter, w.penalty_thin_diameter);
    d.raw_precision = w.precision_base - p.diameter * w.precision_diameter_slope
        + d.bonus_steel
        + d.bonus_pinch
        - d.penalty_long_handle
        - d.penalty_thin_diameter;

    // Stability
    d.bonus_power = bonus(p.grip == Some(GripType::Power), w.bonus_stability_power);
    d.bonus_high_curve = bonus(p.curvature > w.threshold_high_curve, w.bonus_stability_high_curve);
    d.raw_stability = p.diameter * w.stability_diameter_slope
        + p.grip_force / w.stability_force_divisor
        + d.bonus_power
        + d.bonus_high_curve;

    // Pressure
    d.contact_area = contact_area(w, p.diameter, p.handle_length);
    let pressure = contact_pressure(w, p.grip_force, d.contact_area);

    d.metrics = finish(d.raw_comfort, d.raw_precision, d.raw_stability, pressure);

    debug!(
        ideal = d.ideal_diameter,
        deviation = d.diameter_deviation,
        raw_comfort = d.raw_comfort,
        raw_precision = d.raw_precision,
        raw_stability = d.raw_stability,
        area = d.contact_area,
        "score breakdown"
    );

    d
}
