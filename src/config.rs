use crate::error::{ErgoError, ErgoResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub solver: SolverParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    #[arg(long, default_value_t = 25)]
    pub solver_ticks: usize,
    #[arg(long, default_value_t = 40)]
    pub solver_tick_ms: u64,
    #[arg(long, default_value_t = 120.0)]
    pub solver_length_target: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            solver_ticks: 25,
            solver_tick_ms: 40,
            solver_length_target: 120.0,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === IDEAL DIAMETER (mm) ===
    #[arg(long, default_value_t = 25.0)]
    pub ideal_diameter_small: f32,
    #[arg(long, default_value_t = 30.0)]
    pub ideal_diameter_medium: f32,
    #[arg(long, default_value_t = 35.0)]
    pub ideal_diameter_large: f32,
    // Pinch grips want a thinner handle
    #[arg(long, default_value_t = 6.0)]
    pub pinch_diameter_offset: f32,

    // === COMFORT ===
    #[arg(long, default_value_t = 100.0)]
    pub comfort_base: f32,
    #[arg(long, default_value_t = 4.0)]
    pub comfort_deviation_slope: f32,
    #[arg(long, default_value_t = 15.0)]
    pub bonus_comfort_silicone: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_comfort_neutral_curve: f32,
    #[arg(long, default_value_t = 5.0)]
    pub neutral_curve_min: f32,
    #[arg(long, default_value_t = 15.0)]
    pub neutral_curve_max: f32,

    // === PRECISION ===
    #[arg(long, default_value_t = 90.0)]
    pub precision_base: f32,
    #[arg(long, default_value_t = 1.5)]
    pub precision_diameter_slope: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_precision_steel: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_precision_pinch: f32,
    #[arg(long, default_value_t = 140.0)]
    pub threshold_long_handle: f32,
    #[arg(long, default_value_t = 15.0)]
    pub penalty_long_handle: f32,
    #[arg(long, default_value_t = 8.0)]
    pub threshold_thin_diameter: f32,
    #[arg(long, default_value_t = 10.0)]
    pub penalty_thin_diameter: f32,

    // === STABILITY ===
    #[arg(long, default_value_t = 2.0)]
    pub stability_diameter_slope: f32,
    #[arg(long, default_value_t = 3.0)]
    pub stability_force_divisor: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_stability_power: f32,
    #[arg(long, default_value_t = 20.0)]
    pub threshold_high_curve: f32,
    #[arg(long, default_value_t = 5.0)]
    pub bonus_stability_high_curve: f32,

    // === PRESSURE ===
    #[arg(long, default_value_t = 900.0)]
    pub pressure_force_scale: f32,
    // Fraction of the handle length in contact with the palm
    #[arg(long, default_value_t = 0.4)]
    pub contact_length_factor: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ideal_diameter_small: 25.0,
            ideal_diameter_medium: 30.0,
            ideal_diameter_large: 35.0,
            pinch_diameter_offset: 6.0,

            comfort_base: 100.0,
            comfort_deviation_slope: 4.0,
            bonus_comfort_silicone: 15.0,
            bonus_comfort_neutral_curve: 10.0,
            neutral_curve_min: 5.0,
            neutral_curve_max: 15.0,

            precision_base: 90.0,
            precision_diameter_slope: 1.5,
            bonus_precision_steel: 10.0,
            bonus_precision_pinch: 10.0,
            threshold_long_handle: 140.0,
            penalty_long_handle: 15.0,
            threshold_thin_diameter: 8.0,
            penalty_thin_diameter: 10.0,

            stability_diameter_slope: 2.0,
            stability_force_divisor: 3.0,
            bonus_stability_power: 10.0,
            threshold_high_curve: 20.0,
            bonus_stability_high_curve: 5.0,

            pressure_force_scale: 900.0,
            contact_length_factor: 0.4,
        }
    }
}

impl ScoringWeights {
    /// Reads a (possibly partial) weights profile. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ErgoResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ErgoError::Config(format!(
                "Failed to read weights file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        info!("Loaded scoring weights from {}", path.display());
        Ok(weights)
    }

    /// Rejects profiles that would make the formulas meaningless.
    pub fn validate(&self) -> ErgoResult<()> {
        if self.stability_force_divisor == 0.0 {
            return Err(ErgoError::Validation(
                "stability_force_divisor must be non-zero".to_string(),
            ));
        }
        if self.neutral_curve_min > self.neutral_curve_max {
            return Err(ErgoError::Validation(format!(
                "neutral curve band is inverted ({} > {})",
                self.neutral_curve_min, self.neutral_curve_max
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($($field:ident),* $(,)?) => {
                $(
                    if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                        self.$field = cli_weights.$field;
                    }
                )*
            };
        }

        update_if_present!(
            ideal_diameter_small,
            ideal_diameter_medium,
            ideal_diameter_large,
            pinch_diameter_offset,
        );

        update_if_present!(
            comfort_base,
            comfort_deviation_slope,
            bonus_comfort_silicone,
            bonus_comfort_neutral_curve,
            neutral_curve_min,
            neutral_curve_max,
        );

        update_if_present!(
            precision_base,
            precision_diameter_slope,
            bonus_precision_steel,
            bonus_precision_pinch,
            threshold_long_handle,
            penalty_long_handle,
            threshold_thin_diameter,
            penalty_thin_diameter,
        );

        update_if_present!(
            stability_diameter_slope,
            stability_force_divisor,
            bonus_stability_power,
            threshold_high_curve,
            bonus_stability_high_curve,
        );

        update_if_present!(pressure_force_scale, contact_length_factor);
    }
}
