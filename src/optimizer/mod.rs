pub mod runner;

pub use self::runner::{ProgressCallback, Solver, SolverHandle, SolverOutcome};
use crate::config::{ScoringWeights, SolverParams};
use crate::core_types::{Material, ToolParameters};
use crate::scorer::physics::ideal_diameter;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Balanced,
    Precision,
}

impl Strategy {
    /// degrees
    pub fn target_curvature(&self) -> f32 {
        match self {
            Self::Balanced => 15.0,
            Self::Precision => 5.0,
        }
    }

    pub fn target_material(&self) -> Material {
        match self {
            Self::Balanced => Material::Silicone,
            Self::Precision => Material::Steel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverTarget {
    pub diameter: f32,
    pub curvature: f32,
    pub handle_length: f32,
    pub material: Material,
}

/// A fixed tick-by-tick path from a start state to a strategy target.
///
/// Intermediate ticks move geometry linearly and leave everything else
/// untouched; the final tick lands exactly on the target and swaps the material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverPlan {
    pub strategy: Strategy,
    pub start: ToolParameters,
    pub target: SolverTarget,
    pub ticks: usize,
}

#[inline(always)]
fn lerp(start: f32, end: f32, amt: f32) -> f32 {
    start + (end - start) * amt
}

impl SolverPlan {
    pub fn from_start(
        start: ToolParameters,
        strategy: Strategy,
        weights: &ScoringWeights,
        params: &SolverParams,
    ) -> Self {
        let target = SolverTarget {
            diameter: ideal_diameter(weights, start.hand_size, start.grip),
            curvature: strategy.target_curvature(),
            handle_length: params.solver_length_target,
            material: strategy.target_material(),
        };
        Self {
            strategy,
            start,
            target,
            // A zero budget would never reach the target
            ticks: params.solver_ticks.max(1),
        }
    }

    /// State after `tick` steps. Ticks past the budget return the final state.
    pub fn state_at(&self, tick: usize) -> ToolParameters {
        if tick >= self.ticks {
            return self.final_state();
        }
        let amt = tick as f32 / self.ticks as f32;
        ToolParameters {
            diameter: lerp(self.start.diameter, self.target.diameter, amt),
            curvature: lerp(self.start.curvature, self.target.curvature, amt),
            handle_length: lerp(self.start.handle_length, self.target.handle_length, amt),
            ..self.start
        }
    }

    pub fn final_state(&self) -> ToolParameters {
        ToolParameters {
            diameter: self.target.diameter,
            curvature: self.target.curvature,
            handle_length: self.target.handle_length,
            material: self.target.material,
            ..self.start
        }
    }
}
