pub mod audit;
pub mod evaluate;
pub mod render;
pub mod report;
pub mod solve;
pub mod sweep;

use clap::Args;
use ergosurg::core_types::{GripType, HandSize, Material, ToolParameters};
use ergosurg::presets::KnownTool;

/// Slider values must be real numbers; "NaN" and "inf" parse as f32 but are rejected.
fn parse_finite(raw: &str) -> Result<f32, String> {
    let v: f32 = raw.parse().map_err(|e| format!("{}", e))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("'{}' is not a finite number", raw))
    }
}

/// Tool description shared by every command. Explicit flags override the preset.
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    #[arg(short = 'p', long, default_value = "default")]
    pub preset: KnownTool,
    #[arg(short = 'd', long, value_parser = parse_finite)]
    pub diameter: Option<f32>,
    #[arg(long, value_parser = parse_finite)]
    pub curvature: Option<f32>,
    #[arg(short = 'l', long, value_parser = parse_finite)]
    pub length: Option<f32>,
    #[arg(short = 'f', long, value_parser = parse_finite)]
    pub force: Option<f32>,
    #[arg(short = 'm', long)]
    pub material: Option<Material>,
    #[arg(long)]
    pub hand: Option<HandSize>,
    #[arg(short = 'g', long)]
    pub grip: Option<GripType>,
}

impl ToolArgs {
    pub fn resolve(&self) -> ToolParameters {
        let base = self.preset.params();
        ToolParameters {
            diameter: self.diameter.unwrap_or(base.diameter),
            curvature: self.curvature.unwrap_or(base.curvature),
            handle_length: self.length.unwrap_or(base.handle_length),
            grip_force: self.force.unwrap_or(base.grip_force),
            material: self.material.unwrap_or(base.material),
            hand_size: self.hand.unwrap_or(base.hand_size),
            grip: self.grip.or(base.grip),
        }
    }
}
