use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;

// === MATERIALS ===

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Steel,
    Polymer,
    Silicone,
}

impl Material {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Steel => "Stainless Steel 316L",
            Self::Polymer => "Medical PEEK",
            Self::Silicone => "Silicone Overmold",
        }
    }

    /// Coefficient of friction against a surgical glove.
    pub fn friction(&self) -> f32 {
        match self {
            Self::Steel => 0.4,
            Self::Polymer => 0.7,
            Self::Silicone => 0.9,
        }
    }

    /// g/cm³
    pub fn density(&self) -> f32 {
        match self {
            Self::Steel => 7.8,
            Self::Polymer => 1.3,
            Self::Silicone => 1.1,
        }
    }
}

// === HAND MODEL ===

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum HandSize {
    #[strum(to_string = "small", serialize = "s")]
    Small,
    #[default]
    #[strum(to_string = "medium", serialize = "m")]
    Medium,
    #[strum(to_string = "large", serialize = "l")]
    Large,
}

impl HandSize {
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum GripType {
    Power,
    Pinch,
}

// === PARAMETERS ===

/// One evaluation input. Values are taken as-is by the scorer; range limits
/// are only enforced where user input enters (see [`ParameterBounds`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ToolParameters {
    /// mm
    #[builder(default = 12.0)]
    pub diameter: f32,
    /// degrees
    #[builder(default = 0.0)]
    pub curvature: f32,
    /// mm
    #[builder(default = 120.0)]
    pub handle_length: f32,
    /// N
    #[builder(default = 45.0)]
    pub grip_force: f32,
    #[builder(default = Material::Steel)]
    pub material: Material,
    #[builder(default)]
    pub hand_size: HandSize,
    #[builder(default, setter(strip_option))]
    pub grip: Option<GripType>,
}

impl Default for ToolParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// NaN has no place on a slider and falls back to `min`.
    #[inline(always)]
    pub fn clamp(&self, v: f32) -> f32 {
        if v.is_nan() {
            self.min
        } else {
            v.clamp(self.min, self.max)
        }
    }
}

/// Slider limits of the interactive controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterBounds {
    pub diameter: Range,
    pub curvature: Range,
    pub handle_length: Range,
    pub grip_force: Range,
}

impl ParameterBounds {
    pub const STANDARD: Self = Self {
        diameter: Range::new(5.0, 45.0),
        curvature: Range::new(0.0, 30.0),
        handle_length: Range::new(80.0, 200.0),
        grip_force: Range::new(10.0, 100.0),
    };

    pub fn clamp(&self, p: ToolParameters) -> ToolParameters {
        ToolParameters {
            diameter: self.diameter.clamp(p.diameter),
            curvature: self.curvature.clamp(p.curvature),
            handle_length: self.handle_length.clamp(p.handle_length),
            grip_force: self.grip_force.clamp(p.grip_force),
            ..p
        }
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}
