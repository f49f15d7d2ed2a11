use crate::core_types::{Material, ToolParameters};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KnownTool {
    /// The suboptimal state every new analysis starts from.
    Default,
    LaparoscopicGrasper,
    /// Thin steel handle kept for regression comparisons.
    EndoGrasperV1,
    ForcepsProX,
}

impl KnownTool {
    pub fn params(&self) -> ToolParameters {
        match self {
            Self::Default => ToolParameters::default(),
            Self::LaparoscopicGrasper => ToolParameters::builder()
                .diameter(10.0)
                .curvature(0.0)
                .handle_length(150.0)
                .grip_force(60.0)
                .material(Material::Steel)
                .build(),
            Self::EndoGrasperV1 => ToolParameters::builder()
                .diameter(14.0)
                .curvature(0.0)
                .handle_length(160.0)
                .grip_force(70.0)
                .material(Material::Steel)
                .build(),
            Self::ForcepsProX => ToolParameters::builder()
                .diameter(30.0)
                .curvature(10.0)
                .handle_length(120.0)
                .grip_force(35.0)
                .material(Material::Silicone)
                .build(),
        }
    }

    pub fn project_name(&self) -> &'static str {
        match self {
            Self::Default => "New Analysis",
            Self::LaparoscopicGrasper => "Laparoscopic_Grasper_v3",
            Self::EndoGrasperV1 => "Endo-Grasper V1",
            Self::ForcepsProX => "Forceps Pro X",
        }
    }
}

pub fn get_all_presets() -> Vec<(KnownTool, ToolParameters)> {
    KnownTool::iter().map(|t| (t, t.params())).collect()
}
