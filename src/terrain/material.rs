//! Surface materials covering terrain faces

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Fixed palette of course surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Material {
    Fairway,
    Green,
    Tee,
    #[default]
    Rough,
    Sand,
    Water,
}

impl Material {
    /// Every material, in palette order
    pub const ALL: [Material; 6] = [
        Material::Fairway,
        Material::Green,
        Material::Tee,
        Material::Rough,
        Material::Sand,
        Material::Water,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Material::Fairway => "fairway",
            Material::Green => "green",
            Material::Tee => "tee",
            Material::Rough => "rough",
            Material::Sand => "sand",
            Material::Water => "water",
        }
    }

    /// Parse a material name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
    }

    /// RGBA color used when rendering faces of this material
    pub fn color(&self) -> Vec4 {
        match self {
            Material::Fairway => Vec4::new(0.2, 0.9, 0.25, 1.0),
            Material::Green => Vec4::new(0.3, 1.0, 0.4, 1.0),
            Material::Tee => Vec4::new(0.25, 0.75, 0.3, 1.0),
            Material::Rough => Vec4::new(0.1, 0.25, 0.1, 1.0),
            Material::Sand => Vec4::new(0.8, 0.8, 0.1, 1.0),
            Material::Water => Vec4::new(0.1, 0.1, 0.7, 1.0),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
