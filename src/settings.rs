//! Course and flight settings
//!
//! Loaded from a JSON file. Missing fields take their defaults so a settings
//! file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::FlightTuning;
use crate::terrain::Heightfield;

/// Size of a new course
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Faces along x
    pub width: u16,
    /// Faces along y
    pub height: u16,
    /// Face edge length in yards
    pub xy_resolution: f32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_TERRAIN_WIDTH,
            height: DEFAULT_TERRAIN_HEIGHT,
            xy_resolution: DEFAULT_XY_RESOLUTION,
        }
    }
}

impl TerrainSettings {
    /// Check that the course has at least one face and a positive face size
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "terrain must have at least one face, got {}x{}",
                self.width, self.height
            ));
        }
        if !(self.xy_resolution.is_finite() && self.xy_resolution > 0.0) {
            return Err(format!(
                "xy_resolution must be positive, got {}",
                self.xy_resolution
            ));
        }
        Ok(())
    }
}

/// All tunable settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub terrain: TerrainSettings,
    pub flight: FlightTuning,
}

impl Settings {
    /// Parse and validate settings. Values that would leave the course
    /// unbuildable or a flight unable to land are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.terrain.validate()?;
        self.flight.validate()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing, malformed or out of range
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings in {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// A flat rough course of the configured size
    pub fn build_terrain(&self) -> Heightfield {
        let t = &self.terrain;
        Heightfield::new(t.width, t.height, t.xy_resolution)
    }
}
