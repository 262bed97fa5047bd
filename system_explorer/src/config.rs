//! Env parsing, timing constants, and explorer settings.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::data::{Catalogue, CatalogueError};

/// Wall-clock seconds for one simulated Earth year.
pub const EARTH_YEAR_SECONDS: f32 = 120.0;
/// Duration of a camera transition between bodies.
pub const TRANSITION_SECONDS: f32 = 5.0;
/// Camera anchor offset from a body's centre, before the radius lift.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 4.0, 24.0);

const CATALOGUE_ENV: &str = "ORRERY_CATALOGUE";
const IMMERSIVE_ENV: &str = "ORRERY_IMMERSIVE";
const EARTH_YEAR_ENV: &str = "ORRERY_EARTH_YEAR_SECONDS";
const TRANSITION_ENV: &str = "ORRERY_TRANSITION_SECONDS";

/// Timing and layout constants shared by the orbit and transition systems.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ExplorerSettings {
    pub earth_year_seconds: f32,
    pub transition_seconds: f32,
    pub camera_offset: Vec3,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            earth_year_seconds: EARTH_YEAR_SECONDS,
            transition_seconds: TRANSITION_SECONDS,
            camera_offset: CAMERA_OFFSET,
        }
    }
}

/// Everything the binary reads from the environment.
#[derive(Clone, Debug, Default)]
pub struct ExplorerConfig {
    pub catalogue_path: Option<PathBuf>,
    pub immersive: bool,
    pub settings: ExplorerSettings,
}

impl ExplorerConfig {
    /// Loads the catalogue file when one is configured, else the built-in system.
    pub fn catalogue(&self) -> Result<Catalogue, CatalogueError> {
        match &self.catalogue_path {
            Some(path) => Catalogue::from_json_file(path),
            None => Ok(Catalogue::default()),
        }
    }
}

/// Reads the explorer configuration from env vars.
/// Unparseable overrides are reported and the defaults kept.
pub fn explorer_config() -> ExplorerConfig {
    let mut settings = ExplorerSettings::default();
    if let Some(seconds) = positive_seconds(EARTH_YEAR_ENV) {
        settings.earth_year_seconds = seconds;
    }
    if let Some(seconds) = positive_seconds(TRANSITION_ENV) {
        settings.transition_seconds = seconds;
    }

    ExplorerConfig {
        catalogue_path: std::env::var_os(CATALOGUE_ENV)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from),
        immersive: std::env::var(IMMERSIVE_ENV)
            .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false),
        settings,
    }
}

fn positive_seconds(env_var: &str) -> Option<f32> {
    let raw = std::env::var(env_var).ok()?;
    match raw.trim().parse::<f32>() {
        Ok(seconds) if seconds.is_finite() && seconds > 0.0 => Some(seconds),
        _ => {
            eprintln!("orrery: ignoring {env_var}={raw:?}, expected a positive number");
            None
        }
    }
}
