//! Body catalogue: built-in solar system, JSON loading, validation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;

use crate::data::model::{BodyRecord, RingSpec};

#[derive(thiserror::Error, Debug)]
pub enum CatalogueError {
    #[error("can't read catalogue {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("can't parse catalogue {0}: {1}")]
    Parse(PathBuf, serde_json::Error),
    #[error("catalogue has no bodies")]
    Empty,
    #[error("body name {0:?} appears more than once")]
    DuplicateName(String),
    #[error("body {0:?} has a non-positive radius ({1})")]
    InvalidRadius(String, f32),
    #[error("body {0:?} has an invalid orbit period ({1})")]
    InvalidPeriod(String, f32),
}

/// Ordered, validated list of bodies. Index 0 is the home body.
#[derive(Resource, Clone, Debug)]
pub struct Catalogue {
    bodies: Vec<BodyRecord>,
}

impl Catalogue {
    pub fn new(bodies: Vec<BodyRecord>) -> Result<Self, CatalogueError> {
        if bodies.is_empty() {
            return Err(CatalogueError::Empty);
        }
        let mut seen = HashSet::new();
        for body in &bodies {
            if !seen.insert(body.name.as_str()) {
                return Err(CatalogueError::DuplicateName(body.name.clone()));
            }
            if !(body.fake_radius.is_finite() && body.fake_radius > 0.0) {
                return Err(CatalogueError::InvalidRadius(
                    body.name.clone(),
                    body.fake_radius,
                ));
            }
            if let Some(years) = body.orbit_period_years {
                if !(years.is_finite() && years > 0.0) {
                    return Err(CatalogueError::InvalidPeriod(body.name.clone(), years));
                }
            }
        }
        Ok(Self { bodies })
    }

    /// Reads a JSON array of body records.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path)
            .map_err(|err| CatalogueError::Read(path.to_path_buf(), err))?;
        let bodies: Vec<BodyRecord> = serde_json::from_str(&json)
            .map_err(|err| CatalogueError::Parse(path.to_path_buf(), err))?;
        Self::new(bodies)
    }

    pub fn bodies(&self) -> &[BodyRecord] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            bodies: solar_system(),
        }
    }
}

/// The sun and the eight planets, innermost first.
pub fn solar_system() -> Vec<BodyRecord> {
    const BODIES: &[(&str, Option<f32>, f32, f32, [f32; 3])] = &[
        ("Sun", None, 20.0, 0.0, [1.0, 0.85, 0.4]),
        ("Mercury", Some(0.24), 1.0, 40.0, [0.6, 0.58, 0.55]),
        ("Venus", Some(0.62), 2.0, 60.0, [0.9, 0.75, 0.5]),
        ("Earth", Some(1.0), 2.0, 80.0, [0.3, 0.5, 0.9]),
        ("Mars", Some(1.88), 1.5, 100.0, [0.8, 0.4, 0.25]),
        ("Jupiter", Some(11.86), 8.0, 140.0, [0.85, 0.7, 0.55]),
        ("Saturn", Some(29.46), 7.0, 185.0, [0.9, 0.8, 0.6]),
        ("Uranus", Some(84.01), 4.0, 225.0, [0.6, 0.85, 0.9]),
        ("Neptune", Some(164.8), 4.0, 260.0, [0.3, 0.45, 0.95]),
    ];

    BODIES
        .iter()
        .enumerate()
        .map(|(index, &(name, years, radius, distance, color))| BodyRecord {
            name: name.to_string(),
            orbit_period_years: years,
            fake_radius: radius,
            visual_asset: format!("planets/{}.jpg", name.to_lowercase()),
            orbit_radius: distance,
            // Spread the planets out so they don't start in a line.
            initial_angle: index as f32 * 0.9,
            color,
            rings: match name {
                "Saturn" => Some(RingSpec {
                    inner_margin: 1.0,
                    outer_margin: 5.0,
                    opacity: 0.7,
                }),
                "Uranus" => Some(RingSpec {
                    inner_margin: 1.0,
                    outer_margin: 4.0,
                    opacity: 0.5,
                }),
                _ => None,
            },
        })
        .collect()
}
