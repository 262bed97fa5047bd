// Static catalogue records. Loaded once, never mutated.

use serde::{Deserialize, Serialize};

/// A body in the catalogue: motion and visual parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    /// Years per revolution. `None` keeps the body stationary.
    #[serde(default)]
    pub orbit_period_years: Option<f32>,
    pub fake_radius: f32,
    pub visual_asset: String,
    #[serde(default)]
    pub orbit_radius: f32,
    #[serde(default)]
    pub initial_angle: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default)]
    pub rings: Option<RingSpec>,
}

/// Ring band measured outward from the body's `fake_radius`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub inner_margin: f32,
    pub outer_margin: f32,
    pub opacity: f32,
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl BodyRecord {
    /// True when the body has a usable orbit period.
    pub fn orbits(&self) -> bool {
        self.orbit_period_years
            .is_some_and(|years| years.is_finite() && years > 0.0)
    }
}
