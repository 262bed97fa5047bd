//! Orbit paths: gizmo circles along each body's orbit. Toggled with `O`.

use bevy::prelude::*;

use crate::scene::{BodyRegistry, Orbit};

const PATH_SEGMENTS: u32 = 128;

#[derive(Resource)]
pub struct OrbitPathSettings {
    pub enabled: bool,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

pub fn orbit_path_plugin(app: &mut App) {
    app.init_resource::<OrbitPathSettings>()
        .add_systems(Update, (toggle_orbit_paths_system, draw_orbit_paths_system));
}

fn toggle_orbit_paths_system(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<OrbitPathSettings>) {
    if keys.just_pressed(KeyCode::KeyO) {
        settings.enabled = !settings.enabled;
    }
}

fn draw_orbit_paths_system(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    registry: Option<Res<BodyRegistry>>,
    orbits: Query<&Orbit>,
) {
    let (true, Some(registry)) = (settings.enabled, registry) else {
        return;
    };

    for entry in registry.iter() {
        let Ok(orbit) = orbits.get(entry.node) else {
            continue;
        };
        if orbit.radius <= 0.0 {
            continue;
        }
        let [r, g, b] = entry.record.color;
        gizmos
            .circle(
                Isometry3d::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                orbit.radius,
                Color::srgba(r, g, b, 0.25),
            )
            .resolution(PATH_SEGMENTS);
    }
}
