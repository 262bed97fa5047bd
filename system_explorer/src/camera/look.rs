use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

const SENSITIVITY: f32 = 1.0 / 1000.0;

/// Yaw/pitch look control on the viewer camera. Only orientation: the rig owns position.
#[derive(Component, Debug)]
pub struct MouseLook {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for MouseLook {
    fn default() -> Self {
        // Tilted down toward the body below the camera anchor.
        Self {
            yaw: 0.0,
            pitch: -0.15,
        }
    }
}

impl MouseLook {
    pub fn apply_delta(&mut self, delta: Vec2) {
        self.yaw = f32::rem_euclid(self.yaw - delta.x * SENSITIVITY, TAU);
        self.pitch = f32::clamp(self.pitch - delta.y * SENSITIVITY, -FRAC_PI_2, FRAC_PI_2);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

pub fn mouse_look_plugin(app: &mut App) {
    app.add_systems(Update, mouse_look_system);
}

/// Rotates while the right mouse button is held.
fn mouse_look_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut cameras: Query<(&mut MouseLook, &mut Transform)>,
) {
    let delta: Vec2 = motion.read().map(|event| event.delta).sum();
    if !buttons.pressed(MouseButton::Right) || delta == Vec2::ZERO {
        return;
    }
    for (mut look, mut transform) in &mut cameras {
        look.apply_delta(delta);
        transform.rotation = look.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_clamped_and_yaw_wraps() {
        let mut look = MouseLook::default();

        look.apply_delta(Vec2::new(0.0, -100_000.0));
        assert_eq!(look.pitch, FRAC_PI_2);

        look.apply_delta(Vec2::new(-1000.0 * TAU - 500.0, 0.0));
        assert!((0.0..TAU).contains(&look.yaw));
        assert!((look.yaw - 0.5).abs() < 1e-3);
    }
}
