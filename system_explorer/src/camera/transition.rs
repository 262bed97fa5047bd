//! Eased camera rig flight between bodies, tracked as per-frame progress.

use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::config::ExplorerSettings;
use crate::data::BodyRecord;
use crate::navigation::Leg;
use crate::scene::{AnchorKind, BodyRegistry, Orbit, SceneGraph};

/// Quadratic ease-in-ease-out on `[0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Where the rig must end up: the target's camera anchor as it will be once the
/// flight is over, accounting for the body's motion meanwhile.
pub fn transition_destination(orbit: &Orbit, record: &BodyRecord, settings: &ExplorerSettings) -> Vec3 {
    orbit.position_after(settings.transition_seconds)
        + settings.camera_offset
        + Vec3::Y * record.fake_radius
}

/// The in-flight interpolation.
#[derive(Clone, Copy, Debug)]
pub struct ActiveTransition {
    pub leg: Leg,
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    pub elapsed: f32,
}

impl ActiveTransition {
    pub fn new(leg: Leg, from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            leg,
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Fraction of the duration covered so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Adds `secs`; true once the duration is covered.
    pub fn advance(&mut self, secs: f32) -> bool {
        self.elapsed += secs.max(0.0);
        self.progress() >= 1.0
    }

    pub fn position(&self) -> Vec3 {
        self.from.lerp(self.to, ease_in_out_quad(self.progress()))
    }
}

/// At most one flight at a time; the navigation lock guarantees it.
#[derive(Resource, Default, Debug)]
pub struct CameraTransition {
    pub active: Option<ActiveTransition>,
}

/// Sent once the rig has landed on the target's camera anchor.
#[derive(Event, Clone, Copy, Debug)]
pub struct TransitionFinished {
    pub leg: Leg,
}

/// Detaches the rig into world space at its current world position and starts
/// interpolating toward `destination`.
pub(crate) fn begin_transition(
    commands: &mut Commands,
    graph: &mut SceneGraph,
    transition: &mut CameraTransition,
    rig: Entity,
    leg: Leg,
    destination: Vec3,
    duration: f32,
) {
    let from = graph
        .detach_preserving_world(commands, rig)
        .unwrap_or_else(|| panic!("camera rig {rig} is missing from the scene graph"))
        .translation;
    transition.active = Some(ActiveTransition::new(leg, from, destination, duration));
}

pub(crate) fn advance_transition(
    time: Res<Time>,
    mut commands: Commands,
    mut transition: ResMut<CameraTransition>,
    mut rigs: Query<(Entity, &mut Transform), With<CameraRig>>,
    mut finished: EventWriter<TransitionFinished>,
    registry: Res<BodyRegistry>,
) {
    let Some(active) = transition.active.as_mut() else {
        return;
    };
    let Ok((rig, mut transform)) = rigs.get_single_mut() else {
        return;
    };

    // The rig sits at the scene root while flying, so local is world.
    if !active.advance(time.delta_secs()) {
        transform.translation = active.position();
        return;
    }

    let leg = active.leg;
    transition.active = None;
    transform.translation = Vec3::ZERO;
    commands
        .entity(rig)
        .set_parent(registry.anchor(leg.to, AnchorKind::Camera));
    finished.send(TransitionFinished { leg });
}
