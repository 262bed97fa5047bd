//! Named attachment points on each body. Labels, controls and the camera rig hang off these.

use bevy::prelude::*;

const LABEL_LIFT: f32 = 2.0;
const CONTROL_DEPTH: f32 = -8.0;
const CONTROL_SPREAD: f32 = 4.0;
const CONTROL_DROP: f32 = 2.0;
const EXIT_DROP: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Label,
    Camera,
    Next,
    Prev,
    Exit,
}

impl AnchorKind {
    pub const ALL: [AnchorKind; 5] = [
        AnchorKind::Label,
        AnchorKind::Camera,
        AnchorKind::Next,
        AnchorKind::Prev,
        AnchorKind::Exit,
    ];
}

/// Marker on every anchor entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct Anchor {
    pub body: usize,
    pub kind: AnchorKind,
}

/// The five anchor entities of one body.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyAnchors {
    pub label: Entity,
    pub camera: Entity,
    pub next: Entity,
    pub prev: Entity,
    pub exit: Entity,
}

impl BodyAnchors {
    pub fn get(&self, kind: AnchorKind) -> Entity {
        match kind {
            AnchorKind::Label => self.label,
            AnchorKind::Camera => self.camera,
            AnchorKind::Next => self.next,
            AnchorKind::Prev => self.prev,
            AnchorKind::Exit => self.exit,
        }
    }
}

/// Fixed local offsets of the anchors relative to their body.
#[derive(Clone, Copy, Debug)]
pub struct AnchorLayout {
    pub camera_offset: Vec3,
}

impl AnchorLayout {
    pub fn offset(&self, kind: AnchorKind, fake_radius: f32) -> Vec3 {
        let camera = self.camera_offset + Vec3::Y * fake_radius;
        match kind {
            AnchorKind::Label => Vec3::Y * (fake_radius + LABEL_LIFT),
            AnchorKind::Camera => camera,
            AnchorKind::Next => camera + Vec3::new(CONTROL_SPREAD, -CONTROL_DROP, CONTROL_DEPTH),
            AnchorKind::Prev => camera + Vec3::new(-CONTROL_SPREAD, -CONTROL_DROP, CONTROL_DEPTH),
            AnchorKind::Exit => camera + Vec3::new(0.0, -EXIT_DROP, CONTROL_DEPTH),
        }
    }
}

/// Spawns the anchors as children of `body`. Only the home label starts visible.
pub(crate) fn spawn_anchors(
    commands: &mut Commands,
    body: Entity,
    index: usize,
    fake_radius: f32,
    layout: &AnchorLayout,
    label_visible: bool,
) -> BodyAnchors {
    let mut spawn = |kind: AnchorKind| {
        let visibility = match kind {
            AnchorKind::Label if !label_visible => Visibility::Hidden,
            _ => Visibility::Inherited,
        };
        commands
            .spawn((
                Name::new(format!("{kind:?} anchor")),
                Anchor { body: index, kind },
                Transform::from_translation(layout.offset(kind, fake_radius)),
                visibility,
            ))
            .set_parent(body)
            .id()
    };

    BodyAnchors {
        label: spawn(AnchorKind::Label),
        camera: spawn(AnchorKind::Camera),
        next: spawn(AnchorKind::Next),
        prev: spawn(AnchorKind::Prev),
        exit: spawn(AnchorKind::Exit),
    }
}
