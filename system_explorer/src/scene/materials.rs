//! Shared material helpers for bodies, rings, controls and the star backdrop.

use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::data::{BodyRecord, RingSpec};
use crate::navigation::ControlKind;

pub fn record_color(record: &BodyRecord) -> Color {
    let [r, g, b] = record.color;
    Color::srgb(r, g, b)
}

/// Textured body surface. The home body glows instead of being lit.
pub fn body_material(
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    record: &BodyRecord,
    emissive: bool,
) -> Handle<StandardMaterial> {
    let color = record_color(record);
    let texture = (!record.visual_asset.is_empty())
        .then(|| asset_server.load::<Image>(record.visual_asset.clone()));

    materials.add(StandardMaterial {
        base_color: color,
        base_color_texture: texture,
        emissive: if emissive {
            color.to_linear() * 4.0
        } else {
            LinearRgba::BLACK
        },
        unlit: emissive,
        perceptual_roughness: 0.9,
        ..default()
    })
}

pub fn ring_material(
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
    record: &BodyRecord,
    rings: &RingSpec,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: record_color(record).with_alpha(rings.opacity),
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    })
}

/// Grey for stepping, dark red for leaving.
pub fn control_material(
    materials: &mut Assets<StandardMaterial>,
    kind: ControlKind,
) -> Handle<StandardMaterial> {
    let base_color = match kind {
        ControlKind::Next | ControlKind::Prev => Color::srgb(0.5, 0.5, 0.5),
        ControlKind::Exit => Color::srgb(0.55, 0.0, 0.0),
    };
    materials.add(StandardMaterial {
        base_color,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    })
}

/// Inside-out sphere material for the star field.
pub fn backdrop_material(
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        fog_enabled: false,
        cull_mode: Some(Face::Front),
        ..default()
    })
}
