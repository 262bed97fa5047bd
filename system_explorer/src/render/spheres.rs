use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::data::BodyRecord;
use crate::navigation::ControlKind;
use crate::render::{BodyRenderer, RenderAssets};
use crate::scene::materials;

#[derive(Clone, Debug)]
pub struct SpheresSettings {
    pub sectors: u32,
    pub stacks: u32,
    pub ring_texture: String,
    pub backdrop_texture: String,
    pub backdrop_radius: f32,
    pub home_light_intensity: f32,
    pub home_light_range: f32,
    pub control_size: Vec2,
}

impl Default for SpheresSettings {
    fn default() -> Self {
        Self {
            sectors: 48,
            stacks: 24,
            ring_texture: "planets/saturn_rings.jpg".to_string(),
            backdrop_texture: "planets/stars.jpg".to_string(),
            backdrop_radius: 5000.0,
            home_light_intensity: 4.0e9,
            home_light_range: 10_000.0,
            control_size: Vec2::new(4.0, 1.2),
        }
    }
}

/// Textured spheres, rings, a lit home body and flat control quads.
#[derive(Default)]
pub struct SpheresRenderer {
    pub settings: SpheresSettings,
}

impl BodyRenderer for SpheresRenderer {
    fn spawn_backdrop(&self, commands: &mut Commands, assets: &mut RenderAssets) {
        let texture = assets
            .asset_server
            .load::<Image>(self.settings.backdrop_texture.clone());
        commands.spawn((
            Name::new("star field"),
            Mesh3d(assets.meshes.add(
                Sphere::new(self.settings.backdrop_radius)
                    .mesh()
                    .uv(self.settings.sectors, self.settings.stacks),
            )),
            MeshMaterial3d(materials::backdrop_material(assets.materials, texture)),
        ));
    }

    fn spawn_body(
        &self,
        commands: &mut Commands,
        assets: &mut RenderAssets,
        node: Entity,
        record: &BodyRecord,
        is_home: bool,
    ) {
        let settings = &self.settings;
        let mesh = assets.meshes.add(
            Sphere::new(record.fake_radius)
                .mesh()
                .uv(settings.sectors, settings.stacks),
        );
        let material =
            materials::body_material(assets.materials, assets.asset_server, record, is_home);
        commands
            .entity(node)
            .insert((Mesh3d(mesh), MeshMaterial3d(material)));

        if is_home {
            commands.entity(node).with_children(|parent| {
                parent.spawn(PointLight {
                    intensity: settings.home_light_intensity,
                    range: settings.home_light_range,
                    radius: record.fake_radius,
                    ..default()
                });
            });
        }

        if let Some(rings) = &record.rings {
            let texture = assets
                .asset_server
                .load::<Image>(settings.ring_texture.clone());
            let mesh = assets.meshes.add(Annulus::new(
                record.fake_radius + rings.inner_margin,
                record.fake_radius + rings.outer_margin,
            ));
            let material = materials::ring_material(assets.materials, texture, record, rings);
            commands.entity(node).with_children(|parent| {
                parent.spawn((
                    Name::new(format!("{} rings", record.name)),
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                ));
            });
        }
    }

    fn spawn_control(
        &self,
        commands: &mut Commands,
        assets: &mut RenderAssets,
        widget: Entity,
        kind: ControlKind,
    ) {
        let size = self.settings.control_size;
        let mesh = assets.meshes.add(Rectangle::new(size.x, size.y));
        let material = materials::control_material(assets.materials, kind);
        commands
            .entity(widget)
            .insert((Mesh3d(mesh), MeshMaterial3d(material)));
    }
}
