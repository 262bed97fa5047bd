//! Renderer trait and the default sphere renderer.

mod spheres;

use bevy::prelude::*;

use crate::data::BodyRecord;
use crate::navigation::{ControlKind, NavControl};
use crate::scene::{BodyNode, BodyRegistry, HOME_INDEX};

pub use spheres::{SpheresRenderer, SpheresSettings};

/// Asset stores a renderer may add to.
pub struct RenderAssets<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub asset_server: &'a AssetServer,
}

/// Attaches visuals to the scene nodes the core spawns. Runs once per node.
pub trait BodyRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}
    fn spawn_backdrop(&self, _commands: &mut Commands, _assets: &mut RenderAssets) {}
    fn spawn_body(
        &self,
        commands: &mut Commands,
        assets: &mut RenderAssets,
        node: Entity,
        record: &BodyRecord,
        is_home: bool,
    );
    fn spawn_control(
        &self,
        commands: &mut Commands,
        assets: &mut RenderAssets,
        widget: Entity,
        kind: ControlKind,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn BodyRenderer>);

impl RendererResource {
    pub fn new(renderer: impl BodyRenderer) -> Self {
        Self(Box::new(renderer))
    }
}

pub fn render_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_backdrop_system)
        .add_systems(Update, (decorate_bodies_system, decorate_controls_system));
}

fn spawn_backdrop_system(
    mut commands: Commands,
    renderer: Res<RendererResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mut assets = RenderAssets {
        meshes: &mut meshes,
        materials: &mut materials,
        asset_server: &asset_server,
    };
    renderer.0.spawn_backdrop(&mut commands, &mut assets);
}

fn decorate_bodies_system(
    mut commands: Commands,
    renderer: Res<RendererResource>,
    registry: Option<Res<BodyRegistry>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    added: Query<(Entity, &BodyNode), Added<BodyNode>>,
) {
    let Some(registry) = registry else {
        return;
    };
    let mut assets = RenderAssets {
        meshes: &mut meshes,
        materials: &mut materials,
        asset_server: &asset_server,
    };
    for (node, body) in &added {
        let record = registry.record(body.index);
        renderer
            .0
            .spawn_body(&mut commands, &mut assets, node, record, body.index == HOME_INDEX);
    }
}

fn decorate_controls_system(
    mut commands: Commands,
    renderer: Res<RendererResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    added: Query<(Entity, &NavControl), Added<NavControl>>,
) {
    let mut assets = RenderAssets {
        meshes: &mut meshes,
        materials: &mut materials,
        asset_server: &asset_server,
    };
    for (widget, control) in &added {
        renderer
            .0
            .spawn_control(&mut commands, &mut assets, widget, control.0);
    }
}
