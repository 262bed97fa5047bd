//! Body nodes and the registry that maps catalogue order to scene entities.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::config::ExplorerSettings;
use crate::data::{BodyRecord, Catalogue};
use crate::navigation::{spawn_controls, NavigationState};
use crate::scene::anchors::{spawn_anchors, AnchorKind, AnchorLayout, BodyAnchors};
use crate::scene::orbit::Orbit;

/// The home body: first in the catalogue, where every session starts.
pub const HOME_INDEX: usize = 0;

/// Marker + catalogue index for body entities.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyNode {
    pub index: usize,
}

/// One registered body: its record, scene node and anchors.
pub struct BodyEntry {
    pub record: BodyRecord,
    pub node: Entity,
    pub anchors: BodyAnchors,
}

/// Registry of spawned bodies in catalogue order. Immutable after startup.
#[derive(Resource)]
pub struct BodyRegistry {
    entries: Vec<BodyEntry>,
    by_name: HashMap<String, usize>,
}

impl BodyRegistry {
    pub fn new(entries: Vec<BodyEntry>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.record.name.clone(), index))
            .collect();
        Self { entries, by_name }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BodyEntry> {
        self.entries.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyEntry> {
        self.entries.iter()
    }

    /// Panics on an unknown index; indices only come from this registry.
    pub fn entry(&self, index: usize) -> &BodyEntry {
        self.entries.get(index).unwrap_or_else(|| {
            panic!(
                "no body at index {index}; registry holds {}",
                self.entries.len()
            )
        })
    }

    pub fn record(&self, index: usize) -> &BodyRecord {
        &self.entry(index).record
    }

    pub fn node(&self, index: usize) -> Entity {
        self.entry(index).node
    }

    pub fn anchor(&self, index: usize, kind: AnchorKind) -> Entity {
        self.entry(index).anchors.get(kind)
    }
}

/// Spawns every body with its orbit and anchors, the navigation controls and the
/// camera rig, then publishes the registry and the initial navigation state.
pub fn setup_star_system(
    mut commands: Commands,
    catalogue: Res<Catalogue>,
    settings: Res<ExplorerSettings>,
) {
    let layout = AnchorLayout {
        camera_offset: settings.camera_offset,
    };

    let entries = catalogue
        .bodies()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let orbit = Orbit::from_record(record, settings.earth_year_seconds);
            let node = commands
                .spawn((
                    Name::new(record.name.clone()),
                    BodyNode { index },
                    orbit,
                    Transform::from_translation(orbit.position()),
                    Visibility::default(),
                ))
                .id();
            let anchors = spawn_anchors(
                &mut commands,
                node,
                index,
                record.fake_radius,
                &layout,
                index == HOME_INDEX,
            );
            commands.entity(node).insert(anchors);
            BodyEntry {
                record: record.clone(),
                node,
                anchors,
            }
        })
        .collect();
    let registry = BodyRegistry::new(entries);

    let controls = spawn_controls(&mut commands, &registry, HOME_INDEX);
    commands
        .spawn((
            Name::new("camera rig"),
            CameraRig,
            Transform::default(),
            Visibility::default(),
        ))
        .set_parent(registry.anchor(HOME_INDEX, AnchorKind::Camera));

    info!(
        "star system ready: {} bodies, starting at {}",
        registry.len(),
        registry.record(HOME_INDEX).name
    );
    commands.insert_resource(NavigationState::new(HOME_INDEX, registry.len()));
    commands.insert_resource(controls);
    commands.insert_resource(registry);
}
