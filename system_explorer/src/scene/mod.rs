pub(crate) mod anchors;
pub(crate) mod bodies;
pub(crate) mod graph;
pub(crate) mod materials;
pub(crate) mod orbit;
pub(crate) mod orbit_paths;

use bevy::prelude::*;

use crate::camera::{
    advance_transition, immersive_enabled, sync_viewer_offset, CameraTransition, ImmersiveMode,
    TransitionFinished, ViewerOffset,
};
use crate::config::ExplorerSettings;
use crate::data::Catalogue;
use crate::navigation::{
    complete_navigation, handle_navigation_commands, ExitRequested, NavigationCommand,
    TransitionStarted,
};

pub use anchors::{Anchor, AnchorKind, AnchorLayout, BodyAnchors};
pub use bodies::{setup_star_system, BodyEntry, BodyNode, BodyRegistry, HOME_INDEX};
pub use graph::SceneGraph;
pub use orbit::{angular_velocity, Orbit};
pub use orbit_paths::{orbit_path_plugin, OrbitPathSettings};

/// Per-frame order of the core systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerSet {
    Orbit,
    Transition,
    Completion,
    Commands,
    Sync,
}

/// Orbits, navigation, camera flights and immersive sync. Renders nothing.
///
/// Uses the `Catalogue` and `ExplorerSettings` already inserted, or the built-in
/// defaults.
pub fn star_system_plugin(app: &mut App) {
    app.init_resource::<Catalogue>()
        .init_resource::<ExplorerSettings>()
        .init_resource::<ImmersiveMode>()
        .init_resource::<ViewerOffset>()
        .init_resource::<CameraTransition>()
        .add_event::<NavigationCommand>()
        .add_event::<TransitionStarted>()
        .add_event::<TransitionFinished>()
        .add_event::<ExitRequested>()
        .configure_sets(
            Update,
            (
                ExplorerSet::Orbit,
                ExplorerSet::Transition,
                ExplorerSet::Completion,
                ExplorerSet::Commands,
                ExplorerSet::Sync,
            )
                .chain(),
        )
        .add_systems(Startup, setup_star_system)
        .add_systems(
            Update,
            (
                orbit::advance_orbits.in_set(ExplorerSet::Orbit),
                advance_transition.in_set(ExplorerSet::Transition),
                complete_navigation.in_set(ExplorerSet::Completion),
                handle_navigation_commands.in_set(ExplorerSet::Commands),
                sync_viewer_offset
                    .run_if(immersive_enabled)
                    .in_set(ExplorerSet::Sync),
            ),
        );
}
