//! Navigation commands, the lock that serialises them, and arrival handling.

mod controls;
mod state;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::camera::{
    begin_transition, transition_destination, CameraRig, CameraTransition, TransitionFinished,
};
use crate::config::ExplorerSettings;
use crate::data::BodyRecord;
use crate::scene::{BodyRegistry, Orbit, SceneGraph};

pub use controls::{ControlKind, NavControl, UiControls};
pub use state::{Leg, NavigationState, Phase};

pub(crate) use controls::{apply_arrival, spawn_controls};

/// A request to move between bodies or leave the scene.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub enum NavigationCommand {
    Next,
    Previous,
    Select(String),
    Exit,
}

/// Sent when a transition is accepted and the camera rig starts moving.
#[derive(Event, Clone, Copy, Debug)]
pub struct TransitionStarted {
    pub leg: Leg,
}

/// Sent when the user leaves the scene from an idle state.
#[derive(Event, Clone, Debug)]
pub struct ExitRequested {
    pub from: String,
}

/// Command and query surface for collaborators (input, UI, hosts).
#[derive(SystemParam)]
pub struct Navigator<'w> {
    commands: EventWriter<'w, NavigationCommand>,
    state: Res<'w, NavigationState>,
    registry: Res<'w, BodyRegistry>,
}

impl Navigator<'_> {
    pub fn dispatch(&mut self, command: NavigationCommand) {
        self.commands.send(command);
    }

    pub fn go_next(&mut self) {
        self.commands.send(NavigationCommand::Next);
    }

    pub fn go_previous(&mut self) {
        self.commands.send(NavigationCommand::Previous);
    }

    pub fn select_body(&mut self, name: impl Into<String>) {
        self.commands.send(NavigationCommand::Select(name.into()));
    }

    pub fn exit(&mut self) {
        self.commands.send(NavigationCommand::Exit);
    }

    pub fn active_body(&self) -> &BodyRecord {
        self.registry.record(self.state.active())
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_navigation_commands(
    mut commands: Commands,
    mut requests: EventReader<NavigationCommand>,
    mut state: ResMut<NavigationState>,
    mut transition: ResMut<CameraTransition>,
    mut graph: SceneGraph,
    mut started: EventWriter<TransitionStarted>,
    mut exits: EventWriter<ExitRequested>,
    registry: Res<BodyRegistry>,
    settings: Res<ExplorerSettings>,
    orbits: Query<&Orbit>,
    rigs: Query<Entity, With<CameraRig>>,
) {
    let Ok(rig) = rigs.get_single() else {
        return;
    };

    for command in requests.read() {
        if state.is_locked() {
            debug!("ignoring {command:?}: transition in progress");
            continue;
        }

        let leg = match command {
            NavigationCommand::Next => state.select_offset(1),
            NavigationCommand::Previous => state.select_offset(-1),
            NavigationCommand::Select(name) => match registry.index_of(name) {
                Some(index) => state.select_index(index),
                None => {
                    warn!("ignoring selection of unknown body {name:?}");
                    continue;
                }
            },
            NavigationCommand::Exit => {
                let from = registry.record(state.active()).name.clone();
                info!("leaving the star system from {from}");
                exits.send(ExitRequested { from });
                continue;
            }
        };
        let Some(leg) = leg else {
            debug!("ignoring {command:?}: no body in that direction");
            continue;
        };

        let orbit = orbits
            .get(registry.node(leg.to))
            .unwrap_or_else(|_| panic!("body {} has no orbit", registry.record(leg.to).name));
        let destination = transition_destination(orbit, registry.record(leg.to), &settings);
        begin_transition(
            &mut commands,
            &mut graph,
            &mut transition,
            rig,
            leg,
            destination,
            settings.transition_seconds,
        );
        info!(
            "travelling from {} to {}",
            registry.record(leg.from).name,
            registry.record(leg.to).name
        );
        started.send(TransitionStarted { leg });
    }
}

pub(crate) fn complete_navigation(
    mut commands: Commands,
    mut finished: EventReader<TransitionFinished>,
    mut state: ResMut<NavigationState>,
    mut visibility: Query<&mut Visibility>,
    registry: Res<BodyRegistry>,
    controls: Res<UiControls>,
) {
    for event in finished.read() {
        apply_arrival(
            &mut commands,
            &registry,
            &controls,
            &mut visibility,
            event.leg,
        );
        if let Some(leg) = state.finish() {
            info!("arrived at {}", registry.record(leg.to).name);
        }
    }
}
