//! The three persistent navigation widgets and how they follow the active body.

use bevy::prelude::*;

use crate::navigation::state::Leg;
use crate::navigation::NavigationCommand;
use crate::scene::{AnchorKind, BodyRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Next,
    Prev,
    Exit,
}

impl ControlKind {
    pub fn anchor(self) -> AnchorKind {
        match self {
            ControlKind::Next => AnchorKind::Next,
            ControlKind::Prev => AnchorKind::Prev,
            ControlKind::Exit => AnchorKind::Exit,
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            ControlKind::Next => "Next Planet",
            ControlKind::Prev => "Previous Planet",
            ControlKind::Exit => "Exit to Home",
        }
    }

    pub fn command(self) -> NavigationCommand {
        match self {
            ControlKind::Next => NavigationCommand::Next,
            ControlKind::Prev => NavigationCommand::Previous,
            ControlKind::Exit => NavigationCommand::Exit,
        }
    }

    /// Next hides on the last body, prev on the first. Exit never hides.
    pub fn visible_at(self, index: usize, body_count: usize) -> bool {
        match self {
            ControlKind::Next => index + 1 < body_count,
            ControlKind::Prev => index > 0,
            ControlKind::Exit => true,
        }
    }
}

/// Marker on a navigation widget entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct NavControl(pub ControlKind);

/// Handles to the widgets. They are reparented between anchors, never respawned.
#[derive(Resource, Clone, Copy, Debug)]
pub struct UiControls {
    pub next: Entity,
    pub prev: Entity,
    pub exit: Entity,
}

impl UiControls {
    pub fn get(&self, kind: ControlKind) -> Entity {
        match kind {
            ControlKind::Next => self.next,
            ControlKind::Prev => self.prev,
            ControlKind::Exit => self.exit,
        }
    }
}

fn shown(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

pub(crate) fn spawn_controls(
    commands: &mut Commands,
    registry: &BodyRegistry,
    index: usize,
) -> UiControls {
    let mut spawn = |kind: ControlKind| {
        commands
            .spawn((
                Name::new(kind.caption()),
                NavControl(kind),
                Transform::default(),
                shown(kind.visible_at(index, registry.len())),
            ))
            .set_parent(registry.anchor(index, kind.anchor()))
            .id()
    };

    UiControls {
        next: spawn(ControlKind::Next),
        prev: spawn(ControlKind::Prev),
        exit: spawn(ControlKind::Exit),
    }
}

/// Arrival bookkeeping: swap labels, then move exit, next and prev onto the target.
pub(crate) fn apply_arrival(
    commands: &mut Commands,
    registry: &BodyRegistry,
    controls: &UiControls,
    visibility: &mut Query<&mut Visibility>,
    leg: Leg,
) {
    let mut set = |entity: Entity, value: Visibility| {
        if let Ok(mut current) = visibility.get_mut(entity) {
            *current = value;
        }
    };

    set(registry.anchor(leg.from, AnchorKind::Label), Visibility::Hidden);
    set(registry.anchor(leg.to, AnchorKind::Label), Visibility::Inherited);

    // Hidden controls keep their previous anchor.
    for kind in [ControlKind::Exit, ControlKind::Next, ControlKind::Prev] {
        let widget = controls.get(kind);
        let visible = kind.visible_at(leg.to, registry.len());
        if visible {
            commands
                .entity(widget)
                .set_parent(registry.anchor(leg.to, kind.anchor()));
        }
        set(widget, shown(visible));
    }
}
