//! Keyboard bindings for navigation.

use bevy::prelude::*;

use crate::navigation::{NavigationCommand, Navigator};
use crate::scene::BodyRegistry;

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

pub fn keys_plugin(app: &mut App) {
    app.add_systems(Update, navigation_keys_system);
}

/// Maps one frame of key presses to a navigation command.
pub fn command_for_keys(keys: &ButtonInput<KeyCode>, registry: &BodyRegistry) -> Option<NavigationCommand> {
    if keys.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyN]) {
        return Some(NavigationCommand::Next);
    }
    if keys.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyP]) {
        return Some(NavigationCommand::Previous);
    }
    if keys.just_pressed(KeyCode::Escape) {
        return Some(NavigationCommand::Exit);
    }
    DIGITS
        .iter()
        .position(|&key| keys.just_pressed(key))
        .and_then(|index| registry.get(index))
        .map(|entry| NavigationCommand::Select(entry.record.name.clone()))
}

fn navigation_keys_system(
    keys: Res<ButtonInput<KeyCode>>,
    registry: Res<BodyRegistry>,
    mut navigator: Navigator,
) {
    if let Some(command) = command_for_keys(&keys, &registry) {
        navigator.dispatch(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalogue;
    use crate::scene::{BodyAnchors, BodyEntry};

    fn registry() -> BodyRegistry {
        let placeholder = Entity::PLACEHOLDER;
        let anchors = BodyAnchors {
            label: placeholder,
            camera: placeholder,
            next: placeholder,
            prev: placeholder,
            exit: placeholder,
        };
        BodyRegistry::new(
            Catalogue::default()
                .bodies()
                .iter()
                .map(|record| BodyEntry {
                    record: record.clone(),
                    node: placeholder,
                    anchors,
                })
                .collect(),
        )
    }

    fn pressed(keys: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut input = ButtonInput::default();
        for &key in keys {
            input.press(key);
        }
        input
    }

    #[test]
    fn arrows_and_letters_step_through_bodies() {
        let registry = registry();
        assert_eq!(
            command_for_keys(&pressed(&[KeyCode::ArrowRight]), &registry),
            Some(NavigationCommand::Next)
        );
        assert_eq!(
            command_for_keys(&pressed(&[KeyCode::KeyP]), &registry),
            Some(NavigationCommand::Previous)
        );
        assert_eq!(
            command_for_keys(&pressed(&[KeyCode::Escape]), &registry),
            Some(NavigationCommand::Exit)
        );
        assert_eq!(command_for_keys(&pressed(&[]), &registry), None);
    }

    #[test]
    fn digits_select_by_catalogue_position() {
        let registry = registry();
        assert_eq!(
            command_for_keys(&pressed(&[KeyCode::Digit3]), &registry),
            Some(NavigationCommand::Select("Earth".to_string()))
        );
        assert_eq!(
            command_for_keys(&pressed(&[KeyCode::Digit9]), &registry),
            None
        );
    }

    #[test]
    fn held_keys_fire_once() {
        let registry = registry();
        let mut input = pressed(&[KeyCode::KeyN]);
        input.clear();
        assert_eq!(command_for_keys(&input, &registry), None);
    }
}
