use std::time::Duration;

use bevy::prelude::*;

use system_explorer::camera::{CameraRig, CameraTransition, TransitionFinished};
use system_explorer::config::ExplorerSettings;
use system_explorer::navigation::{
    ExitRequested, NavigationCommand, NavigationState, Phase, TransitionStarted, UiControls,
};
use system_explorer::scene::{AnchorKind, BodyRegistry};
use system_explorer::{star_system_plugin, BodyRecord, Catalogue};

const FRAME: f32 = 0.5;

fn body(name: &str, years: Option<f32>, fake_radius: f32, orbit_radius: f32) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        orbit_period_years: years,
        fake_radius,
        visual_asset: String::new(),
        orbit_radius,
        initial_angle: 0.0,
        color: [1.0; 3],
        rings: None,
    }
}

fn test_app() -> App {
    let catalogue = Catalogue::new(vec![
        body("Sun", None, 20.0, 0.0),
        body("Mercury", Some(0.24), 1.0, 40.0),
        body("Venus", Some(0.62), 2.0, 60.0),
    ])
    .unwrap();

    let mut app = App::new();
    app.insert_resource(catalogue)
        .insert_resource(Time::<()>::default())
        .add_plugins(star_system_plugin);
    app.update();
    app
}

fn step(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(FRAME));
    app.update();
}

fn send(app: &mut App, command: NavigationCommand) {
    app.world_mut().send_event(command);
    step(app);
}

/// Steps until the in-flight transition lands. Panics if it never does.
fn land(app: &mut App) {
    for _ in 0..100 {
        if !app.world().resource::<NavigationState>().is_locked() {
            return;
        }
        step(app);
    }
    panic!("transition never finished");
}

fn rig(app: &mut App) -> Entity {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<CameraRig>>()
        .single(world)
}

fn parent_of(app: &App, entity: Entity) -> Option<Entity> {
    app.world().get::<Parent>(entity).map(Parent::get)
}

fn world_position(app: &App, entity: Entity) -> Vec3 {
    let world = app.world();
    let mut transform = *world.get::<Transform>(entity).unwrap();
    let mut next = world.get::<Parent>(entity).map(Parent::get);
    while let Some(ancestor) = next {
        transform = world.get::<Transform>(ancestor).unwrap().mul_transform(transform);
        next = world.get::<Parent>(ancestor).map(Parent::get);
    }
    transform.translation
}

fn visibility(app: &App, entity: Entity) -> Visibility {
    *app.world().get::<Visibility>(entity).unwrap()
}

fn controls_snapshot(app: &App) -> Vec<(Option<Entity>, Visibility)> {
    let controls = *app.world().resource::<UiControls>();
    [controls.next, controls.prev, controls.exit]
        .into_iter()
        .map(|widget| (parent_of(app, widget), visibility(app, widget)))
        .collect()
}

#[derive(Resource, Default)]
struct Tally {
    started: usize,
    finished: usize,
}

fn tally_transitions(
    mut tally: ResMut<Tally>,
    mut started: EventReader<TransitionStarted>,
    mut finished: EventReader<TransitionFinished>,
) {
    tally.started += started.read().count();
    tally.finished += finished.read().count();
}

fn drain<E: Event + Clone>(app: &App) -> Vec<E> {
    let events = app.world().resource::<Events<E>>();
    events.get_cursor().read(events).cloned().collect()
}

#[test]
fn previous_on_the_first_body_does_nothing() {
    let mut app = test_app();
    let rig = rig(&mut app);
    let home_camera = app
        .world()
        .resource::<BodyRegistry>()
        .anchor(0, AnchorKind::Camera);
    let controls_before = controls_snapshot(&app);

    send(&mut app, NavigationCommand::Previous);

    let state = app.world().resource::<NavigationState>();
    assert_eq!(state.active(), 0);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(app.world().resource::<CameraTransition>().active.is_none());
    assert_eq!(parent_of(&app, rig), Some(home_camera));
    assert_eq!(controls_snapshot(&app), controls_before);
    assert!(drain::<TransitionStarted>(&app).is_empty());
}

#[test]
fn commands_during_a_transition_are_ignored() {
    let mut app = test_app();
    app.init_resource::<Tally>()
        .add_systems(Last, tally_transitions);

    send(&mut app, NavigationCommand::Next);
    assert!(app.world().resource::<NavigationState>().is_locked());

    send(&mut app, NavigationCommand::Next);
    send(&mut app, NavigationCommand::Select("Sun".to_string()));
    let flight = app.world().resource::<CameraTransition>().active.unwrap();
    assert_eq!((flight.leg.from, flight.leg.to), (0, 1));

    land(&mut app);

    let state = app.world().resource::<NavigationState>();
    assert_eq!(state.active(), 1);
    assert_eq!(state.phase(), Phase::Idle);

    step(&mut app);
    let tally = app.world().resource::<Tally>();
    assert_eq!((tally.started, tally.finished), (1, 1));
}

#[test]
fn arrival_moves_rig_labels_and_controls_to_the_target() {
    let mut app = test_app();
    let rig = rig(&mut app);

    send(&mut app, NavigationCommand::Next);
    land(&mut app);

    let registry = app.world().resource::<BodyRegistry>();
    let controls = *app.world().resource::<UiControls>();
    let sun_label = registry.anchor(0, AnchorKind::Label);
    let mercury_label = registry.anchor(1, AnchorKind::Label);
    let mercury_camera = registry.anchor(1, AnchorKind::Camera);
    let mercury_next = registry.anchor(1, AnchorKind::Next);
    let mercury_prev = registry.anchor(1, AnchorKind::Prev);
    let mercury_exit = registry.anchor(1, AnchorKind::Exit);

    assert_eq!(parent_of(&app, rig), Some(mercury_camera));
    assert_eq!(app.world().get::<Transform>(rig).unwrap().translation, Vec3::ZERO);

    assert_eq!(visibility(&app, sun_label), Visibility::Hidden);
    assert_eq!(visibility(&app, mercury_label), Visibility::Inherited);

    assert_eq!(parent_of(&app, controls.exit), Some(mercury_exit));
    assert_eq!(parent_of(&app, controls.next), Some(mercury_next));
    assert_eq!(parent_of(&app, controls.prev), Some(mercury_prev));
    assert_eq!(visibility(&app, controls.next), Visibility::Inherited);
    assert_eq!(visibility(&app, controls.prev), Visibility::Inherited);
    assert_eq!(visibility(&app, controls.exit), Visibility::Inherited);
}

#[test]
fn detaching_the_rig_keeps_its_world_position() {
    let mut app = test_app();
    let rig = rig(&mut app);
    send(&mut app, NavigationCommand::Next);
    land(&mut app);

    let (mercury, offset) = {
        let registry = app.world().resource::<BodyRegistry>();
        let settings = app.world().resource::<ExplorerSettings>();
        (
            registry.node(1),
            settings.camera_offset + Vec3::Y * registry.record(1).fake_radius,
        )
    };

    send(&mut app, NavigationCommand::Next);

    assert_eq!(parent_of(&app, rig), None);
    let expected = world_position(&app, mercury) + offset;
    let flight = app.world().resource::<CameraTransition>().active.unwrap();
    assert!(flight.from.distance(expected) < 1e-4);
    assert!(world_position(&app, rig).distance(expected) < 1e-4);
}

#[test]
fn flight_lands_on_the_moving_target_anchor() {
    let mut app = test_app();
    let rig = rig(&mut app);

    send(&mut app, NavigationCommand::Next);
    let destination = app.world().resource::<CameraTransition>().active.unwrap().to;
    land(&mut app);

    assert!(world_position(&app, rig).distance(destination) < 1e-2);
}

#[test]
fn two_steps_reach_venus_with_next_hidden() {
    let mut app = test_app();
    let rig = rig(&mut app);

    send(&mut app, NavigationCommand::Next);
    land(&mut app);
    send(&mut app, NavigationCommand::Next);
    land(&mut app);

    let registry = app.world().resource::<BodyRegistry>();
    let controls = *app.world().resource::<UiControls>();
    assert_eq!(app.world().resource::<NavigationState>().active(), 2);
    assert_eq!(parent_of(&app, rig), Some(registry.anchor(2, AnchorKind::Camera)));
    assert_eq!(parent_of(&app, controls.exit), Some(registry.anchor(2, AnchorKind::Exit)));
    assert_eq!(parent_of(&app, controls.prev), Some(registry.anchor(2, AnchorKind::Prev)));
    assert_eq!(visibility(&app, controls.next), Visibility::Hidden);
    assert_eq!(parent_of(&app, controls.next), Some(registry.anchor(1, AnchorKind::Next)));
    assert_eq!(visibility(&app, controls.prev), Visibility::Inherited);
    assert_eq!(visibility(&app, registry.anchor(1, AnchorKind::Label)), Visibility::Hidden);
    assert_eq!(visibility(&app, registry.anchor(2, AnchorKind::Label)), Visibility::Inherited);

    send(&mut app, NavigationCommand::Next);
    assert!(!app.world().resource::<NavigationState>().is_locked());
}

#[test]
fn selecting_by_name_jumps_directly() {
    let mut app = test_app();

    send(&mut app, NavigationCommand::Select("Venus".to_string()));
    land(&mut app);

    assert_eq!(app.world().resource::<NavigationState>().active(), 2);
}

#[test]
fn unknown_names_are_ignored() {
    let mut app = test_app();

    send(&mut app, NavigationCommand::Select("Pluto".to_string()));

    let state = app.world().resource::<NavigationState>();
    assert_eq!(state.active(), 0);
    assert!(!state.is_locked());
}

#[test]
fn exit_is_reported_only_when_idle() {
    let mut app = test_app();

    send(&mut app, NavigationCommand::Exit);
    let exits = drain::<ExitRequested>(&app);
    assert_eq!(exits.len(), 1);
    assert_eq!(exits[0].from, "Sun");

    // Let the first request age out of the double buffer.
    step(&mut app);
    step(&mut app);

    send(&mut app, NavigationCommand::Next);
    send(&mut app, NavigationCommand::Exit);
    assert!(drain::<ExitRequested>(&app).is_empty());
}
