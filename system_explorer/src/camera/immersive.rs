//! Head-tracked viewing: keep the tracked space offset so the headset sits at the rig.

use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::scene::SceneGraph;

/// Whether the viewer is head-tracked.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmersiveMode(pub bool);

/// Coordinate offset handed to the head-tracking host each frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerOffset(pub Transform);

/// Root of the tracked space; the viewer camera is its child in immersive mode.
#[derive(Component, Default)]
pub struct TrackedSpace;

pub fn immersive_enabled(mode: Res<ImmersiveMode>) -> bool {
    mode.0
}

/// Installs the negated rig world position as the offset translation.
pub(crate) fn sync_viewer_offset(
    graph: SceneGraph,
    rigs: Query<Entity, With<CameraRig>>,
    mut offset: ResMut<ViewerOffset>,
) {
    let Ok(rig) = rigs.get_single() else {
        return;
    };
    let Some(world) = graph.world_transform(rig) else {
        return;
    };
    offset.0.translation = -world.translation;
}

/// Host side: moves the tracked space root so the camera inside it rides with the rig.
pub(crate) fn apply_viewer_offset(
    offset: Res<ViewerOffset>,
    mut spaces: Query<&mut Transform, With<TrackedSpace>>,
) {
    for mut transform in &mut spaces {
        transform.translation = -offset.0.translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_rig(immersive: bool) -> (App, Entity) {
        let mut app = App::new();
        app.insert_resource(ImmersiveMode(immersive))
            .init_resource::<ViewerOffset>()
            .add_systems(
                Update,
                (
                    sync_viewer_offset.run_if(immersive_enabled),
                    apply_viewer_offset.run_if(immersive_enabled),
                )
                    .chain(),
            );

        let world = app.world_mut();
        let anchor = world.spawn(Transform::from_xyz(10.0, 6.0, -3.0)).id();
        let rig = world.spawn((CameraRig, Transform::from_xyz(0.0, 1.0, 0.0))).id();
        world.entity_mut(rig).set_parent(anchor);
        let space = world.spawn((TrackedSpace, Transform::default())).id();
        (app, space)
    }

    #[test]
    fn offset_is_the_negated_rig_world_position() {
        let (mut app, space) = app_with_rig(true);

        app.update();

        let offset = app.world().resource::<ViewerOffset>();
        assert_eq!(offset.0.translation, Vec3::new(-10.0, -7.0, 3.0));
        let tracked = app.world().get::<Transform>(space).unwrap();
        assert_eq!(tracked.translation, Vec3::new(10.0, 7.0, -3.0));
    }

    #[test]
    fn nothing_happens_outside_immersive_mode() {
        let (mut app, space) = app_with_rig(false);

        app.update();

        assert_eq!(*app.world().resource::<ViewerOffset>(), ViewerOffset::default());
        let tracked = app.world().get::<Transform>(space).unwrap();
        assert_eq!(tracked.translation, Vec3::ZERO);
    }
}
