//! Explicit transform composition over the `Parent` chain.
//!
//! `GlobalTransform` is only refreshed during `PostUpdate` propagation, so it lags
//! behind anything moved earlier in the frame. Reparenting the camera rig needs the
//! world pose as of *now*, which is composed here from the local transforms.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

#[derive(SystemParam)]
pub struct SceneGraph<'w, 's> {
    nodes: Query<'w, 's, (&'static mut Transform, Option<&'static Parent>)>,
}

impl SceneGraph<'_, '_> {
    /// Composes the entity's world transform from its ancestors' local transforms.
    pub fn world_transform(&self, entity: Entity) -> Option<Transform> {
        let (local, parent) = self.nodes.get(entity).ok()?;
        let mut world = *local;
        let mut next = parent.map(Parent::get);
        while let Some(ancestor) = next {
            let (transform, parent) = self.nodes.get(ancestor).ok()?;
            world = transform.mul_transform(world);
            next = parent.map(Parent::get);
        }
        Some(world)
    }

    /// Moves `entity` to the scene root, rewriting its local transform so its world
    /// pose is unchanged. Returns that pose.
    pub fn detach_preserving_world(
        &mut self,
        commands: &mut Commands,
        entity: Entity,
    ) -> Option<Transform> {
        let world = self.world_transform(entity)?;
        let (mut local, _) = self.nodes.get_mut(entity).ok()?;
        *local = world;
        commands.entity(entity).remove_parent();
        Some(world)
    }
}
