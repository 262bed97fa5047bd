//! Click picking: a body selects it, a control quad issues its command.
//!
//! Manual ray tests instead of Bevy's mesh picking, to keep clicks on egui panels
//! from reaching the scene.

use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy_egui::EguiContexts;

use crate::navigation::{NavControl, Navigator};
use crate::scene::{BodyNode, BodyRegistry};
use crate::ui::ensure_egui;

pub fn picking_plugin(app: &mut App) {
    ensure_egui(app);
    app.add_systems(Update, click_pick_system);
}

#[derive(Clone, Copy, Debug)]
enum Hit {
    Body(usize),
    Control(NavControl),
}

#[allow(clippy::too_many_arguments)]
fn click_pick_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut contexts: EguiContexts,
    registry: Res<BodyRegistry>,
    bodies: Query<(&BodyNode, &GlobalTransform)>,
    controls: Query<(&NavControl, &GlobalTransform, &Aabb, &InheritedVisibility)>,
    mut navigator: Navigator,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor_pos) else {
        return;
    };

    let ray_origin = ray.origin;
    let ray_dir: Vec3 = *ray.direction;

    let mut best_hit: Option<(Hit, f32)> = None;

    for (body, transform) in &bodies {
        let radius = registry.record(body.index).fake_radius;
        if let Some(dist) = ray_sphere_intersect(ray_origin, ray_dir, transform.translation(), radius)
        {
            if best_hit.is_none_or(|(_, d)| dist < d) {
                best_hit = Some((Hit::Body(body.index), dist));
            }
        }
    }

    // Controls float in front of bodies; prefer them at equal distance.
    for (control, transform, aabb, visibility) in &controls {
        if !visibility.get() {
            continue;
        }
        if let Some(dist) = ray_aabb_test(ray_origin, ray_dir, transform, aabb) {
            if best_hit.is_none_or(|(_, d)| dist <= d) {
                best_hit = Some((Hit::Control(*control), dist));
            }
        }
    }

    match best_hit {
        Some((Hit::Body(index), _)) => {
            navigator.select_body(registry.record(index).name.clone());
        }
        Some((Hit::Control(NavControl(kind)), _)) => navigator.dispatch(kind.command()),
        None => {}
    }
}

fn ray_aabb_test(
    ray_origin: Vec3,
    ray_dir: Vec3,
    transform: &GlobalTransform,
    aabb: &Aabb,
) -> Option<f32> {
    let translation = transform.translation();
    let center: Vec3 = aabb.center.into();
    // Quads turn to face the camera; a cube around them keeps the test rotation-free.
    let half = Vec3::splat(Vec3::from(aabb.half_extents).max_element());
    let middle = translation + center;
    ray_box_distance(ray_origin, ray_dir, middle - half, middle + half)
}

/// Slab test. Distance along the ray to where it enters the box, zero from inside.
fn ray_box_distance(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let near = (min - origin) / dir;
    let far = (max - origin) / dir;
    let enter = near.min(far).max_element();
    let exit = near.max(far).min_element();
    (enter <= exit && exit > 0.0).then(|| enter.max(0.0))
}

fn ray_sphere_intersect(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(dir);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let exit = along + half_chord;
    if exit <= 0.0 {
        return None;
    }
    Some((along - half_chord).max(0.0))
}
