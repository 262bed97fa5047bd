//! Screen-space body names and control captions, plus camera-facing control quads.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::navigation::NavControl;
use crate::scene::{Anchor, AnchorKind, BodyRegistry};
use crate::ui::{accent, ensure_egui};

pub fn labels_plugin(app: &mut App) {
    ensure_egui(app);
    app.add_systems(Update, (billboard_controls_system, labels_ui_system));
}

/// Turns each control quad's face toward the viewer camera.
fn billboard_controls_system(
    cameras: Query<&GlobalTransform, With<Camera3d>>,
    mut controls: Query<(&GlobalTransform, &mut Transform), With<NavControl>>,
) {
    let Ok(camera) = cameras.get_single() else {
        return;
    };
    let eye = camera.translation();
    for (global, mut transform) in &mut controls {
        let away = global.translation() - eye;
        if away.length_squared() > f32::EPSILON {
            transform.look_to(away, Vec3::Y);
        }
    }
}

fn labels_ui_system(
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    registry: Res<BodyRegistry>,
    anchors: Query<(&Anchor, &GlobalTransform, &InheritedVisibility)>,
    controls: Query<(&NavControl, &GlobalTransform, &InheritedVisibility)>,
) {
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();

    for (anchor, transform, visibility) in &anchors {
        if anchor.kind != AnchorKind::Label || !visibility.get() {
            continue;
        }
        let Ok(pos) = camera.world_to_viewport(cam_transform, transform.translation()) else {
            continue;
        };
        let name = &registry.record(anchor.body).name;
        floating_text(
            ctx,
            egui::Id::new(("body label", anchor.body)),
            pos,
            egui::RichText::new(name).size(18.0).color(accent()),
        );
    }

    for (NavControl(kind), transform, visibility) in &controls {
        if !visibility.get() {
            continue;
        }
        let Ok(pos) = camera.world_to_viewport(cam_transform, transform.translation()) else {
            continue;
        };
        floating_text(
            ctx,
            egui::Id::new(("control caption", *kind)),
            pos,
            egui::RichText::new(kind.caption())
                .size(13.0)
                .color(egui::Color32::from_rgb(230, 230, 240)),
        );
    }
}

fn floating_text(ctx: &egui::Context, id: egui::Id, pos: Vec2, text: egui::RichText) {
    egui::Area::new(id)
        .fixed_pos(egui::pos2(pos.x, pos.y))
        .pivot(egui::Align2::CENTER_CENTER)
        .interactable(false)
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            ui.label(text.monospace());
        });
}
