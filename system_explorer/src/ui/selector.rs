//! Body selector: bottom strip with one button per body, innermost first.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::navigation::{NavigationState, Navigator};
use crate::scene::BodyRegistry;
use crate::ui::{accent, ensure_egui, panel_frame, panel_style};

pub fn selector_plugin(app: &mut App) {
    ensure_egui(app);
    app.add_systems(Update, selector_ui_system);
}

fn selector_ui_system(
    mut contexts: EguiContexts,
    registry: Res<BodyRegistry>,
    state: Res<NavigationState>,
    mut navigator: Navigator,
) {
    let mut picked = None;

    egui::TopBottomPanel::bottom("selector")
        .frame(panel_frame(8, 0))
        .show(contexts.ctx_mut(), |ui| {
            panel_style(ui);

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;
                for (index, entry) in registry.iter().enumerate() {
                    let is_active = index == state.active();
                    let [r, g, b] = entry.record.color;
                    let swatch = egui::Color32::from_rgb(
                        (r * 255.0) as u8,
                        (g * 255.0) as u8,
                        (b * 255.0) as u8,
                    );
                    let text = egui::RichText::new(&entry.record.name)
                        .color(if is_active { accent() } else { swatch });

                    let response = ui.add_enabled(
                        !state.is_locked(),
                        egui::Button::new(text).selected(is_active),
                    );
                    if response.clicked() {
                        picked = Some(entry.record.name.clone());
                    }
                }
            });
        });

    if let Some(name) = picked {
        navigator.select_body(name);
    }
}
