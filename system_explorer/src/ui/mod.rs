mod hud;
mod keys;
mod labels;
mod picking;
mod selector;

use bevy::prelude::*;
use bevy_egui::{egui, EguiPlugin};

pub use hud::hud_plugin;
pub use keys::keys_plugin;
pub use labels::labels_plugin;
pub use picking::picking_plugin;
pub use selector::selector_plugin;

fn ensure_egui(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
}

fn accent() -> egui::Color32 {
    egui::Color32::from_rgb(100, 220, 180)
}

fn panel_frame(margin: i8, radius: u8) -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
        .inner_margin(egui::Margin::same(margin))
        .corner_radius(egui::CornerRadius::same(radius))
}

fn panel_style(ui: &mut egui::Ui) {
    ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
    ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));
}
