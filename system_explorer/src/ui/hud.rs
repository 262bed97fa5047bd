//! HUD overlay: active body, its orbit, navigation lock, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::CameraTransition;
use crate::config::ExplorerSettings;
use crate::navigation::Navigator;
use crate::ui::{accent, ensure_egui, panel_frame, panel_style};

pub fn hud_plugin(app: &mut App) {
    ensure_egui(app);
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    navigator: Navigator,
    transition: Res<CameraTransition>,
    settings: Res<ExplorerSettings>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);
    let body = navigator.active_body();

    egui::Window::new("Star System")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(panel_frame(12, 6))
        .show(contexts.ctx_mut(), |ui| {
            panel_style(ui);

            ui.label(egui::RichText::new(&body.name).size(16.0).color(accent()));
            ui.add_space(4.0);

            ui.label(format!("Orbit  {}", format_period(body.orbit_period_years)));
            if let Some(years) = body.orbit_period_years {
                ui.label(format!(
                    "Lap    {}",
                    format_duration(years * settings.earth_year_seconds)
                ));
            }
            ui.label(format!("Radius {:.1}", body.fake_radius));
            ui.add_space(4.0);

            match transition.active {
                Some(flight) => {
                    ui.label("Travelling");
                    ui.add(
                        egui::ProgressBar::new(flight.progress())
                            .fill(egui::Color32::from_rgb(80, 180, 140)),
                    );
                }
                None => {
                    ui.label("Ready");
                }
            }

            ui.separator();
            ui.label(format!("FPS  {fps:.0}"));
            ui.label(
                egui::RichText::new("←/→ step  0-9 jump  Esc exit  O orbits  RMB look")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(120, 120, 140)),
            );
        });
}

fn format_period(years: Option<f32>) -> String {
    match years {
        Some(years) if years < 1.0 => format!("{:.0} days", years * 365.25),
        Some(years) => format!("{years:.2} years"),
        None => "stationary".to_string(),
    }
}

/// Wall-clock time for one revolution.
fn format_duration(secs: f32) -> String {
    let secs = secs.round() as u64;
    let mins = secs / 60;
    let hours = mins / 60;
    if hours > 0 {
        format!("{hours}h {:02}m", mins % 60)
    } else if mins > 0 {
        format!("{mins}m {:02}s", secs % 60)
    } else {
        format!("{secs}s")
    }
}
