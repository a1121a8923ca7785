//! Small shared widgets for the form screens

use egui::{Color32, CollapsingHeader, Ui};
use egui_phosphor::regular;

pub(crate) const FORM_WIDTH: f32 = 350.0;

/// Alert frame shown above a form after a failed submit. `debug_payload`
/// renders as a collapsible section; callers only pass it in dev builds.
pub(crate) fn error_alert(ui: &mut Ui, message: &str, debug_payload: Option<&str>) {
    egui::Frame::new()
        .fill(Color32::from_rgb(70, 22, 28))
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.colored_label(
                Color32::from_rgb(255, 170, 170),
                format!("{} {}", regular::WARNING, message),
            );
            if let Some(payload) = debug_payload {
                CollapsingHeader::new("Debug info").show(ui, |ui| {
                    ui.monospace(payload);
                });
            }
        });
}
