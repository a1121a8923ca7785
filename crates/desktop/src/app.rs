//! Native shell around the shared UI - window chrome and settings

use std::sync::Arc;

use egui_phosphor::regular;
use lounge_core::{EventLog, LoungeApp, TracingLog};

use crate::backend::HttpBackend;
use crate::config::Config;

pub struct DesktopApp {
    app: LoungeApp,
    config: Config,
    show_settings: bool,
}

impl DesktopApp {
    pub fn new() -> Self {
        let config = Config::load();
        let show_settings = !config.is_valid(); // Prompt for the backend on first run
        let log: Arc<dyn EventLog> = Arc::new(TracingLog);
        Self {
            app: LoungeApp::new(Box::new(HttpBackend), log),
            config,
            show_settings,
        }
    }

    fn render_chrome(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("chrome").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} Gaming Lounge", regular::GAME_CONTROLLER));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(regular::GEAR).on_hover_text("Settings").clicked() {
                        self.show_settings = true;
                    }
                });
            });
        });
    }

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        let mut show_settings = self.show_settings;

        egui::Window::new(format!("{} Settings", regular::GEAR))
            .open(&mut show_settings)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.heading("Backend");
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.label("Base URL:");
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut self.config.backend_url)
                                    .desired_width(220.0)
                                    .hint_text("https://lounge.example.com"),
                            )
                            .changed()
                        {
                            let _ = self.config.save();
                        }
                    });

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.label("API key:");
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut self.config.anon_key)
                                    .desired_width(220.0)
                                    .password(true)
                                    .hint_text("Public API key"),
                            )
                            .changed()
                        {
                            let _ = self.config.save();
                        }
                    });

                    ui.add_space(12.0);

                    if !self.config.is_valid() {
                        ui.colored_label(
                            egui::Color32::YELLOW,
                            format!("{} Base URL and API key are required", regular::WARNING),
                        );
                    } else {
                        ui.colored_label(
                            egui::Color32::GREEN,
                            format!("{} Configuration valid", regular::CHECK),
                        );
                    }
                });
            });

        self.show_settings = show_settings;
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_chrome(ctx);
        self.app.update_ui(ctx);
        self.render_settings_window(ctx);
    }
}
