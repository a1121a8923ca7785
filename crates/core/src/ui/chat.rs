//! Arrival screen after onboarding completes
//!
//! The chat product itself lives elsewhere; this screen is the hand-off
//! destination once the game profile is saved.

use egui::Color32;
use egui_phosphor::regular;

use crate::models::UserId;

use super::app::{LoungeApp, Screen};
use super::widgets::FORM_WIDTH;

pub struct ChatScreen {
    pub user_id: UserId,
}

impl ChatScreen {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl LoungeApp {
    pub(crate) fn render_chat(&mut self, ctx: &egui::Context) {
        let Screen::Chat(screen) = &self.screen else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(96.0);
                ui.set_max_width(FORM_WIDTH);

                ui.heading(format!("{} Chat", regular::CHAT_CIRCLE));
                ui.add_space(8.0);
                ui.label("You're all set. Welcome to the lounge!");
                ui.add_space(8.0);
                ui.colored_label(
                    Color32::GRAY,
                    format!("Signed in as {}", screen.user_id),
                );
            });
        });
    }
}
