//! Game-info step - records the new user's game profile

use std::sync::mpsc::Receiver;

use crate::error::Result;
use crate::models::{GameInfoRecord, UserId};

use super::app::{LoungeApp, Screen};
use super::widgets::{error_alert, FORM_WIDTH};
use super::SubmitState;

pub struct GameInfoScreen {
    /// Identifier issued by the auth provider at signup.
    pub user_id: UserId,
    pub game_name: String,
    pub game_id: String,
    pub error: Option<String>,
    pub state: SubmitState,
    pub(crate) receiver: Option<Receiver<Result<()>>>,
}

impl GameInfoScreen {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            game_name: String::new(),
            game_id: String::new(),
            error: None,
            state: SubmitState::Idle,
            receiver: None,
        }
    }

    pub(crate) fn record(&self) -> GameInfoRecord {
        GameInfoRecord {
            user_id: self.user_id.clone(),
            game_name: self.game_name.clone(),
            game_id: self.game_id.clone(),
        }
    }

    /// Raw field values at time of failure, shown in dev builds only.
    fn debug_payload(&self) -> Option<String> {
        if cfg!(debug_assertions) {
            serde_json::to_string_pretty(&self.record()).ok()
        } else {
            None
        }
    }
}

impl LoungeApp {
    pub(crate) fn render_game_info(&mut self, ctx: &egui::Context) {
        let Screen::GameInfo(screen) = &mut self.screen else {
            return;
        };

        let mut submit_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.set_max_width(FORM_WIDTH);

                ui.heading("Game information");
                ui.label("Please provide your game details");
                ui.add_space(16.0);

                if let Some(error) = &screen.error {
                    let payload = screen.debug_payload();
                    error_alert(ui, error, payload.as_deref());
                    ui.add_space(8.0);
                }

                ui.add(
                    egui::TextEdit::singleline(&mut screen.game_name)
                        .hint_text("Game name")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut screen.game_id)
                        .hint_text("Game ID")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(16.0);

                let busy = screen.state.is_busy();
                let label = if busy { "Submitting..." } else { "Submit" };
                let button = egui::Button::new(label).min_size(egui::vec2(FORM_WIDTH, 28.0));
                if ui.add_enabled(!busy, button).clicked() {
                    submit_clicked = true;
                }
                if busy {
                    ui.add_space(8.0);
                    ui.spinner();
                }
            });
        });

        if submit_clicked {
            self.submit_game_info();
        }
    }
}
