//! Signup step - account credentials plus profile details

use std::sync::mpsc::Receiver;

use egui_phosphor::regular;

use crate::error::Result;
use crate::models::{SignupFields, UserId};

use super::app::{LoungeApp, Screen};
use super::widgets::{error_alert, FORM_WIDTH};
use super::SubmitState;

pub struct SignupScreen {
    pub fields: SignupFields,
    pub error: Option<String>,
    pub state: SubmitState,
    pub(crate) receiver: Option<Receiver<Result<UserId>>>,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            fields: SignupFields::default(),
            error: None,
            state: SubmitState::Idle,
            receiver: None,
        }
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoungeApp {
    pub(crate) fn render_signup(&mut self, ctx: &egui::Context) {
        let Screen::Signup(screen) = &mut self.screen else {
            return;
        };

        let mut submit_clicked = false;
        let mut login_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.set_max_width(FORM_WIDTH);

                ui.heading(format!("{} Gaming Lounge", regular::GAME_CONTROLLER));
                ui.label("Create a new account");
                ui.add_space(16.0);

                if let Some(error) = &screen.error {
                    error_alert(ui, error, None);
                    ui.add_space(8.0);
                }

                ui.add(
                    egui::TextEdit::singleline(&mut screen.fields.email)
                        .hint_text("Email")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut screen.fields.password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut screen.fields.nickname)
                        .hint_text("Nickname")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut screen.fields.favorite_game)
                        .hint_text("Favorite game")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut screen.fields.gaming_experience)
                        .hint_text("Gaming experience (e.g. Beginner, Intermediate, Pro)")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(16.0);

                let busy = screen.state.is_busy();
                let label = if busy { "Signing up..." } else { "Sign up" };
                let button = egui::Button::new(label).min_size(egui::vec2(FORM_WIDTH, 28.0));
                if ui.add_enabled(!busy, button).clicked() {
                    submit_clicked = true;
                }
                if busy {
                    ui.add_space(8.0);
                    ui.spinner();
                }

                ui.add_space(12.0);
                if ui.link("Already have an account? Log in").clicked() {
                    login_clicked = true;
                }
            });
        });

        if submit_clicked {
            self.submit_signup();
        }
        if login_clicked {
            self.go_to_login();
        }
    }
}
