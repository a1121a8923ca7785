//! Shared form UI for the desktop and WASM builds
//!
//! Platform specifics (transport, configuration) come in through the
//! `Backend` trait; everything the user sees lives here.

mod app;
mod chat;
mod game_info;
mod login;
mod signup;
mod widgets;

pub use app::{LoungeApp, Screen};
pub use chat::ChatScreen;
pub use game_info::GameInfoScreen;
pub use login::LoginScreen;
pub use signup::SignupScreen;

/// Loading flag for a form submit. Disables the submit control and gates the
/// dispatch path, so at most one submission is in flight per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}
