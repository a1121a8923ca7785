//! Application shell - view state and the submit state machine
//!
//! Each submit dispatches one backend operation and parks a channel receiver
//! on the active screen; `poll_submissions` drains it once per frame and
//! resets the loading flag on every branch, including a vanished worker.

use std::sync::mpsc::TryRecvError;
use std::sync::Arc;

use crate::backend::Backend;
use crate::error::{LoungeError, GAME_INFO_FALLBACK, LOGIN_FALLBACK, SIGNUP_FALLBACK};
use crate::log::{EventLog, LogEvent};
use crate::models::UserId;

use super::chat::ChatScreen;
use super::game_info::GameInfoScreen;
use super::login::LoginScreen;
use super::signup::SignupScreen;
use super::SubmitState;

/// Which step is on screen. The game-info step owns the identifier issued at
/// signup, so it cannot be reached without one.
pub enum Screen {
    Signup(SignupScreen),
    GameInfo(GameInfoScreen),
    Login(LoginScreen),
    Chat(ChatScreen),
}

pub struct LoungeApp {
    pub(crate) backend: Box<dyn Backend>,
    pub(crate) log: Arc<dyn EventLog>,
    pub(crate) screen: Screen,
}

enum Transition {
    ToGameInfo(UserId),
    ToChat(UserId),
}

impl LoungeApp {
    pub fn new(backend: Box<dyn Backend>, log: Arc<dyn EventLog>) -> Self {
        Self {
            backend,
            log,
            screen: Screen::Signup(SignupScreen::new()),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_busy(&self) -> bool {
        match &self.screen {
            Screen::Signup(screen) => screen.state.is_busy(),
            Screen::GameInfo(screen) => screen.state.is_busy(),
            Screen::Login(screen) => screen.state.is_busy(),
            Screen::Chat(_) => false,
        }
    }

    /// Runs one UI frame: drain finished submissions, then render the active
    /// screen.
    pub fn update_ui(&mut self, ctx: &egui::Context) {
        self.poll_submissions();

        // Keep polling while a submission is in flight
        if self.is_busy() {
            ctx.request_repaint();
        }

        match &self.screen {
            Screen::Signup(_) => self.render_signup(ctx),
            Screen::GameInfo(_) => self.render_game_info(ctx),
            Screen::Login(_) => self.render_login(ctx),
            Screen::Chat(_) => self.render_chat(ctx),
        }
    }

    // ========================================================================
    // Submit actions
    // ========================================================================

    pub fn submit_signup(&mut self) {
        let Screen::Signup(screen) = &mut self.screen else {
            return;
        };
        if screen.state.is_busy() {
            return;
        }
        if let Some(field) = screen.fields.first_missing() {
            self.log
                .record(LogEvent::warn("signup blocked: missing field").with("field", field));
            screen.error = Some(format!("{} is required", field));
            return;
        }

        self.log
            .record(LogEvent::info("signup submitted").with("email", screen.fields.email.clone()));
        screen.error = None;
        screen.state = SubmitState::Submitting;
        screen.receiver = Some(self.backend.start_signup(screen.fields.clone()));
    }

    pub fn submit_game_info(&mut self) {
        let Screen::GameInfo(screen) = &mut self.screen else {
            return;
        };
        if screen.state.is_busy() {
            return;
        }
        // Precondition: never hit the store without an account identifier.
        if screen.user_id.is_empty() {
            let err = LoungeError::MissingUserId;
            self.log
                .record(LogEvent::error("game info blocked: user id missing"));
            screen.error = Some(err.to_string());
            return;
        }
        let record = screen.record();
        if let Some(field) = record.first_missing() {
            self.log
                .record(LogEvent::warn("game info blocked: missing field").with("field", field));
            screen.error = Some(format!("{} is required", field));
            return;
        }

        self.log.record(
            LogEvent::info("game info submitted").with("user_id", screen.user_id.as_str()),
        );
        screen.error = None;
        screen.state = SubmitState::Submitting;
        screen.receiver = Some(self.backend.start_game_info_save(record));
    }

    pub fn submit_login(&mut self) {
        let Screen::Login(screen) = &mut self.screen else {
            return;
        };
        if screen.state.is_busy() {
            return;
        }
        if let Some(field) = screen.fields.first_missing() {
            self.log
                .record(LogEvent::warn("login blocked: missing field").with("field", field));
            screen.error = Some(format!("{} is required", field));
            return;
        }

        self.log
            .record(LogEvent::info("login submitted").with("email", screen.fields.email.clone()));
        screen.error = None;
        screen.state = SubmitState::Submitting;
        screen.receiver = Some(self.backend.start_login(screen.fields.clone()));
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn go_to_login(&mut self) {
        if !self.is_busy() {
            self.screen = Screen::Login(LoginScreen::new());
        }
    }

    pub fn go_to_signup(&mut self) {
        if !self.is_busy() {
            self.screen = Screen::Signup(SignupScreen::new());
        }
    }

    // ========================================================================
    // Submission results
    // ========================================================================

    /// Drains at most one finished submission from the active screen's
    /// channel and applies the outcome. The loading flag returns to idle on
    /// every non-pending branch.
    pub(crate) fn poll_submissions(&mut self) {
        let mut transition = None;

        match &mut self.screen {
            Screen::Signup(screen) => {
                if let Some(rx) = screen.receiver.take() {
                    match rx.try_recv() {
                        Ok(Ok(user_id)) => {
                            screen.state = SubmitState::Idle;
                            self.log.record(
                                LogEvent::info("signup succeeded")
                                    .with("user_id", user_id.as_str()),
                            );
                            transition = Some(Transition::ToGameInfo(user_id));
                        }
                        Ok(Err(err)) => {
                            self.log.record(
                                LogEvent::error("signup failed").with("error", err.to_string()),
                            );
                            screen.error = Some(err.to_string());
                            screen.state = SubmitState::Idle;
                        }
                        Err(TryRecvError::Empty) => screen.receiver = Some(rx),
                        Err(TryRecvError::Disconnected) => {
                            self.log.record(LogEvent::error("signup worker disappeared"));
                            screen.error = Some(SIGNUP_FALLBACK.to_string());
                            screen.state = SubmitState::Idle;
                        }
                    }
                }
            }
            Screen::GameInfo(screen) => {
                if let Some(rx) = screen.receiver.take() {
                    match rx.try_recv() {
                        Ok(Ok(())) => {
                            screen.state = SubmitState::Idle;
                            self.log.record(
                                LogEvent::info("game info saved")
                                    .with("user_id", screen.user_id.as_str()),
                            );
                            transition = Some(Transition::ToChat(screen.user_id.clone()));
                        }
                        Ok(Err(err)) => {
                            self.log.record(
                                LogEvent::error("game info save failed")
                                    .with("error", err.to_string()),
                            );
                            screen.error = Some(err.to_string());
                            screen.state = SubmitState::Idle;
                        }
                        Err(TryRecvError::Empty) => screen.receiver = Some(rx),
                        Err(TryRecvError::Disconnected) => {
                            self.log
                                .record(LogEvent::error("game info worker disappeared"));
                            screen.error = Some(GAME_INFO_FALLBACK.to_string());
                            screen.state = SubmitState::Idle;
                        }
                    }
                }
            }
            Screen::Login(screen) => {
                if let Some(rx) = screen.receiver.take() {
                    match rx.try_recv() {
                        Ok(Ok(user_id)) => {
                            screen.state = SubmitState::Idle;
                            self.log.record(
                                LogEvent::info("login succeeded").with("user_id", user_id.as_str()),
                            );
                            transition = Some(Transition::ToChat(user_id));
                        }
                        Ok(Err(err)) => {
                            self.log.record(
                                LogEvent::error("login failed").with("error", err.to_string()),
                            );
                            screen.error = Some(err.to_string());
                            screen.state = SubmitState::Idle;
                        }
                        Err(TryRecvError::Empty) => screen.receiver = Some(rx),
                        Err(TryRecvError::Disconnected) => {
                            self.log.record(LogEvent::error("login worker disappeared"));
                            screen.error = Some(LOGIN_FALLBACK.to_string());
                            screen.state = SubmitState::Idle;
                        }
                    }
                }
            }
            Screen::Chat(_) => {}
        }

        match transition {
            Some(Transition::ToGameInfo(user_id)) => {
                self.screen = Screen::GameInfo(GameInfoScreen::new(user_id));
            }
            Some(Transition::ToChat(user_id)) => {
                self.screen = Screen::Chat(ChatScreen::new(user_id));
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::log::MemoryLog;
    use crate::models::{GameInfoRecord, LoginFields, SignupFields};
    use std::sync::mpsc::{channel, Receiver, Sender};
    use std::sync::Mutex;

    /// Backend whose calls are recorded and whose results the test fires by
    /// hand, so the in-flight window is observable.
    #[derive(Default)]
    struct StubBackend {
        signup_calls: Mutex<Vec<SignupFields>>,
        save_calls: Mutex<Vec<GameInfoRecord>>,
        login_calls: Mutex<Vec<LoginFields>>,
        signup_senders: Mutex<Vec<Sender<Result<UserId>>>>,
        save_senders: Mutex<Vec<Sender<Result<()>>>>,
        login_senders: Mutex<Vec<Sender<Result<UserId>>>>,
    }

    impl Backend for Arc<StubBackend> {
        fn start_signup(&self, fields: SignupFields) -> Receiver<Result<UserId>> {
            self.signup_calls.lock().unwrap().push(fields);
            let (tx, rx) = channel();
            self.signup_senders.lock().unwrap().push(tx);
            rx
        }

        fn start_game_info_save(&self, record: GameInfoRecord) -> Receiver<Result<()>> {
            self.save_calls.lock().unwrap().push(record);
            let (tx, rx) = channel();
            self.save_senders.lock().unwrap().push(tx);
            rx
        }

        fn start_login(&self, fields: LoginFields) -> Receiver<Result<UserId>> {
            self.login_calls.lock().unwrap().push(fields);
            let (tx, rx) = channel();
            self.login_senders.lock().unwrap().push(tx);
            rx
        }
    }

    fn app_with(stub: &Arc<StubBackend>, log: &Arc<MemoryLog>) -> LoungeApp {
        LoungeApp::new(Box::new(stub.clone()), log.clone())
    }

    fn filled_fields() -> SignupFields {
        SignupFields {
            email: "a@b.com".into(),
            password: "pw123456".into(),
            nickname: "Ari".into(),
            favorite_game: "Chess".into(),
            gaming_experience: "Pro".into(),
        }
    }

    fn signup(app: &LoungeApp) -> &SignupScreen {
        match &app.screen {
            Screen::Signup(screen) => screen,
            _ => panic!("expected signup screen"),
        }
    }

    fn game_info(app: &LoungeApp) -> &GameInfoScreen {
        match &app.screen {
            Screen::GameInfo(screen) => screen,
            _ => panic!("expected game info screen"),
        }
    }

    #[test]
    fn blank_required_field_blocks_signup_without_network() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        if let Screen::Signup(screen) = &mut app.screen {
            screen.fields = filled_fields();
            screen.fields.favorite_game.clear();
        }
        app.submit_signup();

        assert!(stub.signup_calls.lock().unwrap().is_empty());
        assert_eq!(signup(&app).error.as_deref(), Some("Favorite game is required"));
        assert!(!signup(&app).state.is_busy());
    }

    #[test]
    fn signup_success_hands_user_id_to_game_info() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        if let Screen::Signup(screen) = &mut app.screen {
            screen.fields = filled_fields();
        }
        app.submit_signup();
        assert!(signup(&app).state.is_busy());
        assert_eq!(signup(&app).error, None);

        // Nothing arrived yet: still loading, still on signup.
        app.poll_submissions();
        assert!(signup(&app).state.is_busy());

        stub.signup_senders.lock().unwrap()[0]
            .send(Ok(UserId::new("u-42")))
            .unwrap();
        app.poll_submissions();

        assert_eq!(game_info(&app).user_id.as_str(), "u-42");
        assert!(!game_info(&app).state.is_busy());
        assert_eq!(stub.signup_calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn signup_failure_shows_provider_reason_and_stays() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        if let Screen::Signup(screen) = &mut app.screen {
            screen.fields = filled_fields();
        }
        app.submit_signup();
        stub.signup_senders.lock().unwrap()[0]
            .send(Err(LoungeError::Auth("User already registered".into())))
            .unwrap();
        app.poll_submissions();

        assert_eq!(signup(&app).error.as_deref(), Some("User already registered"));
        assert!(!signup(&app).state.is_busy());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        if let Screen::Signup(screen) = &mut app.screen {
            screen.fields = filled_fields();
        }
        app.submit_signup();
        app.submit_signup();

        assert_eq!(stub.signup_calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn vanished_signup_worker_resets_loading_with_fallback() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        if let Screen::Signup(screen) = &mut app.screen {
            screen.fields = filled_fields();
        }
        app.submit_signup();
        stub.signup_senders.lock().unwrap().clear();
        app.poll_submissions();

        assert!(!signup(&app).state.is_busy());
        assert_eq!(signup(&app).error.as_deref(), Some(SIGNUP_FALLBACK));
    }

    #[test]
    fn empty_user_id_fails_game_info_without_network() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        app.screen = Screen::GameInfo(GameInfoScreen::new(UserId::new("")));
        if let Screen::GameInfo(screen) = &mut app.screen {
            screen.game_name = "Chess".into();
            screen.game_id = "1234".into();
        }
        app.submit_game_info();

        assert!(stub.save_calls.lock().unwrap().is_empty());
        assert_eq!(
            game_info(&app).error.as_deref(),
            Some("User identifier is missing")
        );
        assert!(!game_info(&app).state.is_busy());
    }

    #[test]
    fn blank_game_field_blocks_save_without_network() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        app.screen = Screen::GameInfo(GameInfoScreen::new(UserId::new("u-42")));
        if let Screen::GameInfo(screen) = &mut app.screen {
            screen.game_id = "1234".into();
        }
        app.submit_game_info();

        assert!(stub.save_calls.lock().unwrap().is_empty());
        assert_eq!(game_info(&app).error.as_deref(), Some("Game name is required"));
    }

    #[test]
    fn game_info_success_navigates_to_chat_once() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        app.screen = Screen::GameInfo(GameInfoScreen::new(UserId::new("u-42")));
        if let Screen::GameInfo(screen) = &mut app.screen {
            screen.game_name = "Chess".into();
            screen.game_id = "1234".into();
        }
        app.submit_game_info();
        assert!(game_info(&app).state.is_busy());

        {
            let calls = stub.save_calls.lock().unwrap();
            assert_eq!(calls[0].user_id.as_str(), "u-42");
            assert_eq!(calls[0].game_name, "Chess");
            assert_eq!(calls[0].game_id, "1234");
        }

        stub.save_senders.lock().unwrap()[0].send(Ok(())).unwrap();
        app.poll_submissions();
        let Screen::Chat(chat) = &app.screen else {
            panic!("expected chat screen");
        };
        assert_eq!(chat.user_id.as_str(), "u-42");

        // A further poll must not navigate or error again.
        app.poll_submissions();
        assert!(matches!(app.screen, Screen::Chat(_)));
        assert_eq!(stub.save_calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn store_failure_shows_message_verbatim_and_does_not_navigate() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        app.screen = Screen::GameInfo(GameInfoScreen::new(UserId::new("u-42")));
        if let Screen::GameInfo(screen) = &mut app.screen {
            screen.game_name = "Chess".into();
            screen.game_id = "1234".into();
        }
        app.submit_game_info();
        stub.save_senders.lock().unwrap()[0]
            .send(Err(LoungeError::Store("permission denied for table".into())))
            .unwrap();
        app.poll_submissions();

        assert_eq!(
            game_info(&app).error.as_deref(),
            Some("permission denied for table")
        );
        assert!(!game_info(&app).state.is_busy());
        assert_eq!(game_info(&app).game_name, "Chess");
    }

    #[test]
    fn login_success_enters_chat() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        app.go_to_login();
        if let Screen::Login(screen) = &mut app.screen {
            screen.fields.email = "a@b.com".into();
            screen.fields.password = "pw123456".into();
        }
        app.submit_login();
        stub.login_senders.lock().unwrap()[0]
            .send(Ok(UserId::new("u-7")))
            .unwrap();
        app.poll_submissions();

        let Screen::Chat(chat) = &app.screen else {
            panic!("expected chat screen");
        };
        assert_eq!(chat.user_id.as_str(), "u-7");
    }

    #[test]
    fn submit_lifecycle_is_recorded_on_the_log() {
        let stub = Arc::new(StubBackend::default());
        let log = Arc::new(MemoryLog::new());
        let mut app = app_with(&stub, &log);

        if let Screen::Signup(screen) = &mut app.screen {
            screen.fields = filled_fields();
        }
        app.submit_signup();
        stub.signup_senders.lock().unwrap()[0]
            .send(Ok(UserId::new("u-42")))
            .unwrap();
        app.poll_submissions();

        let messages = log.messages();
        assert!(messages.contains(&"signup submitted".to_string()));
        assert!(messages.contains(&"signup succeeded".to_string()));
    }
}
