//! Blocking HTTP transport for the hosted backend
//!
//! Each operation runs on a worker thread with a blocking client and sends
//! its single result back over the channel the UI polls. Configuration is
//! read fresh per operation so settings edits apply to the next submit.

use std::sync::mpsc::{channel, Receiver};
use std::thread;

use lounge_core::{
    game_info_upsert_path, login_payload, provider_error_message, signup_payload,
    user_id_from_response, Backend, GameInfoRecord, LoginFields, LoungeError, Result,
    SignupFields, UserId, AUTH_SIGNUP_PATH, AUTH_TOKEN_PATH, GAME_INFO_FALLBACK, LOGIN_FALLBACK,
    SIGNUP_FALLBACK, UPSERT_PREFER,
};

use crate::config::Config;

pub struct HttpBackend;

impl Backend for HttpBackend {
    fn start_signup(&self, fields: SignupFields) -> Receiver<Result<UserId>> {
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(sign_up(&Config::load(), &fields));
        });
        rx
    }

    fn start_game_info_save(&self, record: GameInfoRecord) -> Receiver<Result<()>> {
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(save_game_info(&Config::load(), &record));
        });
        rx
    }

    fn start_login(&self, fields: LoginFields) -> Receiver<Result<UserId>> {
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(log_in(&Config::load(), &fields));
        });
        rx
    }
}

fn require_valid(config: &Config) -> Result<()> {
    if config.is_valid() {
        Ok(())
    } else {
        Err(LoungeError::Config(
            "Set backend_url and anon_key in config.toml".to_string(),
        ))
    }
}

/// Create the account; email/password are the credentials, the rest rides
/// along as profile metadata owned by the provider.
pub fn sign_up(config: &Config, fields: &SignupFields) -> Result<UserId> {
    require_valid(config)?;
    let url = format!("{}{}", config.base_url(), AUTH_SIGNUP_PATH);

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(&url)
        .header("apikey", &config.anon_key)
        .json(&signup_payload(fields))
        .send()
        .map_err(|e| LoungeError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let body = response.text().unwrap_or_default();
        return Err(LoungeError::Auth(provider_error_message(
            &body,
            SIGNUP_FALLBACK,
        )));
    }

    let body: serde_json::Value = response
        .json()
        .map_err(|e| LoungeError::InvalidResponse(e.to_string()))?;
    user_id_from_response(&body)
}

/// Upsert the game profile, keyed by `user_id`; conflict resolution is the
/// store's. No rows come back on success.
pub fn save_game_info(config: &Config, record: &GameInfoRecord) -> Result<()> {
    require_valid(config)?;
    let url = format!("{}{}", config.base_url(), game_info_upsert_path());

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(&url)
        .header("apikey", &config.anon_key)
        .header("Authorization", format!("Bearer {}", config.anon_key))
        .header("Prefer", UPSERT_PREFER)
        .json(&[record])
        .send()
        .map_err(|e| LoungeError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let body = response.text().unwrap_or_default();
        return Err(LoungeError::Store(provider_error_message(
            &body,
            GAME_INFO_FALLBACK,
        )));
    }

    Ok(())
}

/// Exchange credentials for a session; only the account identifier is used.
pub fn log_in(config: &Config, fields: &LoginFields) -> Result<UserId> {
    require_valid(config)?;
    let url = format!("{}{}", config.base_url(), AUTH_TOKEN_PATH);

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(&url)
        .header("apikey", &config.anon_key)
        .json(&login_payload(fields))
        .send()
        .map_err(|e| LoungeError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let body = response.text().unwrap_or_default();
        return Err(LoungeError::Auth(provider_error_message(
            &body,
            LOGIN_FALLBACK,
        )));
    }

    let body: serde_json::Value = response
        .json()
        .map_err(|e| LoungeError::InvalidResponse(e.to_string()))?;
    user_id_from_response(&body)
}
