//! Browser fetch transport for the hosted backend
//!
//! Mirrors the desktop transport's wire contract; each operation runs as a
//! spawned task and sends its single result over the channel the UI polls.

use std::sync::mpsc::{channel, Receiver};

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use lounge_core::{
    game_info_upsert_path, login_payload, provider_error_message, signup_payload,
    user_id_from_response, Backend, GameInfoRecord, LoginFields, LoungeError, Result,
    SignupFields, UserId, AUTH_SIGNUP_PATH, AUTH_TOKEN_PATH, GAME_INFO_FALLBACK, LOGIN_FALLBACK,
    SIGNUP_FALLBACK, UPSERT_PREFER,
};

use crate::storage;

/// Backend endpoint resolved once at startup from the page location.
#[derive(Clone)]
pub struct FetchBackend {
    base_url: String,
    anon_key: String,
}

impl FetchBackend {
    pub fn from_location() -> Self {
        Self {
            base_url: storage::backend_url(),
            anon_key: storage::anon_key(),
        }
    }

    fn require_valid(&self) -> Result<()> {
        if self.base_url.trim().is_empty() || self.anon_key.trim().is_empty() {
            return Err(LoungeError::Config(
                "Backend URL and API key are not configured for this build".to_string(),
            ));
        }
        Ok(())
    }

    fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

impl Backend for FetchBackend {
    fn start_signup(&self, fields: SignupFields) -> Receiver<Result<UserId>> {
        let (tx, rx) = channel();
        let this = self.clone();
        spawn_local(async move {
            let _ = tx.send(sign_up(&this, &fields).await);
        });
        rx
    }

    fn start_game_info_save(&self, record: GameInfoRecord) -> Receiver<Result<()>> {
        let (tx, rx) = channel();
        let this = self.clone();
        spawn_local(async move {
            let _ = tx.send(save_game_info(&this, &record).await);
        });
        rx
    }

    fn start_login(&self, fields: LoginFields) -> Receiver<Result<UserId>> {
        let (tx, rx) = channel();
        let this = self.clone();
        spawn_local(async move {
            let _ = tx.send(log_in(&this, &fields).await);
        });
        rx
    }
}

async fn sign_up(backend: &FetchBackend, fields: &SignupFields) -> Result<UserId> {
    backend.require_valid()?;
    let url = format!("{}{}", backend.base(), AUTH_SIGNUP_PATH);

    let response = Request::post(&url)
        .header("apikey", &backend.anon_key)
        .json(&signup_payload(fields))
        .map_err(|e| LoungeError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoungeError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(LoungeError::Auth(provider_error_message(
            &body,
            SIGNUP_FALLBACK,
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| LoungeError::InvalidResponse(e.to_string()))?;
    user_id_from_response(&body)
}

async fn save_game_info(backend: &FetchBackend, record: &GameInfoRecord) -> Result<()> {
    backend.require_valid()?;
    let url = format!("{}{}", backend.base(), game_info_upsert_path());

    let response = Request::post(&url)
        .header("apikey", &backend.anon_key)
        .header("Authorization", &format!("Bearer {}", backend.anon_key))
        .header("Prefer", UPSERT_PREFER)
        .json(&[record])
        .map_err(|e| LoungeError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoungeError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(LoungeError::Store(provider_error_message(
            &body,
            GAME_INFO_FALLBACK,
        )));
    }

    Ok(())
}

async fn log_in(backend: &FetchBackend, fields: &LoginFields) -> Result<UserId> {
    backend.require_valid()?;
    let url = format!("{}{}", backend.base(), AUTH_TOKEN_PATH);

    let response = Request::post(&url)
        .header("apikey", &backend.anon_key)
        .json(&login_payload(fields))
        .map_err(|e| LoungeError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoungeError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(LoungeError::Auth(provider_error_message(
            &body,
            LOGIN_FALLBACK,
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| LoungeError::InvalidResponse(e.to_string()))?;
    user_id_from_response(&body)
}
