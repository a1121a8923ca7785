//! Seam to the hosted auth/data service
//!
//! The service is reached over plain HTTPS; the desktop build uses a blocking
//! client on worker threads, the WASM build uses the browser fetch API. Both
//! share the wire contract defined here and deliver exactly one result per
//! dispatched operation over an mpsc channel polled by the UI each frame.

use std::sync::mpsc::Receiver;

use crate::error::{LoungeError, Result};
use crate::models::{GameInfoRecord, LoginFields, SignupFields, UserId};

/// Table the game profile is upserted into, keyed uniquely by `user_id`.
pub const GAME_INFO_TABLE: &str = "user_game_info";

/// Auth endpoint for account creation.
pub const AUTH_SIGNUP_PATH: &str = "/auth/v1/signup";

/// Auth endpoint for the password grant.
pub const AUTH_TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";

/// Upsert semantics requested from the store: merge on conflict, return no
/// rows.
pub const UPSERT_PREFER: &str = "resolution=merge-duplicates,return=minimal";

/// REST path for the game-info upsert, with the conflict key pinned.
pub fn game_info_upsert_path() -> String {
    format!("/rest/v1/{}?on_conflict=user_id", GAME_INFO_TABLE)
}

/// Starts one network operation per call; the returned channel receives
/// exactly one result. Implementations must not block the caller.
pub trait Backend {
    fn start_signup(&self, fields: SignupFields) -> Receiver<Result<UserId>>;

    fn start_game_info_save(&self, record: GameInfoRecord) -> Receiver<Result<()>>;

    fn start_login(&self, fields: LoginFields) -> Receiver<Result<UserId>>;
}

// ============================================================================
// Wire helpers shared by both transports
// ============================================================================

/// Request body for the signup endpoint. Email/password are the credentials;
/// the remaining fields ride along as profile metadata owned by the provider.
pub fn signup_payload(fields: &SignupFields) -> serde_json::Value {
    serde_json::json!({
        "email": fields.email,
        "password": fields.password,
        "data": {
            "nickname": fields.nickname,
            "favorite_game": fields.favorite_game,
            "gaming_experience": fields.gaming_experience,
        }
    })
}

/// Request body for the password-grant login endpoint.
pub fn login_payload(fields: &LoginFields) -> serde_json::Value {
    serde_json::json!({
        "email": fields.email,
        "password": fields.password,
    })
}

/// Extracts the issued identifier from an auth response body. A success
/// response without a non-empty `user.id` violates the provider contract.
pub fn user_id_from_response(body: &serde_json::Value) -> Result<UserId> {
    let id = body
        .pointer("/user/id")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if id.trim().is_empty() {
        return Err(LoungeError::InvalidResponse(
            "auth response did not include a user id".to_string(),
        ));
    }
    Ok(UserId::new(id))
}

/// Pulls the human-readable reason out of a service error body. The service
/// reports errors as JSON with one of several message keys; the first one
/// present wins, otherwise the caller's fixed fallback.
pub fn provider_error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_payload_nests_profile_metadata() {
        let fields = SignupFields {
            email: "a@b.com".into(),
            password: "pw123456".into(),
            nickname: "Ari".into(),
            favorite_game: "Chess".into(),
            gaming_experience: "Pro".into(),
        };
        let payload = signup_payload(&fields);
        assert_eq!(payload["email"], "a@b.com");
        assert_eq!(payload["password"], "pw123456");
        assert_eq!(payload["data"]["nickname"], "Ari");
        assert_eq!(payload["data"]["favorite_game"], "Chess");
        assert_eq!(payload["data"]["gaming_experience"], "Pro");
    }

    #[test]
    fn user_id_comes_from_the_response_body() {
        let body = serde_json::json!({ "user": { "id": "u-42" } });
        assert_eq!(user_id_from_response(&body).unwrap(), UserId::new("u-42"));
    }

    #[test]
    fn missing_or_empty_user_id_is_rejected() {
        let no_user = serde_json::json!({ "session": null });
        assert!(matches!(
            user_id_from_response(&no_user),
            Err(LoungeError::InvalidResponse(_))
        ));

        let empty = serde_json::json!({ "user": { "id": "" } });
        assert!(matches!(
            user_id_from_response(&empty),
            Err(LoungeError::InvalidResponse(_))
        ));
    }

    #[test]
    fn error_message_prefers_service_reason() {
        let body = r#"{"msg":"User already registered"}"#;
        assert_eq!(
            provider_error_message(body, "fallback"),
            "User already registered"
        );

        let body = r#"{"error_description":"Invalid login credentials"}"#;
        assert_eq!(
            provider_error_message(body, "fallback"),
            "Invalid login credentials"
        );
    }

    #[test]
    fn error_message_falls_back_when_reason_missing() {
        assert_eq!(provider_error_message("", "fallback"), "fallback");
        assert_eq!(provider_error_message("<html>502</html>", "fallback"), "fallback");
        assert_eq!(provider_error_message(r#"{"msg":""}"#, "fallback"), "fallback");
    }

    #[test]
    fn upsert_path_pins_the_conflict_key() {
        assert_eq!(
            game_info_upsert_path(),
            "/rest/v1/user_game_info?on_conflict=user_id"
        );
    }
}
