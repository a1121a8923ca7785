//! Shared data models used across all platforms

use serde::{Deserialize, Serialize};

/// Opaque account identifier issued by the auth provider.
///
/// The provider owns the format; nothing here inspects it beyond checking
/// that it is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the signup form collects. All fields are required non-empty;
/// there is no format validation beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupFields {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub favorite_game: String,
    pub gaming_experience: String,
}

impl SignupFields {
    /// Label of the first blank field, in display order. Whitespace-only
    /// input counts as blank.
    pub fn first_missing(&self) -> Option<&'static str> {
        let checks: [(&str, &'static str); 5] = [
            (&self.email, "Email"),
            (&self.password, "Password"),
            (&self.nickname, "Nickname"),
            (&self.favorite_game, "Favorite game"),
            (&self.gaming_experience, "Gaming experience"),
        ];
        checks
            .into_iter()
            .find(|(value, _)| value.trim().is_empty())
            .map(|(_, label)| label)
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

/// Row upserted into the store's game-info table, keyed by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfoRecord {
    pub user_id: UserId,
    pub game_name: String,
    pub game_id: String,
}

impl GameInfoRecord {
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.game_name.trim().is_empty() {
            Some("Game name")
        } else if self.game_id.trim().is_empty() {
            Some("Game ID")
        } else {
            None
        }
    }
}

/// Credentials for the existing-account path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() {
            Some("Email")
        } else if self.password.trim().is_empty() {
            Some("Password")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupFields {
        SignupFields {
            email: "a@b.com".into(),
            password: "pw123456".into(),
            nickname: "Ari".into(),
            favorite_game: "Chess".into(),
            gaming_experience: "Pro".into(),
        }
    }

    #[test]
    fn complete_fields_have_nothing_missing() {
        assert!(filled().is_complete());
        assert_eq!(filled().first_missing(), None);
    }

    #[test]
    fn first_missing_reports_in_display_order() {
        let mut fields = filled();
        fields.nickname = "   ".into();
        fields.gaming_experience = String::new();
        assert_eq!(fields.first_missing(), Some("Nickname"));

        fields.email = String::new();
        assert_eq!(fields.first_missing(), Some("Email"));
    }

    #[test]
    fn whitespace_user_id_counts_as_empty() {
        assert!(UserId::new("  ").is_empty());
        assert!(!UserId::new("u-42").is_empty());
    }

    #[test]
    fn game_info_record_requires_both_fields() {
        let record = GameInfoRecord {
            user_id: UserId::new("u-42"),
            game_name: String::new(),
            game_id: "1234".into(),
        };
        assert_eq!(record.first_missing(), Some("Game name"));
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::new("u-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-42\"");
    }
}
