//! Login request and user records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials posted to `/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Token lifetime requested from the API, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_mins: Option<u32>,
}

impl Credentials {
    /// Create credentials with the API's default token lifetime.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            expires_in_mins: None,
        }
    }

    /// Request a specific token lifetime.
    pub fn with_expiry(mut self, minutes: Option<u32>) -> Self {
        self.expires_in_mins = minutes;
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("expires_in_mins", &self.expires_in_mins)
            .finish()
    }
}

/// The authenticated user as returned by a successful login.
///
/// This is also the record persisted under the `user` storage key. Older
/// records carry the bearer token as `token`; both spellings are accepted.
/// Every field is optional, so any JSON object reads as a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub image: String,
    #[serde(alias = "token")]
    pub access_token: String,
    pub refresh_token: String,
}

impl User {
    /// Human-friendly name, falling back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Bearer token, if the record has one.
    pub fn token(&self) -> Option<&str> {
        if self.access_token.is_empty() {
            None
        } else {
            Some(&self.access_token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_omit_unset_expiry() {
        let json = serde_json::to_value(Credentials::new("emilys", "emilyspass")).unwrap();
        assert_eq!(json["username"], "emilys");
        assert!(json.get("expiresInMins").is_none());
    }

    #[test]
    fn credentials_send_expiry_in_camel_case() {
        let creds = Credentials::new("emilys", "emilyspass").with_expiry(Some(30));
        let json = serde_json::to_value(creds).unwrap();
        assert_eq!(json["expiresInMins"], 30);
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("emilys", "emilyspass"));
        assert!(debug.contains("emilys"));
        assert!(!debug.contains("emilyspass"));
    }

    #[test]
    fn parses_login_response() {
        let json = r#"{
            "id": 1,
            "username": "emilys",
            "email": "emily.johnson@x.dummyjson.com",
            "firstName": "Emily",
            "lastName": "Johnson",
            "gender": "female",
            "image": "https://dummyjson.com/icon/emilys/128",
            "accessToken": "eyJhbGciOi",
            "refreshToken": "eyJyZWZyZXNo"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.first_name, "Emily");
        assert_eq!(user.token(), Some("eyJhbGciOi"));
        assert_eq!(user.display_name(), "Emily Johnson");
    }

    #[test]
    fn accepts_legacy_token_field() {
        let json = r#"{"id": 1, "username": "johndoe", "token": "test-token"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.token(), Some("test-token"));
    }

    #[test]
    fn token_only_record_parses() {
        let user: User = serde_json::from_str(r#"{"token":"test-token"}"#).unwrap();
        assert_eq!(user.token(), Some("test-token"));
        assert_eq!(user.id, 0);
        assert!(user.username.is_empty());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = User {
            username: "kminchelle".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "kminchelle");
        assert_eq!(user.token(), None);
    }
}
