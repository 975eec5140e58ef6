use super::expose_secret;
use crate::macros::setter;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PATH: &str = "/api/login";

// Requests

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    email: String,
    #[serde(serialize_with = "expose_secret")]
    password: SecretString,
    role: String,
}

impl LoginRequest {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(String::new()),
            role: String::new(),
        }
    }

    setter!(email: String);
    setter!(password: SecretString);
    setter!(role: String);

    pub fn email_address(&self) -> &str {
        &self.email
    }
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self::new()
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    /// Missing tokens decode as an empty string; callers persist it as-is.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl LoginResponse {
    /// Identifier of the authenticated user, if the server sent one
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    // Document stores commonly send `_id`
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
}
