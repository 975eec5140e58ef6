use super::expose_secret;
use crate::macros::setter;
use secrecy::SecretString;
use serde::Serialize;

pub const DEFAULT_PATH: &str = "/api/signup";

// Requests

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    name: String,
    email: String,
    #[serde(rename = "nationalId")]
    national_id: String,
    #[serde(serialize_with = "expose_secret")]
    password: SecretString,
    role: String,
}

impl SignupRequest {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            national_id: String::new(),
            password: SecretString::from(String::new()),
            role: String::new(),
        }
    }

    setter!(name: String);
    setter!(email: String);
    setter!(national_id: String);
    setter!(password: SecretString);
    setter!(role: String);

    pub fn email_address(&self) -> &str {
        &self.email
    }
}

impl Default for SignupRequest {
    fn default() -> Self {
        Self::new()
    }
}
