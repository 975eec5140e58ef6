pub mod login;
pub mod signup;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

pub use login::{LoginRequest, LoginResponse, UserRef};
pub use signup::SignupRequest;

/// Outcome of a request that produced an HTTP response.
///
/// Success is decided by the status class alone: any 2xx is `Accepted`,
/// everything else is `Rejected` with the server-supplied message.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Accepted(T),
    Rejected { status: u16, message: String },
}

/// Body shape shared by every failure response and the signup success response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub(crate) fn expose_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
