pub mod endpoints;
mod error;
mod macros;

pub use crate::endpoints::{
    LoginRequest, LoginResponse, MessageResponse, Reply, SignupRequest, UserRef,
};
pub use crate::error::ApiError;

use serde::{de::DeserializeOwned, Serialize};

/// Paths of the two credential endpoints, relative to the server URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub signup: String,
    pub login: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            signup: endpoints::signup::DEFAULT_PATH.to_string(),
            login: endpoints::login::DEFAULT_PATH.to_string(),
        }
    }
}

pub struct Client {
    http_client: reqwest::Client,
    signup_url: String,
    login_url: String,
}

impl Client {
    /// Requests carry no client-side timeout; each attempt waits for the server.
    pub fn new(server_url: &str, endpoints: &Endpoints) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder().build()?;
        let base = server_url.trim_end_matches('/');

        Ok(Self {
            http_client,
            signup_url: format!("{}{}", base, endpoints.signup),
            login_url: format!("{}{}", base, endpoints.login),
        })
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Register a new account
    pub async fn signup(&self, req: &SignupRequest) -> Result<Reply<MessageResponse>, ApiError> {
        tracing::debug!("POST {} for {}", self.signup_url, req.email_address());
        self.post(&self.signup_url, req).await
    }

    /// Verify credentials; an accepted reply carries the access token
    pub async fn login(&self, req: &LoginRequest) -> Result<Reply<LoginResponse>, ApiError> {
        tracing::debug!("POST {} for {}", self.login_url, req.email_address());
        self.post(&self.login_url, req).await
    }

    async fn post<B, T>(&self, url: &str, body: &B) -> Result<Reply<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // `json` sets `Content-Type: application/json`
        let resp = self.http_client.post(url).json(body).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            Ok(Reply::Accepted(serde_json::from_slice(&bytes)?))
        } else {
            let body: MessageResponse = serde_json::from_slice(&bytes)?;
            tracing::debug!("{} rejected with status {}", url, status);
            Ok(Reply::Rejected {
                status: status.as_u16(),
                message: body.message,
            })
        }
    }
}
