use credform_api::{
    ApiError, Client, LoginRequest, LoginResponse, MessageResponse, Reply, SignupRequest,
};
use std::future::Future;

/// Transport seam for the two credential endpoints
///
/// Production uses [`credform_api::Client`]; tests script replies and
/// transport failures without a network.
pub trait AuthGateway: Send + Sync + 'static {
    type Error: std::fmt::Display + Send;

    fn register(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<Reply<MessageResponse>, Self::Error>> + Send;

    fn authenticate(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<Reply<LoginResponse>, Self::Error>> + Send;
}

impl AuthGateway for Client {
    type Error = ApiError;

    async fn register(&self, request: &SignupRequest) -> Result<Reply<MessageResponse>, ApiError> {
        self.signup(request).await
    }

    async fn authenticate(&self, request: &LoginRequest) -> Result<Reply<LoginResponse>, ApiError> {
        self.login(request).await
    }
}
