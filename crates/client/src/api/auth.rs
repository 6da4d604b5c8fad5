//! Authentication endpoints

use reqwest::Method;

use crate::client::BiblioClient;
use crate::error::ClientError;
use crate::types::{
    ApiResponse, RegisterReaderRequest, ResponseStatus, SignInRequest, SignInResponse,
    UserResponse,
};

impl BiblioClient {
    /// Sign in with an email identifier.
    ///
    /// On a success response the returned token and profile are persisted to
    /// the session store; subsequent calls are sent authenticated.
    pub async fn sign_in(&self, email: impl Into<String>) -> Result<SignInResponse, ClientError> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&SignInRequest {
                email: email.into(),
            });
        let response: SignInResponse = self.execute(request).await?;

        if response.status == ResponseStatus::Success {
            if let Some(token) = &response.access_token {
                self.store().set_token(token);
            }
            if let Some(user) = &response.user {
                self.store().set_profile(user);
            }
        }

        Ok(response)
    }

    /// Register a new reader account with a library.
    pub async fn register_reader(
        &self,
        request: RegisterReaderRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/register").json(&request);
        self.execute(request).await
    }

    /// Fetch the signed-in user's details, refreshing the cached profile.
    pub async fn me(&self) -> Result<UserResponse, ClientError> {
        let request = self.request(Method::GET, "/protected/me");
        let response: UserResponse = self.execute(request).await?;

        if let Some(user) = &response.user {
            self.store().set_profile(user);
        }

        Ok(response)
    }

    /// Sign out locally: clear the session and redirect to the sign-in route.
    pub fn sign_out(&self) {
        self.force_sign_out();
    }
}
