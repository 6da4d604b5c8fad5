//! Owner endpoints

use reqwest::Method;

use crate::client::BiblioClient;
use crate::error::ClientError;
use crate::types::{
    AdminsRequest, AdminsResponse, ApiResponse, CreateLibraryRequest, LibrariesResponse,
    OnboardAdminRequest,
};

impl BiblioClient {
    /// Create a new library together with its owning user.
    pub async fn create_library(
        &self,
        request: CreateLibraryRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/owner/create-library")
            .json(&request);
        self.execute(request).await
    }

    /// Onboard an admin for a library.
    pub async fn onboard_admin(
        &self,
        request: OnboardAdminRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/owner/onboard-admin")
            .json(&request);
        self.execute(request).await
    }

    /// Libraries owned by the signed-in user.
    pub async fn libraries(&self) -> Result<LibrariesResponse, ClientError> {
        let request = self.request(Method::GET, "/protected/owner/libraries");
        self.execute(request).await
    }

    /// Admins onboarded for a library.
    pub async fn admins(&self, library_id: &str) -> Result<AdminsResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/owner/admins")
            .json(&AdminsRequest {
                library_id: library_id.to_string(),
            });
        self.execute(request).await
    }
}
