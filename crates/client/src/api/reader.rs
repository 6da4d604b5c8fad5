//! Reader endpoints

use reqwest::Method;

use crate::client::BiblioClient;
use crate::error::ClientError;
use crate::types::{
    ApiResponse, AvailabilityResponse, RaiseIssueRequest, SearchBooksRequest, SearchBooksResponse,
};

impl BiblioClient {
    /// Search the catalog of the reader's library.
    pub async fn search_books(
        &self,
        request: SearchBooksRequest,
    ) -> Result<SearchBooksResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/reader/books")
            .json(&request);
        self.execute(request).await
    }

    /// Latest expected availability date for a book.
    pub async fn check_availability(
        &self,
        isbn: &str,
    ) -> Result<AvailabilityResponse, ClientError> {
        let request = self.request(Method::GET, &format!("/protected/reader/latest/{isbn}"));
        self.execute(request).await
    }

    /// Raise an issue request for a book.
    pub async fn request_issue(
        &self,
        request: RaiseIssueRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/reader/request-issue")
            .json(&request);
        self.execute(request).await
    }
}
