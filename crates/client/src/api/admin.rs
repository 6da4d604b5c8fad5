//! Admin endpoints

use reqwest::Method;

use crate::client::BiblioClient;
use crate::error::ClientError;
use crate::types::{
    AddBookRequest, ApiResponse, BookResponse, IssueRequestsResponse, RemoveBookRequest,
    RequestDecision, SearchBooksRequest, SearchBooksResponse, UpdateBookRequest,
};

impl BiblioClient {
    /// Add a book to the admin's library, or another copy of an existing one.
    pub async fn add_book(&self, request: AddBookRequest) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/admin/add-book")
            .json(&request);
        self.execute(request).await
    }

    /// Remove one copy of a book from the inventory.
    pub async fn remove_book_copy(&self, isbn: &str) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/admin/remove-book")
            .json(&RemoveBookRequest {
                isbn: isbn.to_string(),
            });
        self.execute(request).await
    }

    /// Update a book's catalog details.
    pub async fn update_book(
        &self,
        request: UpdateBookRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::PATCH, "/protected/admin/update-book")
            .json(&request);
        self.execute(request).await
    }

    /// Fetch a single book by ISBN.
    pub async fn get_book(&self, isbn: &str) -> Result<BookResponse, ClientError> {
        let request = self.request(Method::GET, &format!("/protected/admin/books/{isbn}"));
        self.execute(request).await
    }

    /// Search the library's inventory.
    pub async fn search_inventory(
        &self,
        request: SearchBooksRequest,
    ) -> Result<SearchBooksResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/admin/books")
            .json(&request);
        self.execute(request).await
    }

    /// Pending issue requests awaiting a decision.
    pub async fn issue_requests(&self) -> Result<IssueRequestsResponse, ClientError> {
        let request = self.request(Method::GET, "/protected/admin/issue-requests");
        self.execute(request).await
    }

    /// Approve an issue request.
    pub async fn approve_issue_request(
        &self,
        decision: RequestDecision,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/admin/approve-issue-request")
            .json(&decision);
        self.execute(request).await
    }

    /// Reject an issue request.
    pub async fn reject_issue_request(
        &self,
        decision: RequestDecision,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::POST, "/protected/admin/reject-issue-request")
            .json(&decision);
        self.execute(request).await
    }
}
