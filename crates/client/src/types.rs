//! Wire types for the biblio REST API
//!
//! Response envelopes carry an explicit `status` marker next to the HTTP
//! status; older backend revisions disagreed on the envelope shape, so this
//! module standardizes on `{ status, message, ...fields }` throughout.

use biblio_core::UserProfile;
use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Minimal response envelope: an outcome and a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub message: String,
}

/// Response of the token refresh endpoint.
///
/// A `success` status without an `access_token` is treated as a failed
/// refresh by the session coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterReaderRequest {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub library_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// A book as tracked in a library's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub version: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

/// Field a catalog search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Authors,
    Publisher,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBooksRequest {
    pub search_string: String,
    pub field: SearchField,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBooksResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<Book>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
}

/// Latest expected availability date for a book with no free copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseIssueRequest {
    pub email: String,
    pub isbn: String,
}

/// A pending issue request as shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRequest {
    pub request_id: String,
    pub isbn: String,
    pub reader_id: String,
    pub request_date: String,
    pub book_title: String,
    pub available_copies: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRequestsResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default)]
    pub requests: Vec<IssueRequest>,
}

/// Approve/reject body: the request under decision and the deciding admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDecision {
    pub request_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBookRequest {
    /// Email of the admin adding the book.
    pub email: String,
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveBookRequest {
    pub isbn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLibraryRequest {
    pub library_name: String,
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardAdminRequest {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub library_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrariesResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libraries: Option<Vec<Library>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminsRequest {
    pub library_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminsResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<UserProfile>>,
}
