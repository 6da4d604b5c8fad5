//! Biblio core session types
//!
//! Everything the HTTP client needs to decide "who is signed in and is their
//! credential still usable" without touching the network: the decoded token
//! payload, the expiry check, and the storage boundary the session lives
//! behind.

pub mod session;
pub mod token;
pub mod types;

pub use session::{MemorySessionStore, SessionStore};
pub use token::{TokenPayload, decode_payload, is_expired, is_expired_at};
pub use types::{Role, UserProfile};
