//! Biblio HTTP client
//!
//! A client for the library-management REST backend with a transparent
//! authenticated-session layer. Every typed endpoint call flows through the
//! session coordinator in [`client`]: the stored access token is attached as
//! a bearer credential, exchanged for a fresh one before the call when it is
//! already expired, and exchanged once more if the server still answers 401.
//! When no usable token can be obtained the session is torn down and the
//! injected [`Navigator`] is asked to redirect to the sign-in route.
//!
//! The session store and the navigator are both injected, so the whole layer
//! runs against an in-memory store and a mock server in tests.

pub mod api;
pub mod client;
pub mod error;
pub mod navigator;
pub mod types;

pub use client::{BiblioClient, BiblioClientBuilder};
pub use error::ClientError;
pub use navigator::{Navigator, NoopNavigator};
