//! Typed endpoint methods, grouped the way the backend gates them: public
//! authentication routes plus the reader, admin, and owner protected groups.
//! All of them flow through the session coordinator.

mod admin;
mod auth;
mod owner;
mod reader;
