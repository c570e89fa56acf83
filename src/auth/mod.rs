//! Auth Stub Module
//!
//! NextAuth-compatible endpoints returning static or echoing JSON. There is
//! no real authentication logic; the frontend expects these routes to exist.

pub mod handlers;
pub mod types;
