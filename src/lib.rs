//! AuthGate Backend Library
//!
//! Exposes the gateway's modules for use by the binary and the
//! integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod directory;
