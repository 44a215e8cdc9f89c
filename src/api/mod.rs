//! HTTP API
//!
//! Axum router, shared application state, and REST endpoint handlers.

pub mod http;
pub mod rest;
pub mod state;
