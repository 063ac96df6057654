//! API module for HTTP endpoints
//!
//! This module provides the polling REST API and optional static file serving.

pub mod http;
pub mod rest;

pub use http::{create_router, serve};
