//! API module for HTTP handlers, middleware, and DTOs.
//!
//! This module provides the HTTP surface of the relay: the inbound webhook
//! route, its body extractor, and the request middleware stack.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
