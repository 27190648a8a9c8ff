//! HTTP layer for the marquee catalog service.
//!
//! Exposed as a library so integration tests can build the production
//! router via [`router::build_app_router`].

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
