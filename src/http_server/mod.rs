//! # HTTP Server Module
//!
//! Axum-based HTTP API for the email capture service.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/emails` - Capture a new email
//! - `GET /api/emails` - List captured emails, most recent first
//! - `DELETE /api/emails` - Delete an email
//! - `GET /api/emails/stats` - Aggregate signup statistics

pub mod config;
pub mod email_routes;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use email_routes::{email_routes, EmailState};
pub use server::HttpServer;
