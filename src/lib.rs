//! earlybird - a minimal email signup capture service

pub mod cli;
pub mod config;
pub mod http_server;
pub mod notifier;
pub mod store;
