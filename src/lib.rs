// Library interface for rust_crawl_server
// This allows tests and external crates to use the service components

pub mod app_state;
pub mod browser;
pub mod config;
pub mod metrics;
pub mod models;
pub mod server;
