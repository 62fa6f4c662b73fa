//! Browser automation module for rendering JavaScript-heavy pages
//!
//! This module drives headless Chrome to load a page, wait for the initial
//! DOM to be constructed, and hand back the serialized document. Every render
//! owns its own short-lived browser process; dropping the session kills it.
//!
//! # Example
//!
//! ```no_run
//! use rust_crawl_server::browser::{BrowserConfig, BrowserSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Launch a fresh browser for this render
//! let session = BrowserSession::launch(&BrowserConfig::default())?;
//!
//! // Navigate, wait for DOMContentLoaded, extract HTML
//! let html = session.render("https://example.com")?;
//!
//! println!("Extracted {} bytes of HTML", html.len());
//! // Chrome process is reaped when `session` goes out of scope
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod renderer;
pub mod session;

// Re-export main types for convenience
pub use config::BrowserConfig;
pub use renderer::PageRenderer;
pub use session::{BrowserError, BrowserSession};
