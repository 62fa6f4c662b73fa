use super::config::BrowserConfig;
use super::renderer::PageRenderer;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;

/// A single-use headless browser session
///
/// Each session owns exactly one Chrome process and one tab, rendering
/// exactly one page. The process is killed when the session is dropped,
/// whichever way the render ended.
pub struct BrowserSession {
    browser: Browser,
    tab: Arc<Tab>,
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a fresh browser process and open a tab for rendering
    pub fn launch(config: &BrowserConfig) -> Result<Self, BrowserError> {
        // Owned argument strings must outlive the LaunchOptions borrow below
        let images_arg = if config.disable_images {
            Some("--blink-settings=imagesEnabled=false".to_string())
        } else {
            None
        };
        let user_agent_arg = config
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args: Vec<&OsStr> = vec![
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--no-sandbox"),
            OsStr::new("--disable-setuid-sandbox"),
        ];

        if let Some(ref img) = images_arg {
            args.push(OsStr::new(img));
        }
        if let Some(ref ua) = user_agent_arg {
            args.push(OsStr::new(ua));
        }
        for flag in &config.chrome_flags {
            args.push(OsStr::new(flag));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_size.0, config.window_size.1)))
            .args(args)
            .build()
            .map_err(|e| BrowserError::ConfigurationError(e.to_string()))?;

        let browser =
            Browser::new(launch_options).map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreationFailed(e.to_string()))?;

        Ok(Self {
            browser,
            tab,
            config: config.clone(),
        })
    }

    /// Load `url`, wait until the initial DOM is constructed, and return the
    /// serialized document
    pub fn render(&self, url: &str) -> Result<String, BrowserError> {
        let renderer = PageRenderer::with_timeout(self.tab.clone(), self.config.timeout());
        renderer.render(url)
    }

    /// Get the session configuration
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Get a reference to the underlying browser
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Get a reference to the session's tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }
}

/// Errors that can occur during browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser launch failed: {0}")]
    LaunchFailed(String),

    #[error("Browser configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tab creation failed: {0}")]
    TabCreationFailed(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("HTML extraction error: {0}")]
    HtmlExtractionError(String),
}
