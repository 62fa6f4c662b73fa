use super::session::BrowserError;
use headless_chrome::Tab;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Navigation and extraction for a single browser tab
pub struct PageRenderer {
    tab: Arc<Tab>,
    timeout: Duration,
}

impl PageRenderer {
    /// Create a renderer with the default navigation timeout
    pub fn new(tab: Arc<Tab>) -> Self {
        Self {
            tab,
            timeout: Duration::from_secs(15),
        }
    }

    /// Create a renderer with a custom navigation timeout
    pub fn with_timeout(tab: Arc<Tab>, timeout: Duration) -> Self {
        Self { tab, timeout }
    }

    /// Navigate to a URL, wait for the initial DOM, and return the document
    pub fn render(&self, url: &str) -> Result<String, BrowserError> {
        self.navigate(url)?;
        self.wait_for_dom_content_loaded()?;
        self.html()
    }

    /// Issue navigation to a URL
    ///
    /// Engine-level load failures (DNS, refused connection, bad scheme)
    /// surface here as `NavigationError`.
    pub fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.tab.navigate_to(url).map_err(|e| {
            BrowserError::NavigationError(format!("Failed to navigate to {}: {}", url, e))
        })?;

        Ok(())
    }

    /// Wait until the document has left the `"loading"` state
    ///
    /// This corresponds to DOMContentLoaded: the initial document structure
    /// is parsed, subresources may still be in flight. Bounded by the
    /// renderer timeout.
    pub fn wait_for_dom_content_loaded(&self) -> Result<(), BrowserError> {
        let start = Instant::now();

        loop {
            if start.elapsed() > self.timeout {
                return Err(BrowserError::Timeout(format!(
                    "Navigation not DOM-ready after {:?}",
                    self.timeout
                )));
            }

            match self.tab.evaluate("document.readyState", false) {
                Ok(result) => {
                    if let Some(value) = result.value {
                        if value.as_str().map(|s| s != "loading").unwrap_or(false) {
                            return Ok(());
                        }
                    }
                }
                Err(_) => {
                    // Page still navigating, keep polling
                }
            }

            std::thread::sleep(Duration::from_millis(100));
        }
    }

    /// Get the serialized HTML content of the page
    pub fn html(&self) -> Result<String, BrowserError> {
        self.tab
            .get_content()
            .map_err(|e| BrowserError::HtmlExtractionError(e.to_string()))
    }

    /// Get a reference to the underlying tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }
}
