use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrawlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl CrawlRequest {
    /// Validated target URL: present and non-blank, or `None`.
    pub fn target_url(&self) -> Option<&str> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CrawlResponse {
    pub success: bool,
    pub html: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
