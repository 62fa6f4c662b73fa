use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Address the HTTP server binds on
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds on
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub browser: BrowserSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowserSection {
    /// Navigation timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Run Chrome without a visible window
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Disable image loading (faster page loads)
    #[serde(default = "default_true")]
    pub disable_images: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Custom user agent, Chrome's default when unset
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    11236
}
fn default_timeout() -> u64 {
    15
}
fn default_true() -> bool {
    true
}
fn default_window_width() -> u32 {
    1920
}
fn default_window_height() -> u32 {
    1080
}

impl Default for BrowserSection {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            headless: true,
            disable_images: true,
            window_width: 1920,
            window_height: 1080,
            user_agent: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            browser: BrowserSection::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(cfg) = toml::from_str::<Config>(&content) {
                    return cfg;
                }
            }
        }
        Self::default()
    }

    /// Build the browser module configuration from this service configuration
    pub fn create_browser_config(&self) -> crate::browser::BrowserConfig {
        crate::browser::BrowserConfig {
            headless: self.browser.headless,
            window_size: (self.browser.window_width, self.browser.window_height),
            user_agent: self.browser.user_agent.clone(),
            timeout_seconds: self.browser.timeout_secs,
            disable_images: self.browser.disable_images,
            chrome_flags: vec![],
        }
    }

    /// Socket address string the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 11236);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.browser.timeout_secs, 15);
        assert!(config.browser.headless);
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:11236");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.browser.timeout_secs, 15);
        assert!(config.browser.disable_images);
    }

    #[test]
    fn test_browser_section_toml() {
        let raw = r#"
            [browser]
            timeout_secs = 30
            headless = false
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.browser.timeout_secs, 30);
        assert!(!config.browser.headless);
        assert_eq!(config.port, 11236);
    }

    #[test]
    fn test_create_browser_config() {
        let mut config = Config::default();
        config.browser.timeout_secs = 20;
        config.browser.headless = false;
        config.browser.window_width = 1280;
        config.browser.window_height = 720;

        let browser_config = config.create_browser_config();
        assert_eq!(browser_config.timeout_seconds, 20);
        assert!(!browser_config.headless);
        assert_eq!(browser_config.window_size, (1280, 720));
    }
}
