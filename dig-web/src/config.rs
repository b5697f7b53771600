//! Application configuration
//!
//! Resolved once at startup and passed explicitly to whatever needs it.

use dig_common::DiggerConfig;

/// Used when `DIG_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the album proxy, without a trailing slash
    pub api_base_url: String,
    pub digger: DiggerConfig,
}

impl AppConfig {
    /// Read the build-time environment (`DIG_API_URL`)
    pub fn from_env() -> Self {
        Self::with_api_base_url(option_env!("DIG_API_URL"))
    }

    pub fn with_api_base_url(api_base_url: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            digger: DiggerConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base_url(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(AppConfig::default().api_base_url, "http://localhost:8000");
        assert_eq!(
            AppConfig::with_api_base_url(Some("  ")).api_base_url,
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = AppConfig::with_api_base_url(Some("https://dig.example/api//"));
        assert_eq!(config.api_base_url, "https://dig.example/api");
    }

    #[test]
    fn test_digger_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.digger.crate_size, 10);
        assert_eq!(config.digger.swipe_threshold, 80.0);
        assert_eq!(config.digger.volume, 0.5);
    }
}
