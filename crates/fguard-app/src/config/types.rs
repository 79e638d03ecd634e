//! Settings types with serde defaults

use serde::{Deserialize, Serialize};

use fguard_api::DEFAULT_BASE_URL;

/// Top-level settings, one section per concern. Every field has a default so
/// a missing file (or a partial one) always yields a working config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub ui: UiSettings,
    pub analytics: AnalyticsSettings,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the backend API.
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Use Nerd Font glyphs in headers and tabs; plain ASCII otherwise.
    pub icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { icons: true }
    }
}

/// `[analytics]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Trailing window, in days, for the overview and daily chart.
    pub window_days: u32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
        assert!(settings.ui.icons);
        assert_eq!(settings.analytics.window_days, 7);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            base_url = "http://10.0.0.2:5000/api"
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.base_url, "http://10.0.0.2:5000/api");
        assert_eq!(settings.analytics.window_days, 7);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
