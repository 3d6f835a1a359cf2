//! Frontend configuration
//!
//! Defaults are compiled in. A page may override any subset of them with
//! `<meta name="asset-config" content="...toml...">`.

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FrontendConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
    pub prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            prefix: "/api".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub default_page_size: usize,
    pub toast_timeout_ms: u32,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            toast_timeout_ms: 4000,
            log_level: "debug".to_string(),
        }
    }
}

/// Page sizes offered by list pages
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

static CONFIG: OnceCell<FrontendConfig> = OnceCell::new();

/// Parse an override; on failure the defaults are used
pub fn parse_config(override_toml: Option<&str>) -> FrontendConfig {
    match override_toml.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => match toml::from_str::<FrontendConfig>(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid asset-config override, using defaults: {}", e);
                FrontendConfig::default()
            }
        },
        None => FrontendConfig::default(),
    }
}

fn meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name=\"asset-config\"]")
        .ok()
        .flatten()?;
    meta.get_attribute("content")
}

/// Process-wide configuration, resolved on first access
pub fn config() -> &'static FrontendConfig {
    CONFIG.get_or_init(|| parse_config(meta_override().as_deref()))
}

impl UiConfig {
    /// `log_level` as a `log::Level`; unknown values mean `Debug`
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    /// Configured page size snapped to one of the offered options
    pub fn page_size(&self) -> usize {
        if PAGE_SIZE_OPTIONS.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            PAGE_SIZE_OPTIONS[1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_config(None);
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.ui.default_page_size, 25);
        assert_eq!(config.ui.toast_timeout_ms, 4000);
        assert_eq!(config.ui.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = parse_config(Some("[ui]\ndefault_page_size = 50"));
        assert_eq!(config.ui.page_size(), 50);
        assert_eq!(config.ui.toast_timeout_ms, 4000);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_override() {
        let config = parse_config(Some(
            r#"
            [api]
            port = 8080
            prefix = "/v1"

            [ui]
            default_page_size = 50
            toast_timeout_ms = 2000
            log_level = "info"
            "#,
        ));
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.prefix, "/v1");
        assert_eq!(config.ui.level(), log::Level::Info);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(parse_config(Some("[api]\nport = \"x\"")), FrontendConfig::default());
        assert_eq!(parse_config(Some("   ")), FrontendConfig::default());
    }

    #[test]
    fn test_page_size_snaps_to_options() {
        let mut ui = FrontendConfig::default().ui;
        ui.default_page_size = 33;
        assert_eq!(ui.page_size(), 25);
        ui.default_page_size = 100;
        assert_eq!(ui.page_size(), 100);
    }
}
