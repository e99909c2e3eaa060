use serde::Deserialize;

/// localStorage key holding an optional TOML override
const CONFIG_STORAGE_KEY: &str = "broker_offers_config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub csrf: CsrfConfig,
    pub offers: OffersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    pub base: String,
    pub inquiries_path: String,
    pub customer_response_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            inquiries_path: "/api/inquiries/".to_string(),
            customer_response_path: "/api/customer-response/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub header_name: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_string(),
            header_name: "X-CSRFToken".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OffersConfig {
    /// Suffix appended to formatted prices
    pub currency: String,
    /// Pause between a successful response and the table reload
    pub reload_delay_ms: u32,
}

impl Default for OffersConfig {
    fn default() -> Self {
        Self {
            currency: "EGP".to_string(),
            reload_delay_ms: 2000,
        }
    }
}

/// Parse a TOML document; missing sections and keys keep their defaults
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration
///
/// Search order:
/// 1. TOML text stored in localStorage under `broker_offers_config`
/// 2. Falls back to built-in defaults
pub fn load_config() -> Config {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(contents) = stored {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage key '{}'", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => {
                log::warn!("Ignoring invalid config override: {}", e);
            }
        }
    }

    log::info!("Using default configuration");
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.inquiries_path, "/api/inquiries/");
        assert_eq!(config.csrf.header_name, "X-CSRFToken");
        assert_eq!(config.offers.reload_delay_ms, 2000);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
[api]
base = "http://localhost:8000"

[offers]
currency = "USD"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base, "http://localhost:8000");
        assert_eq!(config.api.customer_response_path, "/api/customer-response/");
        assert_eq!(config.offers.currency, "USD");
        assert_eq!(config.offers.reload_delay_ms, 2000);
        assert_eq!(config.csrf, CsrfConfig::default());
    }

    #[test]
    fn test_invalid_document() {
        assert!(parse_config("[offers]\nreload_delay_ms = \"soon\"").is_err());
    }
}
