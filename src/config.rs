use std::env;

use crate::name::DEFAULT_ENDPOINT;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub default_color: String,
    pub name_lookup_enabled: bool,
    pub name_api_url: String,
    pub name_lookup_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            default_color: "#000000".to_string(),
            name_lookup_enabled: true,
            name_api_url: DEFAULT_ENDPOINT.to_string(),
            name_lookup_timeout_secs: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            // Server
            bind_address: var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: var("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            default_color: var("DEFAULT_COLOR").unwrap_or(defaults.default_color),
            // Name lookup
            name_lookup_enabled: var("COLOR_NAME_LOOKUP_ENABLED")
                .map(|v| v != "false")
                .unwrap_or(defaults.name_lookup_enabled),
            name_api_url: var("COLOR_NAME_API_URL").unwrap_or(defaults.name_api_url),
            name_lookup_timeout_secs: var("COLOR_NAME_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.name_lookup_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_with(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_color, "#000000");
        assert!(config.name_lookup_enabled);
        assert_eq!(config.name_api_url, DEFAULT_ENDPOINT);
        assert_eq!(config.name_lookup_timeout_secs, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[
            ("PORT", "9000"),
            ("DEFAULT_COLOR", "#336699"),
            ("COLOR_NAME_LOOKUP_ENABLED", "false"),
            ("COLOR_NAME_TIMEOUT_SECS", "1"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_color, "#336699");
        assert!(!config.name_lookup_enabled);
        assert_eq!(config.name_lookup_timeout_secs, 1);
    }

    #[test]
    fn unparsable_numbers_keep_defaults() {
        let config = config_with(&[("PORT", "eighty"), ("COLOR_NAME_TIMEOUT_SECS", "-3")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.name_lookup_timeout_secs, 5);
    }
}
