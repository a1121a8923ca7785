//! Configuration management using config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the hosted backend service
    #[serde(default)]
    pub backend_url: String,

    /// Public API key sent with every request
    #[serde(default)]
    pub anon_key: String,
}

impl Config {
    /// Load config from file, creating a default one if it doesn't exist
    pub fn load() -> Self {
        if Path::new(CONFIG_PATH).exists() {
            match fs::read_to_string(CONFIG_PATH) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Error parsing config.toml: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config.toml: {}", e);
                }
            }
        }

        // Return default config (will prompt user to fill in)
        let config = Config::default();
        let _ = config.save();
        config
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(CONFIG_PATH, content)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        !self.backend_url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.backend_url.trim().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_default_to_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.backend_url, "");
        assert_eq!(config.anon_key, "");
        assert!(!config.is_valid());
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = Config {
            backend_url: "https://lounge.example.com/ ".into(),
            anon_key: "public-key".into(),
        };
        assert_eq!(config.base_url(), "https://lounge.example.com");
        assert!(config.is_valid());
    }
}
