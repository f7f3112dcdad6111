//! Server configuration loaded from the environment.
//!
//! DESIGN
//! ======
//! Parsing is written against a lookup function so tests can supply a map
//! instead of mutating process environment. `from_env` is the only caller
//! that touches `std::env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::types::ClientConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REGION_CODE: &str = "IN";
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration: listen port plus the catalog settings handed to
/// the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog: ClientConfig,
}

impl ServerConfig {
    /// Load from `PORT`, `CATALOG_API_KEY`, `CATALOG_REGION_CODE`, and
    /// `CATALOG_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the API key is missing or a value does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_key = var("CATALOG_API_KEY").ok_or(ConfigError::Missing("CATALOG_API_KEY"))?;
        let region_code = var("CATALOG_REGION_CODE").unwrap_or_else(|| DEFAULT_REGION_CODE.to_owned());
        if region_code.len() != 2 || !region_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid { name: "CATALOG_REGION_CODE", value: region_code });
        }
        let base_url = var("CATALOG_BASE_URL").unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_owned());
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid { name: "CATALOG_BASE_URL", value: base_url });
        }

        Ok(Self {
            port,
            catalog: ClientConfig {
                api_key,
                region_code: region_code.to_ascii_uppercase(),
                base_url: base_url.trim_end_matches('/').to_owned(),
            },
        })
    }
}
