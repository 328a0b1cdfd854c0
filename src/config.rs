//! Client configuration resolved at build time.
//!
//! The browser has no process environment, so values are baked in from the
//! build environment via `option_env!`.
//!
//! - `OFFICEBOARD_API_BASE_URL`: remote auth/role service, default `http://localhost:8000`
//! - `OFFICEBOARD_TOKEN_KEY`: storage key of the session token, default `token`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("OFFICEBOARD_API_BASE_URL"), option_env!("OFFICEBOARD_TOKEN_KEY"))
    }

    /// Build config from raw values; blank or missing values use defaults.
    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = non_blank(token_storage_key)
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
            .to_owned();
        Self { api_base_url, token_storage_key }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
