//! Client configuration resolved at compile time.
//!
//! A WASM bundle has no process environment, so values are baked in with
//! `option_env!` when the crate is built. The parsing helpers take
//! `Option<&str>` so defaults can be exercised in unit tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API origin. Empty means same-origin relative paths.
pub const DEFAULT_API_BASE_URL: &str = "";
/// Default `localStorage` key holding the session token.
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
/// Default console log level for the browser build.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build typed config from build-time environment variables.
    ///
    /// Optional:
    /// - `RECIPE_API_BASE_URL`: API origin, default same-origin
    /// - `RECIPE_TOKEN_STORAGE_KEY`: storage key, default `token`
    /// - `RECIPE_LOG_LEVEL`: `error` to `trace`, default `info`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("RECIPE_API_BASE_URL"), option_env!("RECIPE_TOKEN_STORAGE_KEY"))
            .with_log_level(option_env!("RECIPE_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Self {
        Self {
            api_base_url: parse_base_url(api_base_url),
            token_storage_key: parse_storage_key(token_storage_key),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    #[must_use]
    pub fn with_log_level(mut self, raw: Option<&str>) -> Self {
        self.log_level = parse_log_level(raw);
        self
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn parse_storage_key(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(key) if !key.is_empty() => key.to_owned(),
        _ => DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}
