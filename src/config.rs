//! Server Configuration
//!
//! Read once at startup from environment variables (after an optional `.env`).
//! Only `app_version` reaches request handling; the rest drives binding and
//! CORS.

use regex::Regex;

/// Dev-server origins that are always allowed alongside `FRONTEND_URL`
pub const LOCAL_DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

const DEFAULT_PREVIEW_ORIGIN_PATTERN: &str = r"https://.*\.vercel\.app";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got '{0}'")]
    InvalidPort(String),
    #[error("API_PREFIX must be empty or start with '/', got '{0}'")]
    InvalidPrefix(String),
    #[error("PREVIEW_ORIGIN_PATTERN is not a valid regex: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub app_env: String,
    pub app_port: u16,
    pub frontend_url: String,
    /// Normalized: either empty or `/segment` with no trailing slash
    pub api_prefix: String,
    /// Anchored at both ends, so it must match the whole origin
    pub preview_origin: Regex,
}

impl Settings {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port_raw = get("APP_PORT", "8000");
        let app_port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let api_prefix = normalize_prefix(&get("API_PREFIX", "/api"))?;
        let preview_origin =
            full_match_regex(&get("PREVIEW_ORIGIN_PATTERN", DEFAULT_PREVIEW_ORIGIN_PATTERN))?;

        Ok(Self {
            app_name: get("APP_NAME", "OpenOA API"),
            app_version: get("APP_VERSION", "1.0.0"),
            app_env: get("APP_ENV", "development"),
            app_port,
            frontend_url: get("FRONTEND_URL", "http://localhost:5173"),
            api_prefix,
            preview_origin,
        })
    }

    /// Explicitly listed browser origins
    pub fn allowed_origins(&self) -> Vec<&str> {
        let mut origins = vec![self.frontend_url.as_str()];
        origins.extend(LOCAL_DEV_ORIGINS);
        origins
    }

    /// CORS decision for a request `Origin` header value
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins().contains(&origin) || self.preview_origin.is_match(origin)
    }
}

/// The configured pattern must cover the entire origin, never a substring.
fn full_match_regex(pattern: &str) -> Result<Regex, ConfigError> {
    Ok(Regex::new(&format!("^(?:{pattern})$"))?)
}

fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidPrefix(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
