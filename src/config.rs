//! Startup configuration.
//!
//! Two values are required: the backend endpoint and its public key. Both the
//! server binary and the browser bundle refuse to start without them.
use leptos::logging::error;
use thiserror::Error;

pub const BACKEND_URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Where the "chat with us" deep links point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLink {
    pub provider: String,
    pub number: String,
}

impl Default for ChatLink {
    fn default() -> Self {
        Self {
            provider: "https://wa.me".to_string(),
            number: "919840650939".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub anon_key: String,
    pub chat: ChatLink,
}

impl AppConfig {
    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let backend_url = required(BACKEND_URL_VAR)?;
        if !(backend_url.starts_with("https://") || backend_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                var: BACKEND_URL_VAR,
                value: backend_url,
            });
        }
        let anon_key = required(ANON_KEY_VAR)?;

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            anon_key,
            chat: ChatLink::default(),
        })
    }

    /// Values captured when the crate was compiled. This is the only source
    /// available to the browser bundle.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        const BUILD_URL: Option<&str> = option_env!("SUPABASE_URL");
        const BUILD_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

        Self::from_vars(|var| match var {
            BACKEND_URL_VAR => BUILD_URL.map(str::to_string),
            ANON_KEY_VAR => BUILD_KEY.map(str::to_string),
            _ => None,
        })
    }

    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }
}

/// Logs a configuration failure the same way on server and client.
pub fn report(err: &ConfigError) {
    error!("[CONFIG] {}", err);
}
