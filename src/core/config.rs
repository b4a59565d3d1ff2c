//! Configuration management for the MCP server.
//!
//! All configuration comes from environment variables (optionally via a
//! `.env` file). The upstream access token is the one fatal requirement:
//! without it the process refuses to start.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Default upstream API base.
pub const DEFAULT_API_BASE: &str = "https://api.esa.io";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream esa.io API configuration.
    pub esa: EsaConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Upstream API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct EsaConfig {
    /// API base URL. Overridable so tests can point at a local server.
    pub base_url: String,

    /// Personal access token sent as the bearer credential on every call.
    pub access_token: String,

    /// Team used when a tool invocation does not name one.
    pub default_team: Option<String>,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for EsaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsaConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("default_team", &self.default_team)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `ESA_API_TOKEN` is required; everything else has a default.
    /// `DEFAULT_TEAM_NAME` supplies the team for invocations that omit one,
    /// and `ESA_API_BASE` overrides the upstream base URL.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let access_token = std::env::var("ESA_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config("ESA_API_TOKEN environment variable is not set"))?;

        let base_url =
            std::env::var("ESA_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let default_team = std::env::var("DEFAULT_TEAM_NAME")
            .ok()
            .filter(|t| !t.is_empty());

        let name = std::env::var("MCP_SERVER_NAME").unwrap_or_else(|_| "esa".to_string());
        let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server: ServerConfig {
                name,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            esa: EsaConfig {
                base_url,
                access_token,
                default_team,
            },
            logging: LoggingConfig { level },
        })
    }
}
