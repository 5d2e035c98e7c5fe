use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Runtime configuration, sourced from environment variables.
///
/// | Variable     | Default        | Meaning                               |
/// |--------------|----------------|---------------------------------------|
/// | `LISTEN`     | `0.0.0.0:8080` | Socket address the server binds to    |
/// | `RUST_LOG`   | `info`         | Tracing filter                        |
/// | `LOG_FORMAT` | `text`         | Log output format (`text` or `json`)  |
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Reads configuration from the process environment. Unset or blank
    /// variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            listen_addr: env_or("LISTEN", DEFAULT_LISTEN),
            log_level: env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_format: env_or("LOG_FORMAT", DEFAULT_LOG_FORMAT).to_ascii_lowercase(),
        }
    }

    /// Rejects values that would otherwise only fail later, at bind or
    /// logger setup.
    pub fn validate(&self) -> Result<()> {
        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be a valid socket address, got '{}'",
                self.listen_addr
            )
        })?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
