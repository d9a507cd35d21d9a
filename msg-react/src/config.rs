//! Plugin configuration: `[plugin]` metadata and `[napcat]` gateway connection.
//!
//! Loaded from the plugin's `config.toml`; a missing file means defaults. NAPCAT_HOST,
//! NAPCAT_PORT and NAPCAT_TOKEN override the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// `[plugin]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSection {
    pub name: String,
    pub version: String,
    pub enabled: bool,
}

impl Default for PluginSection {
    fn default() -> Self {
        Self {
            name: "maiplug_message_react".to_string(),
            version: "1.0.0".to_string(),
            enabled: true,
        }
    }
}

/// `[napcat]` section: where the reaction gateway listens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NapcatSection {
    pub host: String,
    pub port: u16,
    /// Sent as the raw `Authorization` header; empty means none.
    pub token: String,
}

impl Default for NapcatSection {
    fn default() -> Self {
        Self {
            host: "napcat".to_string(),
            port: 9999,
            token: String::new(),
        }
    }
}

impl NapcatSection {
    pub fn token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }
}

/// Full plugin config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub plugin: PluginSection,
    pub napcat: NapcatSection,
}

impl PluginConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid plugin config TOML")
    }

    /// Reads `path` (defaults when it does not exist), then applies env overrides.
    /// Call validate() after load to fail fast.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))?
        } else {
            tracing::info!(path = %path.display(), "plugin config not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies NAPCAT_HOST, NAPCAT_PORT and NAPCAT_TOKEN when set.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = env::var("NAPCAT_HOST") {
            self.napcat.host = host;
        }
        if let Ok(port) = env::var("NAPCAT_PORT") {
            self.napcat.port = port
                .trim()
                .parse()
                .with_context(|| format!("NAPCAT_PORT is not a valid port: {}", port))?;
        }
        if let Ok(token) = env::var("NAPCAT_TOKEN") {
            self.napcat.token = token;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.napcat.host.trim().is_empty() {
            anyhow::bail!("napcat.host must not be empty");
        }
        if self.napcat.port == 0 {
            anyhow::bail!("napcat.port must not be 0");
        }
        Ok(())
    }
}
