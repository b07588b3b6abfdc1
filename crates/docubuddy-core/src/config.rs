//! DocuBuddy configuration system.
//!
//! Loaded from `~/.docubuddy/config.toml` (override with the
//! `DOCUBUDDY_CONFIG` env var). Every field has a default so an empty or
//! missing file yields a working configuration; API keys may also come from
//! provider-specific env vars resolved in the providers crate.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DocuBuddyError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocuBuddyConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_provider")]
    pub default_provider: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

fn default_api_key() -> String { String::new() }
fn default_provider() -> String { "openrouter".into() }
fn default_model() -> String { "openai/gpt-3.5-turbo".into() }
fn default_temperature() -> f32 { 0.7 }
fn default_max_tokens() -> u32 { 512 }

impl Default for DocuBuddyConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            default_provider: default_provider(),
            default_model: default_model(),
            default_temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            document: DocumentConfig::default(),
            gateway: GatewayConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

impl DocuBuddyConfig {
    /// Load config from the default path (~/.docubuddy/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DocuBuddyError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| DocuBuddyError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".docubuddy")
            .join("config.toml")
    }
}

/// Policy document configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Path to the policy document. Re-read on every request, so edits are
    /// visible without a restart.
    #[serde(default = "default_document_path")]
    pub path: String,
}

fn default_document_path() -> String { "company_policies.txt".into() }

impl Default for DocumentConfig {
    fn default() -> Self {
        Self { path: default_document_path() }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 { 5000 }
fn default_host() -> String { "127.0.0.1".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Assistant identity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_name() -> String { "DocuBuddy".into() }
fn default_system_prompt() -> String {
    "You are DocuBuddy, an internal company assistant. \
     Your task is to answer employee questions using the provided documentation. \
     Respond clearly and professionally. Do not include greetings like 'Dear employee', \
     'Hello', or signatures like 'Regards'."
        .into()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            system_prompt: default_system_prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocuBuddyConfig::default();
        assert_eq!(config.default_provider, "openrouter");
        assert_eq!(config.default_model, "openai/gpt-3.5-turbo");
        assert!((config.default_temperature - 0.7).abs() < 0.01);
        assert_eq!(config.document.path, "company_policies.txt");
        assert_eq!(config.identity.name, "DocuBuddy");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            default_provider = "ollama"
            default_model = "llama3.2"
            default_temperature = 0.5

            [document]
            path = "/srv/docs/policies.txt"

            [gateway]
            port = 8080
        "#;

        let config: DocuBuddyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_provider, "ollama");
        assert_eq!(config.default_model, "llama3.2");
        assert_eq!(config.document.path, "/srv/docs/policies.txt");
        assert_eq!(config.gateway.port, 8080);
        // Untouched sections fall back to defaults
        assert_eq!(config.gateway.host, "127.0.0.1");
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: DocuBuddyConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_provider, "openrouter");
        assert_eq!(config.gateway.port, 5000);
        assert!(config.identity.system_prompt.contains("DocuBuddy"));
    }
}
