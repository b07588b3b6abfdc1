//! # DocuBuddy Providers
//!
//! Completion-service implementations. Every supported API is
//! OpenAI-compatible, so a single `OpenAiCompatibleProvider` covers them all;
//! the registry maps a provider name to its endpoint and auth details.
//!
//! The provider is constructed from an explicit config object rather than
//! ambient process-global state, so the rest of the pipeline stays testable
//! with a substitute implementation of `CompletionProvider`.

pub mod openai_compatible;
pub mod registry;

use docubuddy_core::config::DocuBuddyConfig;
use docubuddy_core::error::{DocuBuddyError, Result};
use docubuddy_core::traits::CompletionProvider;

/// Create a provider from configuration.
pub fn create_provider(config: &DocuBuddyConfig) -> Result<Box<dyn CompletionProvider>> {
    let provider_name = config.default_provider.as_str();

    match provider_name {
        // Custom endpoint: "custom:https://my-server.com/v1"
        other if other.starts_with("custom:") => Ok(Box::new(
            openai_compatible::OpenAiCompatibleProvider::custom(other, config)?,
        )),

        // All known OpenAI-compatible providers
        _ => {
            let registry = registry::get_provider_config(provider_name)
                .ok_or_else(|| DocuBuddyError::ProviderNotFound(provider_name.into()))?;
            Ok(Box::new(
                openai_compatible::OpenAiCompatibleProvider::from_registry(registry, config)?,
            ))
        }
    }
}

/// List all available provider names.
pub fn available_providers() -> Vec<&'static str> {
    let mut names = registry::all_provider_names();
    names.push("custom");
    names
}
