//! DocuBuddy error taxonomy.
//!
//! Four conditions matter at the HTTP boundary and each maps to its own
//! human-readable answer there: an empty question (handled before any error
//! is raised), a missing policy document (`DocumentMissing`), a section that
//! scores below threshold (not an error — see `QueryResult::NoMatch` in the
//! retrieval crate), and a failed completion call (`Http`/`Provider`).

use thiserror::Error;

/// Convenience result type used across the workspace.
pub type Result<T> = std::result::Result<T, DocuBuddyError>;

#[derive(Error, Debug)]
pub enum DocuBuddyError {
    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// The policy document is missing or unreadable. Distinct from a query
    /// that simply matches no section.
    #[error("Internal document not found: {0}")]
    DocumentMissing(String),

    /// Transport-level failure talking to the completion API.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The completion API answered with an error.
    #[error("Provider error: {0}")]
    Provider(String),

    /// No API key configured for a provider that requires one.
    #[error("API key missing for provider: {0}")]
    ApiKeyMissing(String),

    /// Unknown provider name in configuration.
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
