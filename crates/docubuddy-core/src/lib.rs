//! # DocuBuddy Core
//!
//! Shared foundation for the DocuBuddy workspace: configuration, the error
//! taxonomy, chat message types, and the `CompletionProvider` trait that the
//! rest of the system is wired through.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::DocuBuddyConfig;
pub use error::{DocuBuddyError, Result};
pub use traits::CompletionProvider;
