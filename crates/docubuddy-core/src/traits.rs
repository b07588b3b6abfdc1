//! Trait seams for external collaborators.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CompletionParams, CompletionResponse, Message};

/// An opaque text-completion service.
///
/// The assistant only ever sees this trait, so tests substitute a fake and
/// the rest of the pipeline stays independent of any real API.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "openrouter").
    fn name(&self) -> &str;

    /// One synchronous round trip: messages in, generated text out.
    /// No internal retry — callers needing resilience wrap this.
    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<CompletionResponse>;

    /// Cheap reachability/credentials check.
    async fn health_check(&self) -> Result<bool>;
}
