//! # DocuBuddy Assistant
//!
//! The answer pipeline: read the policy document, retrieve the best-matching
//! section, assemble the prompt, call the completion provider, and normalize
//! the reply. Stateless across requests — the document is re-read and
//! re-scored every time.

pub mod normalize;
pub mod prompt;

use docubuddy_core::config::DocuBuddyConfig;
use docubuddy_core::error::Result;
use docubuddy_core::traits::CompletionProvider;
use docubuddy_core::types::CompletionParams;
use docubuddy_retrieval::{DocumentSource, QueryResult, SequenceRatio, Similarity, retrieve};

/// Outcome of answering a question.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Normalized answer text from the completion service.
    Answer(String),
    /// The document was readable but no section matched the question.
    NoMatch,
}

/// The DocuBuddy assistant — answers employee questions from the policy doc.
pub struct Assistant {
    config: DocuBuddyConfig,
    provider: Box<dyn CompletionProvider>,
    source: DocumentSource,
    scorer: Box<dyn Similarity>,
}

impl Assistant {
    /// Create an assistant with the default sequence-matcher scorer.
    pub fn new(config: DocuBuddyConfig, provider: Box<dyn CompletionProvider>) -> Self {
        let source = DocumentSource::new(&config.document.path);
        Self {
            config,
            provider,
            source,
            scorer: Box::new(SequenceRatio),
        }
    }

    /// Swap in a different similarity scorer.
    pub fn with_scorer(mut self, scorer: Box<dyn Similarity>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Provider name, for startup logging.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Answer a question.
    ///
    /// `question` must be non-empty after trimming — the gateway short-circuits
    /// empty input before calling. Errors surface the two hard failures:
    /// `DocumentMissing` and provider/transport errors. A below-threshold
    /// query is `Reply::NoMatch`, not an error.
    pub async fn answer(&self, question: &str) -> Result<Reply> {
        let document_text = self.source.read()?;

        let (section, score) =
            match retrieve(&document_text, question, self.scorer.as_ref()) {
                QueryResult::Matched { section, score } => (section, score),
                QueryResult::NoMatch => return Ok(Reply::NoMatch),
            };
        tracing::info!(
            "Retrieved section '{}' for question (score {:.3})",
            section.title,
            score
        );

        let messages = prompt::build_messages(
            &self.config.identity,
            &section.reconstructed(),
            question,
        );
        let params = CompletionParams {
            model: self.config.default_model.clone(),
            temperature: self.config.default_temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self.provider.complete(&messages, &params).await?;
        let raw = response.content.unwrap_or_default();
        tracing::debug!("Raw completion reply: {raw}");
        if let Some(usage) = response.usage {
            tracing::debug!(
                "Completion usage: {} prompt + {} completion = {} tokens",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        Ok(Reply::Answer(normalize::normalize(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docubuddy_core::error::DocuBuddyError;
    use docubuddy_core::types::{CompletionResponse, Message, Role};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    const POLICY_DOC: &str = "Title: Refund Policy\nRefunds are processed in 5 days.\nTitle: Leave Policy\nEmployees get 20 days leave.";

    /// Canned provider that records the messages it was given.
    struct FakeProvider {
        reply: String,
        seen: Arc<Mutex<Vec<Message>>>,
    }

    impl FakeProvider {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        async fn complete(
            &self,
            messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<CompletionResponse> {
            self.seen.lock().unwrap().extend(messages.iter().cloned());
            Ok(CompletionResponse {
                content: Some(self.reply.clone()),
                finish_reason: Some("stop".into()),
                usage: None,
            })
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
    }

    /// Provider that always fails, for the error path.
    struct BrokenProvider;

    #[async_trait]
    impl CompletionProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _params: &CompletionParams,
        ) -> Result<CompletionResponse> {
            Err(DocuBuddyError::Provider("service melted down".into()))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(false)
        }
    }

    fn config_for(path: &std::path::Path) -> DocuBuddyConfig {
        DocuBuddyConfig {
            document: docubuddy_core::config::DocumentConfig {
                path: path.display().to_string(),
            },
            ..Default::default()
        }
    }

    fn write_doc(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{text}").unwrap();
        file
    }

    #[tokio::test]
    async fn test_matched_question_is_answered_and_normalized() {
        let doc = write_doc(POLICY_DOC);
        let assistant = Assistant::new(
            config_for(doc.path()),
            Box::new(FakeProvider::new("ur leave balance resets every January.")),
        );

        let reply = assistant.answer("leave policy").await.unwrap();
        assert_eq!(
            reply,
            Reply::Answer("Your leave balance resets every January.".into())
        );
    }

    #[tokio::test]
    async fn test_prompt_carries_section_and_question() {
        let doc = write_doc(POLICY_DOC);
        let provider = FakeProvider::new("Refunds are processed in 5 days.");
        let seen_handle = provider.seen.clone();
        let assistant = Assistant::new(config_for(doc.path()), Box::new(provider));

        assistant.answer("refund policy").await.unwrap();

        let seen = seen_handle.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].role, Role::System);
        assert!(seen[1].content.contains("Title: Refund Policy\nRefunds are processed in 5 days."));
        assert_eq!(seen[2].role, Role::User);
        assert_eq!(seen[2].content, "refund policy");
    }

    #[tokio::test]
    async fn test_unrelated_question_is_no_match_without_completion_call() {
        let doc = write_doc(POLICY_DOC);
        let assistant = Assistant::new(
            config_for(doc.path()),
            Box::new(BrokenProvider), // would error if ever called
        );

        let reply = assistant.answer("parking rules").await.unwrap();
        assert_eq!(reply, Reply::NoMatch);
    }

    #[tokio::test]
    async fn test_missing_document_is_surfaced() {
        let config = DocuBuddyConfig {
            document: docubuddy_core::config::DocumentConfig {
                path: "/nonexistent/company_policies.txt".into(),
            },
            ..Default::default()
        };
        let assistant = Assistant::new(config, Box::new(FakeProvider::new("unused")));

        let err = assistant.answer("refund policy").await.unwrap_err();
        assert!(matches!(err, DocuBuddyError::DocumentMissing(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let doc = write_doc(POLICY_DOC);
        let assistant = Assistant::new(config_for(doc.path()), Box::new(BrokenProvider));

        let err = assistant.answer("refund policy").await.unwrap_err();
        assert!(matches!(err, DocuBuddyError::Provider(_)));
    }
}
