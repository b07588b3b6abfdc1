//! Policy document source.

use std::path::PathBuf;

use docubuddy_core::error::{DocuBuddyError, Result};

/// A named readable text resource holding the policy corpus.
///
/// The file is re-read on every call — there is no cache, so edits to the
/// document are visible on the next request without a restart. A missing or
/// unreadable file is `DocumentMissing`, which the gateway surfaces as a
/// distinct "documentation unavailable" answer rather than a no-match.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    path: PathBuf,
}

impl DocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full document text.
    pub fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::warn!("Policy document unreadable at {}: {e}", self.path.display());
            DocuBuddyError::DocumentMissing(self.path.display().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_existing_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Title: Leave Policy\nEmployees get 20 days leave.").unwrap();

        let source = DocumentSource::new(file.path());
        let text = source.read().unwrap();
        assert!(text.starts_with("Title: Leave Policy"));
    }

    #[test]
    fn test_missing_document_is_distinct_error() {
        let source = DocumentSource::new("/nonexistent/company_policies.txt");
        match source.read() {
            Err(DocuBuddyError::DocumentMissing(path)) => {
                assert!(path.contains("company_policies.txt"));
            }
            other => panic!("expected DocumentMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_reread_sees_updates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.txt");
        std::fs::write(&path, "Title: Old\nv1").unwrap();

        let source = DocumentSource::new(&path);
        assert!(source.read().unwrap().contains("Old"));

        std::fs::write(&path, "Title: New\nv2").unwrap();
        assert!(source.read().unwrap().contains("New"));
    }
}
