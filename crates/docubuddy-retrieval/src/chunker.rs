//! Document chunking and best-section selection.
//!
//! The corpus is a flat file where each section starts at the literal
//! delimiter `"Title:"`. A query is scored against the lowercased title line
//! of every section (never the body) and the single best section wins,
//! provided its score strictly exceeds [`MATCH_THRESHOLD`].

use crate::similarity::Similarity;

/// Literal marker that opens every section.
pub const DELIMITER: &str = "Title:";

/// A winning score must strictly exceed this cutoff. Strict `>` — a score of
/// exactly 0.3 is a miss.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// A titled section of the policy document.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// First line after the delimiter, trimmed.
    pub title: String,
    /// Everything after the title line.
    pub body: String,
    /// The whole fragment, trimmed of leading/trailing whitespace.
    pub raw: String,
}

impl Section {
    /// Section text with the delimiter re-prepended, so downstream consumers
    /// see the original framing: `"Title: <raw>"`.
    pub fn reconstructed(&self) -> String {
        format!("{DELIMITER} {}", self.raw)
    }
}

/// Outcome of retrieval — the sole gate for whether a completion call is made.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// Best section and its similarity score in `(MATCH_THRESHOLD, 1.0]`.
    Matched { section: Section, score: f64 },
    /// Document was readable but nothing scored above threshold.
    NoMatch,
}

/// Split the document on the `"Title:"` delimiter.
///
/// The preamble before the first delimiter is discarded, as are fragments
/// that are empty after trimming. A document without any delimiter yields no
/// sections at all.
pub fn split_sections(text: &str) -> Vec<Section> {
    text.split(DELIMITER)
        .skip(1)
        .filter_map(|fragment| {
            let raw = fragment.trim();
            if raw.is_empty() {
                return None;
            }
            let (title_line, rest) = raw.split_once('\n').unwrap_or((raw, ""));
            Some(Section {
                title: title_line.trim().to_string(),
                body: rest.to_string(),
                raw: raw.to_string(),
            })
        })
        .collect()
}

/// Find the section whose title best matches `query`.
///
/// Scoring lowercases both sides (uniform case-insensitive policy). The best
/// score is tracked with strict `>`, so ties keep the earliest section.
/// Callers must reject empty queries before calling; an empty title line
/// still participates and simply scores low.
pub fn retrieve(document_text: &str, query: &str, scorer: &dyn Similarity) -> QueryResult {
    let query_lower = query.to_lowercase();

    let mut best: Option<(Section, f64)> = None;
    for section in split_sections(document_text) {
        let score = scorer.ratio(&query_lower, &section.title.to_lowercase());
        let best_score = best.as_ref().map_or(0.0, |(_, s)| *s);
        if score > best_score {
            best = Some((section, score));
        }
    }

    match best {
        Some((section, score)) if score > MATCH_THRESHOLD => {
            tracing::debug!("Matched section '{}' (score {:.3})", section.title, score);
            QueryResult::Matched { section, score }
        }
        _ => QueryResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::SequenceRatio;

    const POLICY_DOC: &str = "Title: Refund Policy\nRefunds are processed in 5 days.\nTitle: Leave Policy\nEmployees get 20 days leave.";

    fn run(doc: &str, query: &str) -> QueryResult {
        retrieve(doc, query, &SequenceRatio)
    }

    #[test]
    fn test_exact_title_match() {
        match run(POLICY_DOC, "refund policy") {
            QueryResult::Matched { section, score } => {
                assert_eq!(
                    section.reconstructed(),
                    "Title: Refund Policy\nRefunds are processed in 5 days."
                );
                assert_eq!(score, 1.0);
            }
            QueryResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_unrelated_query_is_no_match() {
        assert_eq!(run(POLICY_DOC, "parking rules"), QueryResult::NoMatch);
    }

    #[test]
    fn test_case_insensitive_scoring() {
        match run(POLICY_DOC, "REFUND POLICY") {
            QueryResult::Matched { score, .. } => assert_eq!(score, 1.0),
            QueryResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_no_delimiters_yields_no_match() {
        let doc = "just some text\nwith no sections at all";
        assert_eq!(run(doc, "refund policy"), QueryResult::NoMatch);
    }

    #[test]
    fn test_preamble_is_discarded() {
        let doc = "Company handbook v3 — do not score me\nTitle: Refund Policy\nDetails.";
        match run(doc, "refund policy") {
            QueryResult::Matched { section, .. } => {
                assert_eq!(section.title, "Refund Policy");
            }
            QueryResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_empty_fragments_are_skipped() {
        let doc = "Title:Title:   \nTitle: Leave Policy\nBody.";
        let sections = split_sections(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Leave Policy");
    }

    #[test]
    fn test_ties_keep_first_section() {
        let doc = "Title: Leave Policy\nFirst copy.\nTitle: Leave Policy\nSecond copy.";
        match run(doc, "leave policy") {
            QueryResult::Matched { section, score } => {
                assert_eq!(score, 1.0);
                assert!(section.body.contains("First copy."));
            }
            QueryResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        /// A scorer that always returns the same value.
        struct Fixed(f64);
        impl Similarity for Fixed {
            fn ratio(&self, _a: &str, _b: &str) -> f64 {
                self.0
            }
        }

        let doc = "Title: Anything\nBody.";
        // Exactly 0.3 must not be selected...
        assert_eq!(
            retrieve(doc, "anything", &Fixed(MATCH_THRESHOLD)),
            QueryResult::NoMatch
        );
        // ...but the smallest excess over it must be.
        match retrieve(doc, "anything", &Fixed(0.30001)) {
            QueryResult::Matched { score, .. } => assert_eq!(score, 0.30001),
            QueryResult::NoMatch => panic!("0.30001 should exceed the threshold"),
        }
    }

    #[test]
    fn test_empty_title_line_participates_without_panic() {
        // Fragment whose first line is blank after the delimiter, body below.
        let doc = "Title:   \nonly body text here\nTitle: Leave Policy\nBody.";
        let sections = split_sections(doc);
        // Trimming eats the blank first line, so the body line becomes the
        // title; scoring it must not panic.
        assert_eq!(sections.len(), 2);
        let _ = run(doc, "leave policy");
    }

    #[test]
    fn test_section_fields() {
        let sections = split_sections(POLICY_DOC);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Refund Policy");
        assert_eq!(sections[0].body, "Refunds are processed in 5 days.");
        assert_eq!(sections[1].title, "Leave Policy");
    }

    #[test]
    fn test_title_only_section_has_empty_body() {
        let sections = split_sections("Title: Dress Code");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Dress Code");
        assert_eq!(sections[0].body, "");
        assert_eq!(sections[0].reconstructed(), "Title: Dress Code");
    }
}
