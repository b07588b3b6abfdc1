//! Answer normalization.
//!
//! The completion service occasionally returns replies with the first
//! character(s) chopped off ("ur leave balance...") or with the greeting
//! boilerplate it was told to avoid. `normalize` rewrites the known corrupted
//! prefixes and fixes capitalization. Matching is case-insensitive across all
//! rules (the uniform casing policy used throughout DocuBuddy).

/// Known truncated prefixes and their corrected forms, in priority order.
/// At most one rule fires per pass.
const PREFIX_REWRITES: &[(&str, &str)] = &[
    ("ur ", "Your "),
    ("mployees ", "Employees "),
    ("he ", "The "),
    ("efund", "Refund"),
    ("olicy", "Policy"),
];

/// Greeting fragment the model sometimes leads with despite instructions.
const GREETING_PREFIX: &str = "ear employee";

/// Case-insensitive ASCII prefix check that never splits a char boundary.
fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Rewrite known garbled prefixes in a raw model reply and capitalize the
/// first letter. Total function, idempotent: a second pass finds nothing left
/// to rewrite.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    // Drop greeting blocks: everything through the first blank line, repeated
    // until the text no longer opens with the greeting. Without a blank line
    // there is nothing safe to cut, so keep the text.
    while starts_with_ci(&text, GREETING_PREFIX) {
        match text.find("\n\n") {
            Some(idx) => text = text[idx + 2..].trim().to_string(),
            None => break,
        }
    }

    // The remainder can itself start with a corrupted prefix, so the rewrite
    // table always runs. At most one rewrite fires.
    for (wrong, fixed) in PREFIX_REWRITES {
        if starts_with_ci(&text, wrong) {
            text = format!("{}{}", fixed, &text[wrong.len()..]);
            break;
        }
    }

    // Capitalize the first letter if still lowercase; everything else untouched.
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        if first.is_lowercase() {
            text = first.to_uppercase().chain(chars).collect();
        }
    }

    text
}
