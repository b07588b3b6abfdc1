//! String-similarity primitive.
//!
//! The scorer is a trait so the exact algorithm can be swapped or tested in
//! isolation from document parsing. The default is the Ratcliff/Obershelp
//! "sequence matcher" ratio: twice the number of matched characters divided
//! by the combined length, where matches come from recursively locating the
//! longest common contiguous block. 1.0 only for equal strings, 0.0 when
//! nothing overlaps.

use std::collections::HashMap;

/// A normalized `[0, 1]` similarity score between two strings.
pub trait Similarity: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Ratcliff/Obershelp sequence-matcher ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatio;

impl Similarity for SequenceRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            // Two empty strings are trivially equal.
            return 1.0;
        }
        let matched = matching_chars(&a, &b);
        2.0 * matched as f64 / total as f64
    }
}

/// Total characters covered by matching blocks, found by recursing on either
/// side of the longest common contiguous block.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + size..], &b[j + size..])
}

/// Longest common contiguous block of `a` and `b` as `(start_a, start_b, len)`.
/// Ties resolve to the earliest position in `a`, then in `b`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b_positions.entry(ch).or_default().push(j);
    }

    let (mut best_i, mut best_j, mut best_size) = (0, 0, 0);
    // run_lengths[j] = length of the common run ending at a[i], b[j]
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate() {
        let mut new_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(ch) {
            for &j in positions {
                let len = if j > 0 {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_runs.insert(j, len);
                if len > best_size {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_size = len;
                }
            }
        }
        run_lengths = new_runs;
    }
    (best_i, best_j, best_size)
}
