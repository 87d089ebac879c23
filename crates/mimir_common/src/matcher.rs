//! Fuzzy question matching.
//!
//! Similarity is the matching-blocks ratio: find the longest common
//! contiguous block, recurse on the pieces either side of it, and score
//! 2*M/T where M is the total matched length and T the combined length.
//! Symmetric, range [0, 1].

use tracing::debug;

use crate::normalize::TextNormalizer;

/// Tuning knobs for candidate selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Upper bound on candidates returned per query.
    pub max_matches: usize,
    /// Minimum similarity score a candidate must reach.
    ///
    /// The default of 0.0 accepts any candidate, so "no match" only
    /// happens with an empty candidate list.
    pub cutoff: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_matches: 3,
            cutoff: 0.0,
        }
    }
}

/// Similarity between `a` and `b` in [0, 1].
///
/// Identical strings score 1.0 (including two empty strings); strings
/// with no characters in common score 0.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total length of the matching contiguous blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block; earliest position wins ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j + 1] = length of the common suffix ending at a[i - 1], b[j]
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = row;
    }

    best
}

/// Return up to `config.max_matches` candidates scoring at least
/// `config.cutoff` against `query`, best first, in *normalized* form.
///
/// Both sides are normalized before scoring. Equal scores keep candidate
/// order, so the first-seen candidate wins a tie.
pub fn find_close_matches(
    query: &str,
    candidates: &[&str],
    normalizer: &TextNormalizer,
    config: &MatcherConfig,
) -> Vec<String> {
    let query = normalizer.normalize(query);

    let mut scored: Vec<(String, f64)> = candidates
        .iter()
        .map(|candidate| {
            let normalized = normalizer.normalize(candidate);
            let score = similarity_ratio(&query, &normalized);
            debug!("candidate {:?} scored {:.3}", normalized, score);
            (normalized, score)
        })
        .filter(|(_, score)| *score >= config.cutoff)
        .collect();

    // Stable sort keeps store order among equal scores.
    scored.sort_by(|x, y| y.1.total_cmp(&x.1));
    scored.truncate(config.max_matches);
    scored.into_iter().map(|(normalized, _)| normalized).collect()
}

/// Best match for `query`, or `None` when no candidate qualifies.
pub fn find_best_match(
    query: &str,
    candidates: &[&str],
    normalizer: &TextNormalizer,
    config: &MatcherConfig,
) -> Option<String> {
    find_close_matches(query, candidates, normalizer, config)
        .into_iter()
        .next()
}
