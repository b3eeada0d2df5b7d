//! String similarity scores used by the fallback matcher
//!
//! Both scores are symmetric and fall in 0.0-1.0.

use ahash::AHashSet;

/// Character sequence similarity: `2 * LCS / (len(a) + len(b))`
///
/// 1.0 for identical strings, 0.0 when the strings share no character.
pub fn sequence_ratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let lcs_len = longest_common_subsequence(s1, s2);
    let total_len = s1.chars().count() + s2.chars().count();

    (2.0 * lcs_len as f64) / total_len as f64
}

/// Length of the longest common subsequence, in characters
fn longest_common_subsequence(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let n = s2_chars.len();

    // Two rolling rows instead of the full table
    let mut prev = vec![0; n + 1];
    let mut curr = vec![0; n + 1];

    for &a in &s1_chars {
        for j in 1..=n {
            if a == s2_chars[j - 1] {
                curr[j] = prev[j - 1] + 1;
            } else {
                curr[j] = prev[j].max(curr[j - 1]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Whitespace token Jaccard overlap: `|A ∩ B| / |A ∪ B|`
///
/// Returns 0.0 when either side has no tokens.
pub fn token_jaccard(s1: &str, s2: &str) -> f64 {
    let tokens1: AHashSet<&str> = s1.split_whitespace().collect();
    let tokens2: AHashSet<&str> = s2.split_whitespace().collect();

    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }

    let union = tokens1.union(&tokens2).count();
    if union == 0 {
        return 0.0;
    }

    tokens1.intersection(&tokens2).count() as f64 / union as f64
}
