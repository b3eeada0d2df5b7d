//! Similarity fallback - fuzzy matching of a message against known patterns
//!
//! Only consulted when the classifier is unsure. Stage A scores character
//! sequence similarity; stage B, tried only when A finds nothing, scores
//! token overlap. Each stage has its own acceptance floor.

use crate::index::PatternIndex;
use crate::similarity::{sequence_ratio, token_jaccard};
use serde::{Deserialize, Serialize};

/// Default floor for stage A
pub const SEQUENCE_THRESHOLD: f64 = 0.6;
/// Default floor for stage B
pub const OVERLAP_THRESHOLD: f64 = 0.4;

/// Best-scoring pattern found by a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternHit {
    pub intent: String,
    /// Training phrase as written in the dataset
    pub raw: String,
    /// Normalized form the score was computed against
    pub pattern: String,
    pub score: f64,
}

/// Outcome of the fallback, one variant per stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum FallbackMatch {
    Sequence(PatternHit),
    TokenOverlap(PatternHit),
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityMatcher {
    sequence_threshold: f64,
    overlap_threshold: f64,
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(SEQUENCE_THRESHOLD, OVERLAP_THRESHOLD)
    }
}

impl SimilarityMatcher {
    pub fn new(sequence_threshold: f64, overlap_threshold: f64) -> Self {
        Self {
            sequence_threshold,
            overlap_threshold,
        }
    }

    /// Run stage A, then stage B, against normalized input
    pub fn find(&self, normalized: &str, index: &PatternIndex) -> FallbackMatch {
        if let Some(hit) = self.best_sequence_match(normalized, index) {
            return FallbackMatch::Sequence(hit);
        }
        if let Some(hit) = self.best_overlap_match(normalized, index) {
            return FallbackMatch::TokenOverlap(hit);
        }
        FallbackMatch::NoMatch
    }

    /// Stage A: highest sequence ratio, accepted at or above its floor
    pub fn best_sequence_match(&self, normalized: &str, index: &PatternIndex) -> Option<PatternHit> {
        best_above(index, self.sequence_threshold, |pattern| {
            sequence_ratio(normalized, pattern)
        })
    }

    /// Stage B: highest token Jaccard, accepted at or above its floor
    pub fn best_overlap_match(&self, normalized: &str, index: &PatternIndex) -> Option<PatternHit> {
        if normalized.split_whitespace().next().is_none() {
            return None;
        }
        best_above(index, self.overlap_threshold, |pattern| {
            token_jaccard(normalized, pattern)
        })
    }
}

/// Scan in dataset order; the first pattern reaching the maximum wins.
fn best_above<F>(index: &PatternIndex, threshold: f64, score: F) -> Option<PatternHit>
where
    F: Fn(&str) -> f64,
{
    let mut best: Option<PatternHit> = None;
    let mut best_score = 0.0;

    for entry in index.iter() {
        let s = score(&entry.text);
        if s > best_score && s >= threshold {
            best_score = s;
            best = Some(PatternHit {
                intent: entry.intent.clone(),
                raw: entry.raw.clone(),
                pattern: entry.text.clone(),
                score: s,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::Normalizer;
    use crate::types::{Dataset, Intent};

    fn index() -> PatternIndex {
        let dataset = Dataset::new(vec![
            Intent::new("greeting", &["halo", "selamat pagi"], &[]),
            Intent::new("serum_info", &["apa itu serum", "fungsi serum wajah"], &[]),
            Intent::new("price", &["harga serum wajah murah", "berapa harga toner"], &[]),
        ]);
        PatternIndex::build(&dataset, &Normalizer::new())
    }

    #[test]
    fn test_exact_pattern_hits_stage_a() {
        match SimilarityMatcher::default().find("apa itu serum", &index()) {
            FallbackMatch::Sequence(hit) => {
                assert_eq!(hit.intent, "serum_info");
                assert_eq!(hit.raw, "apa itu serum");
                assert!((hit.score - 1.0).abs() < 1e-9);
            }
            other => panic!("Expected sequence match, got {:?}", other),
        }
    }

    #[test]
    fn test_typo_hits_stage_a() {
        match SimilarityMatcher::default().find("apa itu serm", &index()) {
            FallbackMatch::Sequence(hit) => assert_eq!(hit.intent, "serum_info"),
            other => panic!("Expected sequence match, got {:?}", other),
        }
    }

    #[test]
    fn test_reordered_words_hit_stage_b() {
        // Sequence similarity stays low for a long reordered message, the token set matches
        let input = "murah wajah serum harga dong kak";
        let matcher = SimilarityMatcher::default();
        assert!(matcher.best_sequence_match(input, &index()).is_none());
        match matcher.find(input, &index()) {
            FallbackMatch::TokenOverlap(hit) => {
                assert_eq!(hit.intent, "price");
                assert!((hit.score - 4.0 / 6.0).abs() < 1e-9);
            }
            other => panic!("Expected token overlap match, got {:?}", other),
        }
    }

    #[test]
    fn test_disjoint_input_has_no_match() {
        assert_eq!(
            SimilarityMatcher::default().find("xyz qwv", &index()),
            FallbackMatch::NoMatch
        );
    }

    #[test]
    fn test_empty_input_has_no_match() {
        assert_eq!(
            SimilarityMatcher::default().find("", &index()),
            FallbackMatch::NoMatch
        );
    }

    #[test]
    fn test_tie_goes_to_first_pattern() {
        let dataset = Dataset::new(vec![
            Intent::new("first", &["serum a"], &[]),
            Intent::new("second", &["serum b"], &[]),
        ]);
        let index = PatternIndex::build(&dataset, &Normalizer::new());
        let hit = SimilarityMatcher::default()
            .best_sequence_match("serum c", &index)
            .unwrap();
        assert_eq!(hit.intent, "first");
    }

    fn index_of(patterns: &[(&str, &str)]) -> PatternIndex {
        let intents = patterns
            .iter()
            .map(|(tag, pattern)| Intent::new(*tag, &[*pattern], &[]))
            .collect();
        PatternIndex::build(&Dataset::new(intents), &Normalizer::new())
    }

    #[test]
    fn test_sequence_floor_is_inclusive() {
        // LCS 3 over 10 characters: exactly 0.6
        let index = index_of(&[("letters", "abcde")]);
        match SimilarityMatcher::default().find("abcvw", &index) {
            FallbackMatch::Sequence(hit) => {
                assert_eq!(hit.intent, "letters");
                assert_eq!(hit.score, 0.6);
            }
            other => panic!("Expected sequence match, got {:?}", other),
        }
    }

    #[test]
    fn test_overlap_floor_is_inclusive() {
        // 2 shared tokens out of 5: exactly 0.4, sequence ratio 14/26
        let index = index_of(&[("words", "bar foo pxa qxb rxc")]);
        let matcher = SimilarityMatcher::default();
        assert!(matcher.best_sequence_match("bar foo", &index).is_none());
        match matcher.find("bar foo", &index) {
            FallbackMatch::TokenOverlap(hit) => {
                assert_eq!(hit.intent, "words");
                assert_eq!(hit.score, 0.4);
            }
            other => panic!("Expected token overlap match, got {:?}", other),
        }
    }

    #[test]
    fn test_overlap_tie_goes_to_first_pattern() {
        // Both patterns share {serum, wajah}: 2/5 each, neither passes stage A
        let index = index_of(&[
            ("dry_skin", "serum wajah kering"),
            ("oily_skin", "serum wajah berminyak"),
        ]);
        match SimilarityMatcher::default().find("kak dong wajah serum", &index) {
            FallbackMatch::TokenOverlap(hit) => {
                assert_eq!(hit.intent, "dry_skin");
                assert_eq!(hit.score, 0.4);
            }
            other => panic!("Expected token overlap match, got {:?}", other),
        }
    }
}
