//! Pattern index - every normalized training phrase and its intent

use crate::normalizer::Normalizer;
use crate::types::Dataset;
use ahash::AHashMap;
use tracing::{info, warn};

/// A training phrase in dataset order, raw and normalized
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPattern {
    pub raw: String,
    pub text: String,
    pub intent: String,
}

/// Read-only mapping from normalized pattern text to intent tag
///
/// When two raw patterns normalize to the same text the later intent wins,
/// and that winner is what every occurrence of the text reports.
#[derive(Debug, Clone, Default)]
pub struct PatternIndex {
    patterns: Vec<IndexedPattern>,
    lookup: AHashMap<String, String>,
}

impl PatternIndex {
    pub fn build(dataset: &Dataset, normalizer: &Normalizer) -> Self {
        let mut entries = Vec::with_capacity(dataset.pattern_count());
        let mut lookup: AHashMap<String, String> = AHashMap::with_capacity(dataset.pattern_count());

        for intent in &dataset.intents {
            for raw in &intent.patterns {
                let text = normalizer.normalize(raw);
                if text.is_empty() {
                    warn!(intent = %intent.tag, pattern = %raw, "Pattern normalizes to empty text, skipping");
                    continue;
                }

                if let Some(previous) = lookup.insert(text.clone(), intent.tag.clone()) {
                    if previous != intent.tag {
                        warn!(
                            pattern = %text,
                            previous = %previous,
                            current = %intent.tag,
                            "Normalized pattern collision, later intent wins"
                        );
                    }
                }
                entries.push((raw.clone(), text));
            }
        }

        let patterns = entries
            .into_iter()
            .filter_map(|(raw, text)| {
                let intent = lookup.get(&text)?.clone();
                Some(IndexedPattern { raw, text, intent })
            })
            .collect::<Vec<_>>();

        info!(
            patterns = patterns.len(),
            unique = lookup.len(),
            "Built pattern index"
        );

        Self { patterns, lookup }
    }

    pub fn intent_for(&self, normalized: &str) -> Option<&str> {
        self.lookup.get(normalized).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Intent;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Intent::new("greeting", &["Halo", "Selamat pagi"], &["Hai!"]),
            Intent::new("serum_info", &["Apa itu serum?", "wkwk"], &["Serum adalah..."]),
        ])
    }

    #[test]
    fn test_build_normalizes_in_order() {
        let index = PatternIndex::build(&dataset(), &Normalizer::new());
        let texts: Vec<&str> = index.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["halo", "selamat pagi", "apa itu serum"]);
        assert_eq!(index.intent_for("apa itu serum"), Some("serum_info"));
        assert_eq!(index.intent_for("Apa itu serum?"), None);
    }

    #[test]
    fn test_raw_form_is_kept() {
        let index = PatternIndex::build(&dataset(), &Normalizer::new());
        let pairs: Vec<(&str, &str)> = index
            .iter()
            .map(|p| (p.raw.as_str(), p.text.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Halo", "halo"),
                ("Selamat pagi", "selamat pagi"),
                ("Apa itu serum?", "apa itu serum"),
            ]
        );
    }

    #[test]
    fn test_empty_patterns_are_skipped() {
        let index = PatternIndex::build(&dataset(), &Normalizer::new());
        assert_eq!(index.len(), 3);
        assert_eq!(index.intent_for(""), None);
    }

    #[test]
    fn test_collision_last_write_wins() {
        let dataset = Dataset::new(vec![
            Intent::new("greeting", &["hai"], &[]),
            Intent::new("small_talk", &["HAIII!!"], &[]),
        ]);
        let index = PatternIndex::build(&dataset, &Normalizer::new());
        assert_eq!(index.len(), 2);
        assert_eq!(index.intent_for("halo"), Some("small_talk"));
        assert!(index.iter().all(|p| p.intent == "small_talk"));
    }

    #[test]
    fn test_empty_dataset() {
        let index = PatternIndex::build(&Dataset::default(), &Normalizer::new());
        assert!(index.is_empty());
    }
}
