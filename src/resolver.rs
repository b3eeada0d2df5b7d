//! Intent resolver - normalization, classifier, similarity fallback
//!
//! One decision per call, no state carried between calls:
//!
//! 1. normalize the message
//! 2. classifier top probability >= `confidence_threshold` -> accept it
//! 3. else stage A sequence match -> accept the ratio
//! 4. else stage B token overlap -> accept the Jaccard score
//! 5. else `unknown` with the classifier's low probability
//!
//! A confident classifier is never overridden by the fallback.

use crate::classifier::{ClassifierAdapter, IntentClassifier, Prediction};
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::index::PatternIndex;
use crate::matcher::{FallbackMatch, SimilarityMatcher};
use crate::normalizer::Normalizer;
use crate::types::{Dataset, MatchSource, Resolution};
use std::sync::Arc;
use tracing::debug;

/// Classifier stage outcome
#[derive(Debug, Clone, PartialEq)]
enum ClassifierOutcome {
    Accepted(Prediction),
    Deferred { confidence: f64 },
}

/// Shared read-only resolver; safe to call from many threads at once
#[derive(Clone)]
pub struct Resolver {
    normalizer: Normalizer,
    index: Arc<PatternIndex>,
    classifier: ClassifierAdapter,
    matcher: SimilarityMatcher,
    confidence_threshold: f64,
}

impl Resolver {
    /// Build the pattern index; thresholds outside [0, 1] are rejected
    pub fn new(
        dataset: &Dataset,
        classifier: Arc<dyn IntentClassifier>,
        normalizer: Normalizer,
        config: &ResolverConfig,
    ) -> Result<Self> {
        config.validate()?;
        let index = PatternIndex::build(dataset, &normalizer);
        Ok(Self {
            normalizer,
            index: Arc::new(index),
            classifier: ClassifierAdapter::new(classifier),
            matcher: SimilarityMatcher::new(config.sequence_threshold, config.overlap_threshold),
            confidence_threshold: config.confidence_threshold,
        })
    }

    pub fn normalize(&self, message: &str) -> String {
        self.normalizer.normalize(message)
    }

    pub fn index(&self) -> &PatternIndex {
        &self.index
    }

    pub fn classifier(&self) -> &ClassifierAdapter {
        &self.classifier
    }

    pub fn resolve(&self, message: &str) -> Resolution {
        let normalized = self.normalize(message);

        let confidence = match self.classify(&normalized) {
            ClassifierOutcome::Accepted(prediction) => {
                debug!(
                    intent = %prediction.intent,
                    confidence = prediction.confidence,
                    "Classifier accepted"
                );
                return Resolution::new(
                    prediction.intent,
                    prediction.confidence,
                    MatchSource::Classifier,
                );
            }
            ClassifierOutcome::Deferred { confidence } => confidence,
        };

        match self.matcher.find(&normalized, &self.index) {
            FallbackMatch::Sequence(hit) => {
                debug!(intent = %hit.intent, score = hit.score, pattern = %hit.pattern, "Sequence fallback matched");
                Resolution::new(hit.intent, hit.score, MatchSource::SequenceSimilarity)
            }
            FallbackMatch::TokenOverlap(hit) => {
                debug!(intent = %hit.intent, score = hit.score, pattern = %hit.pattern, "Token overlap fallback matched");
                Resolution::new(hit.intent, hit.score, MatchSource::TokenOverlap)
            }
            FallbackMatch::NoMatch => {
                debug!(confidence, normalized = %normalized, "No intent matched");
                Resolution::unknown(confidence)
            }
        }
    }

    fn classify(&self, normalized: &str) -> ClassifierOutcome {
        match self.classifier.predict(normalized) {
            Some(prediction) if prediction.confidence >= self.confidence_threshold => {
                ClassifierOutcome::Accepted(prediction)
            }
            Some(prediction) => ClassifierOutcome::Deferred {
                confidence: prediction.confidence,
            },
            None => ClassifierOutcome::Deferred { confidence: 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Distribution;
    use crate::error::ResolverError;
    use crate::types::{Intent, UNKNOWN_INTENT};

    /// Returns the same distribution for every input
    struct FixedClassifier(Vec<(&'static str, f64)>);

    impl IntentClassifier for FixedClassifier {
        fn predict_proba(&self, _normalized: &str) -> Distribution {
            Distribution::new(self.0.iter().map(|(t, p)| (t.to_string(), *p)).collect())
        }

        fn classes(&self) -> Vec<String> {
            self.0.iter().map(|(t, _)| t.to_string()).collect()
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Intent::new("greeting", &["halo"], &["Hai, ada yang bisa saya bantu?"]),
            Intent::new("serum_info", &["Apa itu serum?"], &["Serum adalah produk konsentrat."]),
            Intent::new("price", &["harga serum wajah murah"], &["Harga mulai 50rb."]),
        ])
    }

    fn resolver(distribution: Vec<(&'static str, f64)>) -> Resolver {
        Resolver::new(
            &dataset(),
            Arc::new(FixedClassifier(distribution)),
            Normalizer::new(),
            &ResolverConfig::default(),
        )
        .unwrap()
    }

    fn unsure() -> Vec<(&'static str, f64)> {
        vec![("greeting", 0.1), ("serum_info", 0.05), ("price", 0.05)]
    }

    #[test]
    fn test_confident_classifier_short_circuits() {
        let resolver = resolver(vec![("greeting", 0.2), ("serum_info", 0.7), ("price", 0.1)]);
        // Exact pattern for another intent, yet the classifier is confident
        let result = resolver.resolve("halo");
        assert_eq!(result.intent, "serum_info");
        assert!((result.confidence - 0.7).abs() < 1e-9);
        assert_eq!(result.source, MatchSource::Classifier);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let resolver = resolver(vec![("greeting", 0.15), ("serum_info", 0.1)]);
        let result = resolver.resolve("zzz");
        assert_eq!(result.intent, "greeting");
        assert_eq!(result.confidence, 0.15);
        assert_eq!(result.source, MatchSource::Classifier);
    }

    #[test]
    fn test_low_confidence_falls_back_to_exact_pattern() {
        let resolver = resolver(unsure());
        let result = resolver.resolve("  APA   itu SERUMMM ?? ");
        assert_eq!(result.intent, "serum_info");
        assert!((result.confidence - 1.0).abs() < 1e-9);
        assert_eq!(result.source, MatchSource::SequenceSimilarity);
    }

    #[test]
    fn test_low_confidence_falls_back_to_token_overlap() {
        let resolver = resolver(unsure());
        let result = resolver.resolve("murah wajah serum harga dong kak");
        assert_eq!(result.intent, "price");
        assert_eq!(result.source, MatchSource::TokenOverlap);
    }

    #[test]
    fn test_disjoint_message_is_unknown() {
        let resolver = resolver(unsure());
        let result = resolver.resolve("xyz qwv");
        assert_eq!(result.intent, UNKNOWN_INTENT);
        assert!((result.confidence - 0.1).abs() < 1e-9);
        assert_eq!(result.source, MatchSource::Unmatched);
    }

    #[test]
    fn test_empty_message_is_unknown() {
        let resolver = resolver(unsure());
        let result = resolver.resolve("?!?!");
        assert!(result.is_unknown());
    }

    #[test]
    fn test_classifier_without_classes_is_unknown() {
        let resolver = resolver(vec![]);
        let result = resolver.resolve("xyz");
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_elongated_greeting_resolves_through_alias() {
        // "haiii" -> "hai" -> slang alias "halo", an exact pattern
        let resolver = resolver(unsure());
        let result = resolver.resolve("haiii");
        assert_eq!(result.intent, "greeting");
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = resolver(unsure());
        for message in ["haiii", "apa itu serm", "xyz", ""] {
            assert_eq!(resolver.resolve(message), resolver.resolve(message));
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ResolverConfig {
            confidence_threshold: 0.5,
            sequence_threshold: 0.99,
            overlap_threshold: 0.99,
        };
        let resolver = Resolver::new(
            &dataset(),
            Arc::new(FixedClassifier(vec![("greeting", 0.4), ("price", 0.3)])),
            Normalizer::new(),
            &config,
        )
        .unwrap();
        let result = resolver.resolve("apa itu serm");
        assert!(result.is_unknown());
        assert!((result.confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_nan_threshold_is_rejected() {
        let config = ResolverConfig {
            confidence_threshold: f64::NAN,
            ..ResolverConfig::default()
        };
        let result = Resolver::new(
            &dataset(),
            Arc::new(FixedClassifier(unsure())),
            Normalizer::new(),
            &config,
        );
        assert!(matches!(result, Err(ResolverError::Config(_))));
    }
}
