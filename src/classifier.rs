//! Classifier adapter - wraps any trained "text -> probabilities" model

use std::sync::Arc;

/// Probability per intent tag, in the model's class order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    probabilities: Vec<(String, f64)>,
}

/// Top classifier candidate for a message
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub intent: String,
    pub confidence: f64,
}

/// A trained statistical text classifier
///
/// Given identical normalized text and an unchanged model, the output must
/// be identical. Implementations are shared across threads without locks.
pub trait IntentClassifier: Send + Sync {
    fn predict_proba(&self, normalized: &str) -> Distribution;

    /// Tags the model can emit, in class order
    fn classes(&self) -> Vec<String>;
}

impl Distribution {
    pub fn new(probabilities: Vec<(String, f64)>) -> Self {
        Self { probabilities }
    }

    /// Highest-probability tag; ties go to the earliest class.
    pub fn top(&self) -> Option<Prediction> {
        let mut best: Option<&(String, f64)> = None;
        for entry in &self.probabilities {
            match best {
                Some((_, p)) if entry.1 <= *p => {}
                _ => best = Some(entry),
            }
        }

        best.map(|(intent, confidence)| Prediction {
            intent: intent.clone(),
            confidence: *confidence,
        })
    }

    pub fn get(&self, intent: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|(tag, _)| tag == intent)
            .map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(tag, p)| (tag.as_str(), *p))
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

/// Selects the argmax candidate from the wrapped classifier
#[derive(Clone)]
pub struct ClassifierAdapter {
    model: Arc<dyn IntentClassifier>,
}

impl ClassifierAdapter {
    pub fn new(model: Arc<dyn IntentClassifier>) -> Self {
        Self { model }
    }

    pub fn classify(&self, normalized: &str) -> Distribution {
        self.model.predict_proba(normalized)
    }

    /// Argmax candidate, or `None` for a model with no classes
    pub fn predict(&self, normalized: &str) -> Option<Prediction> {
        self.classify(normalized).top()
    }

    pub fn classes(&self) -> Vec<String> {
        self.model.classes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<(&'static str, f64)>);

    impl IntentClassifier for Fixed {
        fn predict_proba(&self, _normalized: &str) -> Distribution {
            Distribution::new(self.0.iter().map(|(t, p)| (t.to_string(), *p)).collect())
        }

        fn classes(&self) -> Vec<String> {
            self.0.iter().map(|(t, _)| t.to_string()).collect()
        }
    }

    #[test]
    fn test_top_picks_argmax() {
        let dist = Distribution::new(vec![
            ("greeting".to_string(), 0.2),
            ("serum_info".to_string(), 0.7),
            ("goodbye".to_string(), 0.1),
        ]);
        let top = dist.top().unwrap();
        assert_eq!(top.intent, "serum_info");
        assert!((top.confidence - 0.7).abs() < 1e-9);
        assert_eq!(dist.get("goodbye"), Some(0.1));
    }

    #[test]
    fn test_top_ties_go_to_first_class() {
        let dist = Distribution::new(vec![("a".to_string(), 0.5), ("b".to_string(), 0.5)]);
        assert_eq!(dist.top().unwrap().intent, "a");
    }

    #[test]
    fn test_empty_distribution_has_no_top() {
        assert!(Distribution::default().top().is_none());
    }

    #[test]
    fn test_adapter_delegates() {
        let adapter = ClassifierAdapter::new(Arc::new(Fixed(vec![("x", 0.3), ("y", 0.7)])));
        assert_eq!(adapter.predict("anything").unwrap().intent, "y");
        assert_eq!(adapter.classes(), vec!["x".to_string(), "y".to_string()]);
    }
}
