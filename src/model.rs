//! Exported TF-IDF + logistic regression model
//!
//! The trainer fits the vectorizer and classifier offline and exports their
//! parameters as JSON. This module only runs inference over that export.

use crate::classifier::{Distribution, IntentClassifier};
use crate::error::{ResolverError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid regex: word token pattern"));

/// How the vectorizer splits text into features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// Character n-grams inside word boundaries, each word padded with spaces
    CharWb,
    /// Character n-grams over the whole text
    Char,
    /// Word n-grams over tokens of two or more word characters
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    L2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    pub analyzer: Analyzer,
    pub ngram_range: (usize, usize),
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Raw JSON export of a fitted linear text classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub classes: Vec<String>,
    pub vectorizer: VectorizerConfig,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// Validated model ready for inference
#[derive(Debug, Clone)]
pub struct LinearModel {
    config: ModelConfig,
}

impl LinearModel {
    pub fn from_config(config: ModelConfig) -> Result<Self> {
        validate(&config)?;
        info!(
            classes = config.classes.len(),
            features = config.vectorizer.idf.len(),
            analyzer = ?config.vectorizer.analyzer,
            "Loaded intent model"
        );
        Ok(Self { config })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ModelConfig = serde_json::from_str(json)
            .map_err(|e| ResolverError::ModelUnavailable(format!("Failed to parse model: {}", e)))?;
        Self::from_config(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ResolverError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// TF-IDF feature vector as sparse (index, weight) pairs
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let vectorizer = &self.config.vectorizer;

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for ngram in extract_ngrams(text, vectorizer.analyzer, vectorizer.ngram_range) {
            if let Some(&idx) = vectorizer.vocabulary.get(&ngram) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if vectorizer.sublinear_tf {
                    1.0 + (count as f64).ln()
                } else {
                    count as f64
                };
                (idx, tf * vectorizer.idf[idx])
            })
            .collect();
        features.sort_by_key(|(idx, _)| *idx);

        if vectorizer.norm == Some(Norm::L2) {
            let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in &mut features {
                    *w /= norm;
                }
            }
        }

        features
    }

    fn decision_scores(&self, features: &[(usize, f64)]) -> Vec<f64> {
        self.config
            .coef
            .iter()
            .zip(&self.config.intercept)
            .map(|(row, bias)| bias + features.iter().map(|(idx, w)| row[*idx] * w).sum::<f64>())
            .collect()
    }
}

impl IntentClassifier for LinearModel {
    fn predict_proba(&self, normalized: &str) -> Distribution {
        let features = self.transform(normalized);
        let scores = self.decision_scores(&features);

        let probabilities = if scores.len() == 1 && self.config.classes.len() == 2 {
            let positive = sigmoid(scores[0]);
            vec![1.0 - positive, positive]
        } else {
            softmax(&scores)
        };

        Distribution::new(
            self.config
                .classes
                .iter()
                .cloned()
                .zip(probabilities)
                .collect(),
        )
    }

    fn classes(&self) -> Vec<String> {
        self.config.classes.clone()
    }
}

fn validate(config: &ModelConfig) -> Result<()> {
    let invalid = |msg: String| Err(ResolverError::InvalidModel(msg));

    let classes = config.classes.len();
    let features = config.vectorizer.idf.len();
    let (min_n, max_n) = config.vectorizer.ngram_range;

    if classes == 0 {
        return invalid("model has no classes".to_string());
    }
    if min_n == 0 || min_n > max_n {
        return invalid(format!("bad ngram_range ({}, {})", min_n, max_n));
    }

    let rows = config.coef.len();
    let binary = classes == 2 && rows == 1;
    if rows != classes && !binary {
        return invalid(format!("{} coefficient rows for {} classes", rows, classes));
    }
    if config.intercept.len() != rows {
        return invalid(format!(
            "{} intercepts for {} coefficient rows",
            config.intercept.len(),
            rows
        ));
    }
    if let Some(row) = config.coef.iter().find(|row| row.len() != features) {
        return invalid(format!("coefficient row of width {} for {} features", row.len(), features));
    }
    if let Some((ngram, idx)) = config.vectorizer.vocabulary.iter().find(|(_, idx)| **idx >= features) {
        return invalid(format!("vocabulary entry '{}' points at feature {} of {}", ngram, idx, features));
    }

    Ok(())
}

fn extract_ngrams(text: &str, analyzer: Analyzer, (min_n, max_n): (usize, usize)) -> Vec<String> {
    match analyzer {
        Analyzer::CharWb => char_wb_ngrams(text, min_n, max_n),
        Analyzer::Char => char_ngrams(text, min_n, max_n),
        Analyzer::Word => word_ngrams(text, min_n, max_n),
    }
}

fn char_wb_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let mut ngrams = Vec::new();

    for word in text.split_whitespace() {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        let len = padded.len();

        for n in min_n..=max_n {
            // A padded word no longer than n yields itself once, then stops
            if len <= n {
                ngrams.push(padded.iter().collect());
                break;
            }
            for start in 0..=(len - n) {
                ngrams.push(padded[start..start + n].iter().collect());
            }
        }
    }

    ngrams
}

fn char_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let chars: Vec<char> = text.split_whitespace().collect::<Vec<_>>().join(" ").chars().collect();
    let len = chars.len();

    let mut ngrams = Vec::new();
    for n in min_n..=max_n.min(len) {
        for start in 0..=(len - n) {
            ngrams.push(chars[start..start + n].iter().collect());
        }
    }
    ngrams
}

fn word_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let tokens: Vec<&str> = WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect();

    let mut ngrams = Vec::new();
    for n in min_n..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            ngrams.push(window.join(" "));
        }
    }
    ngrams
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
