//! Text normalization for noisy informal input
//!
//! Stages run in a fixed order: case folding, leetspeak, character stripping,
//! elongation collapse, slang substitution, whitespace cleanup and an optional
//! stemming pass. Every stage is total: garbage in yields empty text out.

use crate::lexicon::{LEET, SLANG};
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

static NON_CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9\s]").expect("Invalid regex: non-canonical character class")
});

/// Morphological root-form reduction supplied by the deployment
///
/// Receives fully normalized text and returns its stemmed form. The
/// normalizer works without one, only with weaker matching.
pub trait Stemmer: Send + Sync {
    fn stem(&self, text: &str) -> String;
}

/// Canonicalizes user messages and training patterns alike
#[derive(Clone, Default)]
pub struct Normalizer {
    stemmer: Option<Arc<dyn Stemmer>>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stemmer", &self.stemmer.is_some())
            .finish()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self { stemmer: None }
    }

    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            stemmer: Some(stemmer),
        }
    }

    pub fn has_stemmer(&self) -> bool {
        self.stemmer.is_some()
    }

    /// Case folding is only guaranteed for ASCII letters. Non-ASCII letters
    /// are dropped after lowercasing, so `STRASSE` and `straße` differ.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        let text = replace_leet(&text);
        let text = NON_CANONICAL.replace_all(&text, "");
        let text = collapse_repeats(&text);
        let text = substitute_slang(&text);
        let text = collapse_whitespace(&text);

        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&text).trim().to_string(),
            None => text,
        }
    }
}

/// Normalize without a stemmer; see [`Normalizer::normalize`]
pub fn normalize(text: &str) -> String {
    Normalizer::new().normalize(text)
}

/// Single-pass character substitution; rule order is irrelevant.
pub fn replace_leet(text: &str) -> String {
    text.chars()
        .map(|c| LEET.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Collapse runs of three or more identical characters to one.
///
/// Runs of exactly two are kept so legitimate doubled letters survive.
pub fn collapse_repeats(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut j = i + 1;
        while j < chars.len() && chars[j] == c {
            j += 1;
        }

        let run = if j - i >= 3 { 1 } else { j - i };
        for _ in 0..run {
            out.push(c);
        }
        i = j;
    }

    out
}

/// Replace each whitespace token through the slang table, dropping tokens
/// that map to the empty string. Replacements are not substituted again.
pub fn substitute_slang(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|token| match SLANG.get(token) {
            Some(replacement) if replacement.is_empty() => None,
            Some(replacement) => Some(*replacement),
            None => Some(token),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
