//! Resolver core - intent resolution for informal chat messages
//!
//! Normalizes noisy input (slang, leetspeak, elongation), asks a trained
//! classifier for the intent, and falls back to fuzzy matching against the
//! known training phrases when the classifier is unsure.

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod index;
pub mod lexicon;
pub mod matcher;
pub mod model;
pub mod normalizer;
pub mod resolver;
pub mod responses;
pub mod similarity;
pub mod types;

pub use classifier::{ClassifierAdapter, Distribution, IntentClassifier, Prediction};
pub use config::{EngineConfig, ResolverConfig};
pub use engine::ChatEngine;
pub use error::{ResolverError, Result};
pub use index::{IndexedPattern, PatternIndex};
pub use matcher::{FallbackMatch, PatternHit, SimilarityMatcher};
pub use model::LinearModel;
pub use normalizer::{normalize, Normalizer, Stemmer};
pub use resolver::Resolver;
pub use responses::ResponseSelector;
pub use similarity::{sequence_ratio, token_jaccard};
pub use types::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn resolver_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    m.add_class::<PyChatEngine>()?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_similarity, m)?)?;
    Ok(())
}
