use thiserror::Error;

/// Errors surfaced by the resolver crate.
///
/// Everything here is an initialization or caller-input failure. Resolving a
/// message never fails: an unmatched message is the `unknown` intent.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The intent dataset could not be read or parsed.
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// The dataset parsed but cannot back a resolver (e.g. no intents).
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// The trained model artifact could not be read or parsed.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The model artifact parsed but its shapes are inconsistent.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// A threshold or environment value is out of range or unparsable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller sent an empty or whitespace-only message.
    #[error("Message must not be empty")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, ResolverError>;
