//! Chat engine - the surface handed to transport layers
//!
//! Bundles the resolver with response selection. Built once at startup from
//! the dataset and the trained model, then shared read-only.

use crate::classifier::IntentClassifier;
use crate::config::{EngineConfig, ResolverConfig};
use crate::error::{ResolverError, Result};
use crate::model::LinearModel;
use crate::normalizer::Normalizer;
use crate::resolver::Resolver;
use crate::responses::ResponseSelector;
use crate::types::{ChatReply, Dataset, Resolution};
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ChatEngine {
    resolver: Resolver,
    responses: ResponseSelector,
    intents: Vec<String>,
}

impl ChatEngine {
    pub fn new(
        dataset: &Dataset,
        classifier: Arc<dyn IntentClassifier>,
        normalizer: Normalizer,
        config: &ResolverConfig,
    ) -> Result<Self> {
        dataset.validate()?;

        let responses = ResponseSelector::from_dataset(dataset);
        for class in classifier.classes() {
            if !responses.has_intent(&class) {
                warn!(intent = %class, "Model class is missing from the dataset");
            }
        }

        let resolver = Resolver::new(dataset, classifier, normalizer, config)?;
        let intents = dataset.tags().into_iter().map(String::from).collect();

        Ok(Self {
            resolver,
            responses,
            intents,
        })
    }

    /// Load the dataset and exported model named by `config`
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let dataset = Dataset::from_path(&config.dataset_path)?;
        let model = LinearModel::from_path(&config.model_path)?;
        let engine = Self::new(&dataset, Arc::new(model), Normalizer::new(), &config.resolver)?;
        info!(
            intents = engine.intents.len(),
            patterns = engine.resolver.index().len(),
            "Chat engine ready"
        );
        Ok(engine)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&EngineConfig::from_env()?)
    }

    pub fn resolve(&self, message: &str) -> Resolution {
        self.resolver.resolve(message)
    }

    pub fn get_reply(&self, intent: &str) -> String {
        self.get_reply_with(intent, &mut rand::thread_rng())
    }

    pub fn get_reply_with<R: Rng + ?Sized>(&self, intent: &str, rng: &mut R) -> String {
        self.responses.select_reply(intent, rng).to_string()
    }

    /// Resolve a message and pick a reply; empty messages are rejected
    pub fn respond(&self, message: &str) -> Result<ChatReply> {
        self.respond_with(message, &mut rand::thread_rng())
    }

    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Result<ChatReply> {
        if message.trim().is_empty() {
            return Err(ResolverError::EmptyMessage);
        }

        let resolution = self.resolve(message);
        let response = self.get_reply_with(&resolution.intent, rng);
        Ok(ChatReply {
            intent: resolution.intent,
            confidence: resolution.confidence,
            source: resolution.source,
            response,
        })
    }

    /// Intent tags in dataset order
    pub fn intents(&self) -> &[String] {
        &self.intents
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}
