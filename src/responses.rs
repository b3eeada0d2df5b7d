//! Response selection for resolved intents

use crate::types::{Dataset, UNKNOWN_INTENT};
use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// Reply for the `unknown` intent; never drawn from the dataset
pub const UNKNOWN_REPLY: &str = "Maaf, saya kurang mengerti pertanyaan Anda. Bisa diulang dengan kata-kata yang berbeda? Atau ketik 'bantuan' untuk melihat apa yang bisa saya bantu.";

/// Reply for a resolved intent that has no configured responses
pub const NO_RESPONSE_REPLY: &str = "Maaf, saya tidak memiliki jawaban untuk itu.";

#[derive(Debug, Clone, Default)]
pub struct ResponseSelector {
    responses: AHashMap<String, Vec<String>>,
}

impl ResponseSelector {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let responses = dataset
            .intents
            .iter()
            .map(|intent| (intent.tag.clone(), intent.responses.clone()))
            .collect();
        Self { responses }
    }

    pub fn select_reply<R: Rng + ?Sized>(&self, intent: &str, rng: &mut R) -> &str {
        if intent == UNKNOWN_INTENT {
            return UNKNOWN_REPLY;
        }

        self.responses
            .get(intent)
            .and_then(|candidates| candidates.choose(rng))
            .map(String::as_str)
            .unwrap_or(NO_RESPONSE_REPLY)
    }

    pub fn has_intent(&self, intent: &str) -> bool {
        self.responses.contains_key(intent)
    }
}
