//! Resolver thresholds and artifact locations
//!
//! Defaults can be overridden through environment variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `RESOLVER_CONFIDENCE_THRESHOLD` | 0.15 |
//! | `RESOLVER_SEQUENCE_THRESHOLD` | 0.6 |
//! | `RESOLVER_OVERLAP_THRESHOLD` | 0.4 |
//! | `RESOLVER_DATASET_PATH` | `datasets.json` |
//! | `RESOLVER_MODEL_PATH` | `models/model.json` |

use crate::error::{ResolverError, Result};
use crate::matcher::{OVERLAP_THRESHOLD, SEQUENCE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::path::PathBuf;

pub const CONFIDENCE_THRESHOLD: f64 = 0.15;

const DEFAULT_DATASET_PATH: &str = "datasets.json";
const DEFAULT_MODEL_PATH: &str = "models/model.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum classifier probability accepted without fallback (inclusive)
    pub confidence_threshold: f64,
    /// Minimum sequence ratio for the stage A fallback
    pub sequence_threshold: f64,
    /// Minimum token Jaccard for the stage B fallback
    pub overlap_threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            sequence_threshold: SEQUENCE_THRESHOLD,
            overlap_threshold: OVERLAP_THRESHOLD,
        }
    }
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            confidence_threshold: env_f64("RESOLVER_CONFIDENCE_THRESHOLD", defaults.confidence_threshold)?,
            sequence_threshold: env_f64("RESOLVER_SEQUENCE_THRESHOLD", defaults.sequence_threshold)?,
            overlap_threshold: env_f64("RESOLVER_OVERLAP_THRESHOLD", defaults.overlap_threshold)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("confidence_threshold", self.confidence_threshold),
            ("sequence_threshold", self.sequence_threshold),
            ("overlap_threshold", self.overlap_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ResolverError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub resolver: ResolverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            resolver: ResolverConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            dataset_path: env_path("RESOLVER_DATASET_PATH", DEFAULT_DATASET_PATH),
            model_path: env_path("RESOLVER_MODEL_PATH", DEFAULT_MODEL_PATH),
            resolver: ResolverConfig::from_env()?,
        })
    }
}

/// Paths are taken as raw OS strings, so non-UTF-8 paths still work
fn env_path(key: &str, default: &str) -> PathBuf {
    env::var_os(key)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ResolverError::Config(format!("{}='{}': {}", key, raw, e))),
        Err(VarError::NotPresent) => Ok(default),
        Err(e @ VarError::NotUnicode(_)) => Err(ResolverError::Config(format!("{}: {}", key, e))),
    }
}
