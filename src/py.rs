//! Python bindings for the chat engine using PyO3

use crate::config::EngineConfig;
use crate::engine::ChatEngine;
use crate::error::ResolverError;
use crate::normalizer::normalize;
use crate::similarity::sequence_ratio;
use crate::types::Resolution;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::path::PathBuf;

fn to_py_err(err: ResolverError) -> PyErr {
    match err {
        ResolverError::EmptyMessage | ResolverError::Config(_) => {
            PyErr::new::<PyValueError, _>(err.to_string())
        }
        _ => PyErr::new::<PyRuntimeError, _>(err.to_string()),
    }
}

fn resolution_dict<'py>(py: Python<'py>, resolution: &Resolution) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("intent", &resolution.intent)?;
    dict.set_item("confidence", resolution.confidence)?;
    dict.set_item("source", resolution.source.as_str())?;
    Ok(dict)
}

/// Normalize text the way the resolver does (Python function)
#[pyfunction]
#[pyo3(name = "normalize")]
pub fn py_normalize(text: &str) -> String {
    normalize(text)
}

/// Character sequence similarity between two strings (Python function)
#[pyfunction]
#[pyo3(name = "calculate_similarity")]
pub fn py_calculate_similarity(a: &str, b: &str) -> f64 {
    sequence_ratio(a, b)
}

/// Python wrapper for the chat engine
#[pyclass(name = "ChatEngine")]
pub struct PyChatEngine {
    engine: ChatEngine,
}

#[pymethods]
impl PyChatEngine {
    /// Load the dataset and exported model; missing paths fall back to the environment
    #[new]
    #[pyo3(signature = (dataset_path=None, model_path=None))]
    fn new(dataset_path: Option<PathBuf>, model_path: Option<PathBuf>) -> PyResult<Self> {
        let mut config = EngineConfig::from_env().map_err(to_py_err)?;
        if let Some(path) = dataset_path {
            config.dataset_path = path;
        }
        if let Some(path) = model_path {
            config.model_path = path;
        }

        let engine = ChatEngine::from_config(&config).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Resolve a message to {"intent", "confidence", "source"}
    fn resolve<'py>(&self, py: Python<'py>, message: &str) -> PyResult<Bound<'py, PyDict>> {
        let resolution = py.allow_threads(|| self.engine.resolve(message));
        resolution_dict(py, &resolution)
    }

    /// Pick a reply for an intent tag
    fn get_reply(&self, intent: &str) -> String {
        self.engine.get_reply(intent)
    }

    /// Resolve a message and attach a reply
    fn get_response<'py>(&self, py: Python<'py>, message: &str) -> PyResult<Bound<'py, PyDict>> {
        let reply = py
            .allow_threads(|| self.engine.respond(message))
            .map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("intent", &reply.intent)?;
        dict.set_item("confidence", reply.confidence)?;
        dict.set_item("source", reply.source.as_str())?;
        dict.set_item("response", &reply.response)?;
        Ok(dict)
    }

    /// Intent tags in dataset order
    fn intents(&self) -> Vec<String> {
        self.engine.intents().to_vec()
    }

    fn __len__(&self) -> usize {
        self.engine.intents().len()
    }
}
