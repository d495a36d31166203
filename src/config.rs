//! Evaluation options for model objects.
//!
//! The kernel functions take no configuration. These options only decide how
//! a [`crate::model::ScatteringModel`] schedules work over a query array: on
//! the calling thread or on the rayon pool. Results are the same either way.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Configuration options for evaluating a model over a query array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Evaluate large queries on the rayon thread pool. Default: true
    pub parallel: bool,

    /// Minimum number of points before parallel evaluation is used. Default: 4096
    pub parallel_threshold: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 4096,
        }
    }
}

impl EvalConfig {
    /// Options that keep every evaluation on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Read options from JSON. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use sasphere_rs::config::EvalConfig;
    ///
    /// let config = EvalConfig::from_json(r#"{"parallel_threshold": 128}"#).unwrap();
    /// assert!(config.parallel);
    /// assert_eq!(config.parallel_threshold, 128);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a query of `points` elements should be evaluated in parallel.
    pub fn use_parallel(&self, points: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && points >= self.parallel_threshold
    }
}
