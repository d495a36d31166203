//! Resolved parameter values
//!
//! [`ParameterValues`] is a model's full parameter set after applying a map of
//! overrides to the descriptor defaults. Values keep the order of the
//! descriptor with the host's `scale` and `background` first.
//!
//! Polydispersity keys (`radius_pd`, `radius_pd_n`, ...) are accepted for
//! volume parameters and kept aside. The averaging engine that would consume
//! them belongs to the host.

use crate::error::{Result, SasError};
use crate::models::ModelInfo;
use crate::parameters::COMMON_PARAMETERS;
use serde::{Deserialize, Serialize};

/// Suffixes the host appends to a volume parameter to describe its distribution.
const DISPERSITY_SUFFIXES: [&str; 4] = ["_pd_nsigma", "_pd_type", "_pd_n", "_pd"];

/// A model's parameters after override resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValues {
    values: Vec<(String, f64)>,
    dispersity: Vec<(String, f64)>,
}

impl ParameterValues {
    /// Every parameter at its default value.
    pub fn defaults(info: &ModelInfo) -> Self {
        let values = COMMON_PARAMETERS
            .iter()
            .chain(info.parameters.iter())
            .map(|p| (p.name.to_string(), p.default))
            .collect();

        Self {
            values,
            dispersity: Vec::new(),
        }
    }

    /// Defaults with `overrides` applied in iteration order.
    ///
    /// # Errors
    ///
    /// * [`SasError::ParameterNotFound`] for a name that is neither a parameter
    ///   nor a dispersity key of a volume parameter
    /// * [`SasError::InvalidParameter`] for a NaN value
    pub fn with_overrides<'a, I>(info: &ModelInfo, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut params = Self::defaults(info);
        for (name, value) in overrides {
            if value.is_nan() {
                return Err(SasError::InvalidParameter(format!(
                    "'{}' must be a number, got NaN",
                    name
                )));
            }

            if params.set(name, value).is_ok() {
                continue;
            }

            match dispersity_base(name) {
                Some(base)
                    if info
                        .parameter(base)
                        .map_or(false, |p| p.is_polydisperse()) =>
                {
                    log::debug!(
                        "model '{}': recording dispersity key {}={} for the host",
                        info.name,
                        name,
                        value
                    );
                    params.set_dispersity(name, value);
                }
                _ => {
                    return Err(SasError::ParameterNotFound(format!(
                        "'{}' is not a parameter of model '{}'",
                        name, info.name
                    )))
                }
            }
        }

        Ok(params)
    }

    /// Value of a parameter, if it exists.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }

    /// Value of a parameter, or [`SasError::ParameterNotFound`].
    pub fn value(&self, name: &str) -> Result<f64> {
        self.get(name)
            .ok_or_else(|| SasError::ParameterNotFound(name.to_string()))
    }

    /// Set an existing parameter. Bounds are advisory and not checked.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => {
                entry.1 = value;
                Ok(())
            }
            None => Err(SasError::ParameterNotFound(name.to_string())),
        }
    }

    fn set_dispersity(&mut self, name: &str, value: f64) {
        match self.dispersity.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.dispersity.push((name.to_string(), value)),
        }
    }

    /// Parameter names and values, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Dispersity keys recorded from the overrides.
    pub fn dispersity(&self) -> &[(String, f64)] {
        &self.dispersity
    }

    /// `true` unless some `<name>_pd` width is non-zero.
    pub fn is_monodisperse(&self) -> bool {
        !self
            .dispersity
            .iter()
            .any(|(n, v)| n.ends_with("_pd") && *v != 0.0)
    }

    /// Number of parameters, host parameters included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The parameter a dispersity key refers to, e.g. `radius` for `radius_pd_n`.
fn dispersity_base(name: &str) -> Option<&str> {
    DISPERSITY_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .filter(|base| !base.is_empty())
}
