//! Built-in scattering models.
//!
//! Each model is a set of pure kernel functions plus a static [`ModelInfo`]
//! descriptor that the host registry reads to build its fitting UI and
//! polydispersity machinery.

use crate::error::Result;
use crate::geometry::EffectiveRadius;
use crate::parameters::{ParameterInfo, ParameterValues, COMMON_PARAMETERS};
use serde::Serialize;

pub mod sphere;

// Re-export the models
pub use sphere::{SphereModel, SphereParameters, SPHERE_INFO, SPHERE_TESTS};

/// Static description of a model.
///
/// Built once as a `static` and never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelInfo {
    /// Registry identifier
    pub name: &'static str,

    /// One-line title
    pub title: &'static str,

    /// Free-text description of the model function
    pub description: &'static str,

    /// Category path in the host's model browser
    pub category: &'static str,

    /// Ordered parameter table, excluding the host's `scale` and `background`
    pub parameters: &'static [ParameterInfo],

    /// Modes the host may select to derive an effective radius
    pub effective_radius_type: &'static [EffectiveRadius],

    /// The model provides the form-factor amplitude F(q), not only F²(q)
    pub have_fq: bool,

    /// The kernels accept whole query arrays
    pub vectorized: bool,
}

impl ModelInfo {
    /// Look up a parameter record by name.
    ///
    /// The host's `scale` and `background` are found as well.
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterInfo> {
        COMMON_PARAMETERS
            .iter()
            .chain(self.parameters.iter())
            .find(|p| p.name == name)
    }

    /// Parameter records the host may distribute for polydispersity.
    pub fn polydisperse_parameters(&self) -> impl Iterator<Item = &'static ParameterInfo> {
        self.parameters.iter().filter(|p| p.is_polydisperse())
    }

    /// Default values for every parameter, host parameters first.
    pub fn defaults(&self) -> ParameterValues {
        ParameterValues::defaults(self)
    }

    /// Serialize the descriptor for the host. Infinite bounds become `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
