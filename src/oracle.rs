//! Reference scenarios for validating a model end to end.
//!
//! Each [`OracleCase`] gives parameter overrides, one or more `q` values and
//! the expected normalized intensities. A case with no expected values only
//! checks that evaluation succeeds. A host harness may also compare the
//! effective radius and the volume ratio.

use crate::error::Result;
use crate::models::ModelInfo;
use crate::parameters::ParameterValues;
use serde::Serialize;

/// One reference scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OracleCase {
    /// Overrides applied on top of the model defaults; empty means defaults
    pub overrides: &'static [(&'static str, f64)],

    /// Query values
    pub q: &'static [f64],

    /// Expected `scale / V · Iq + background` at each `q`, if asserted
    pub expected: Option<&'static [f64]>,

    /// Expected effective radius, if asserted
    pub effective_radius: Option<f64>,

    /// Expected shell-to-total volume ratio, if asserted
    pub volume_ratio: Option<f64>,
}

impl OracleCase {
    /// A case checking intensities only.
    pub const fn new(
        overrides: &'static [(&'static str, f64)],
        q: &'static [f64],
        expected: Option<&'static [f64]>,
    ) -> Self {
        Self {
            overrides,
            q,
            expected,
            effective_radius: None,
            volume_ratio: None,
        }
    }

    /// Also assert the effective radius.
    pub const fn with_effective_radius(self, radius: f64) -> Self {
        Self {
            effective_radius: Some(radius),
            ..self
        }
    }

    /// Also assert the volume ratio.
    pub const fn with_volume_ratio(self, ratio: f64) -> Self {
        Self {
            volume_ratio: Some(ratio),
            ..self
        }
    }

    /// Resolve the overrides against a model's defaults.
    pub fn parameters(&self, info: &ModelInfo) -> Result<ParameterValues> {
        ParameterValues::with_overrides(info, self.overrides.iter().copied())
    }

    /// `false` when the case sets a non-zero polydispersity width. The
    /// expected values of such cases come from the host's size averaging.
    pub fn is_monodisperse(&self) -> bool {
        !self
            .overrides
            .iter()
            .any(|&(name, value)| name.ends_with("_pd") && value != 0.0)
    }
}
