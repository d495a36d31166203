//! Parameter table entries
//!
//! A [`ParameterInfo`] is one row of a model's parameter table: identifier,
//! unit string, default, advisory bounds, category and description. Tables
//! are `static` and read-only; the host builds its fitting UI and its
//! polydispersity quadrature from them.

use crate::parameters::bounds::Bounds;
use serde::{Deserialize, Serialize};

/// Category of a model parameter.
///
/// The host averages `Volume` parameters over a size distribution when a
/// polydispersity width is set. `Sld` parameters are contrast-like and never
/// distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    #[serde(rename = "sld")]
    Sld,
    #[serde(rename = "volume")]
    Volume,
    #[serde(rename = "")]
    Plain,
}

impl ParameterKind {
    /// The category string as it appears in the serialized table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Sld => "sld",
            ParameterKind::Volume => "volume",
            ParameterKind::Plain => "",
        }
    }
}

/// One parameter record of a model descriptor.
///
/// Field order is part of the host contract and matches the serialized order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterInfo {
    /// Identifier used in overrides and by the host registry
    pub name: &'static str,

    /// Physical unit string, e.g. `"1e-6/Ang^2"`
    pub units: &'static str,

    /// Default value
    pub default: f64,

    /// Advisory lower/upper limits; infinite ends mean unbounded
    pub bounds: Bounds,

    /// Whether the parameter is volume-averaged or contrast-like
    pub kind: ParameterKind,

    /// Human-readable description
    pub description: &'static str,
}

impl ParameterInfo {
    /// Create a parameter record. `const` so that tables can live in statics.
    pub const fn new(
        name: &'static str,
        units: &'static str,
        default: f64,
        bounds: Bounds,
        kind: ParameterKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            units,
            default,
            bounds,
            kind,
            description,
        }
    }

    /// Whether the host may distribute this parameter over a size distribution.
    pub fn is_polydisperse(&self) -> bool {
        self.kind == ParameterKind::Volume
    }
}

/// Parameters the host attaches to every model, ahead of the model's own.
///
/// The host computes `scale / V * I(q) + background`, where `V` is the form
/// volume.
pub static COMMON_PARAMETERS: [ParameterInfo; 2] = [
    ParameterInfo::new(
        "scale",
        "",
        1.0,
        Bounds::min_only(0.0),
        ParameterKind::Plain,
        "Source intensity",
    ),
    ParameterInfo::new(
        "background",
        "1/cm",
        1e-3,
        Bounds::unbounded(),
        ParameterKind::Plain,
        "Source background",
    ),
];
