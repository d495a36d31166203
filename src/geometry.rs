//! Sphere geometry: volume, effective radius and volume ratio.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Volume of a sphere of the given radius, (4/3)·π·r³.
///
/// Defined for every real input; a negative radius gives a negative volume.
/// Range checking is left to the host's parameter bounds.
pub fn form_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Ways of reducing a particle's size parameters to one radius for the
/// host's structure-factor coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveRadius {
    /// The sphere radius itself
    Radius,
}

impl EffectiveRadius {
    /// Every mode a sphere supports, in the order the host numbers them (from 1).
    pub const ALL: [EffectiveRadius; 1] = [EffectiveRadius::Radius];

    /// Label as shown in the host's effective-radius selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveRadius::Radius => "radius",
        }
    }
}

/// Effective radius of a sphere under the given mode.
pub fn effective_radius(mode: EffectiveRadius, radius: f64) -> f64 {
    match mode {
        EffectiveRadius::Radius => radius,
    }
}

/// Shell volume over total volume. A solid sphere has no separate shell, so
/// this is always 1.
pub fn volume_ratio(_radius: f64) -> f64 {
    1.0
}
