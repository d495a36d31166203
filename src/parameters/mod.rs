//! # Parameter System
//!
//! Model parameters as the host sees them.
//!
//! ## Core Components
//!
//! - [`ParameterInfo`]: one row of a model's static parameter table
//! - [`ParameterKind`]: contrast-like (`sld`) or size-distributed (`volume`)
//! - [`Bounds`]: advisory limits, serialized with `null` for open ends
//! - [`ParameterValues`]: defaults with overrides applied, ready for evaluation
//!
//! ## Example Usage
//!
//! ```rust
//! use sasphere_rs::parameters::ParameterValues;
//! use sasphere_rs::SPHERE_INFO;
//!
//! let params = ParameterValues::with_overrides(&SPHERE_INFO, [("radius", 120.0)]).unwrap();
//! assert_eq!(params.get("radius"), Some(120.0));
//! assert_eq!(params.get("sld_solvent"), Some(6.0));
//! ```

pub mod bounds;
pub mod parameter;
pub mod values;

// Re-export key types
pub use bounds::{Bounds, BoundsError};
pub use parameter::{ParameterInfo, ParameterKind, COMMON_PARAMETERS};
pub use values::ParameterValues;
