//! # sasphere-rs
//!
//! `sasphere-rs` evaluates the small-angle scattering of a population of
//! uniform-density spheres, for use inside a curve-fitting host.
//!
//! The library provides:
//! - The normalized sphere amplitude `3 j1(qr)/(qr)` with its removable singularity
//! - 1D intensity `I(q)` and the isotropic 2D intensity `I(qx, qy)`
//! - The SESANS real-space correlation function `G(z)`
//! - A static model descriptor (parameter table, units, bounds, categories)
//! - Reference scenarios for validating an implementation end to end
//!
//! Every kernel is pure and accepts either a scalar or an `ndarray` array.
//! Polydispersity averaging and structure-factor coupling belong to the host.
//!
//! ## Basic Usage
//!
//! ```
//! use ndarray::Array1;
//! use sasphere_rs::models::sphere::{correlation, intensity_1d};
//! use sasphere_rs::model::ScatteringModel;
//! use sasphere_rs::models::SphereModel;
//!
//! // Raw kernel values
//! let q = Array1::linspace(0.001, 0.5, 200);
//! let iq = intensity_1d(&q, 1.0, 6.0, 50.0);
//! assert_eq!(iq.len(), 200);
//! assert_eq!(correlation(&0.0_f64, 1.0, 6.0, 50.0), 1.0);
//!
//! // Host normalization: scale / V * Iq + background
//! let model = SphereModel::new();
//! let intensity = model.eval(&Array1::from_vec(vec![0.2])).unwrap();
//! assert!((intensity[0] - 0.726362).abs() < 1e-6);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod form_factor;
pub mod geometry;
pub mod model;
pub mod models;
pub mod oracle;
pub mod parameters;
pub mod query;

#[cfg(feature = "parallel")]
mod parallel;

// Re-exports for convenience
pub use error::{Result, SasError};
pub use model::ScatteringModel;
pub use models::{SphereModel, SphereParameters, SPHERE_INFO, SPHERE_TESTS};
pub use query::Query;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
