//! Model trait for host-side evaluation.
//!
//! The kernel functions in [`crate::models`] compute raw, unnormalized
//! quantities. A [`ScatteringModel`] wraps a kernel with a resolved parameter
//! set. It applies the host's normalization for a monodisperse population:
//!
//! `I(q) = scale / V · Iq(q) + background`
//!
//! where `V` is the particle form volume. Averaging over distributed
//! parameters is left to the host.

use crate::config::EvalConfig;
use crate::error::Result;
use crate::geometry::EffectiveRadius;
use crate::models::ModelInfo;
use crate::parameters::ParameterValues;
use ndarray::Array1;

/// A scattering model that can be evaluated against measured data.
pub trait ScatteringModel {
    /// The static descriptor of the model.
    fn info(&self) -> &'static ModelInfo;

    /// Returns a reference to the model's parameters.
    fn parameters(&self) -> &ParameterValues;

    /// Returns a mutable reference to the model's parameters.
    fn parameters_mut(&mut self) -> &mut ParameterValues;

    /// Evaluation options.
    fn config(&self) -> &EvalConfig;

    /// Raw kernel intensity at each `q`, before scale, volume normalization and
    /// background.
    fn iq(&self, q: &Array1<f64>) -> Result<Array1<f64>>;

    /// Raw kernel intensity at each `(qx, qy)` detector point.
    fn iqxy(&self, qx: &Array1<f64>, qy: &Array1<f64>) -> Result<Array1<f64>>;

    /// SESANS correlation function at each spin-echo length `z`.
    fn sesans(&self, z: &Array1<f64>) -> Result<Array1<f64>>;

    /// Particle volume for the current parameters.
    fn form_volume(&self) -> Result<f64>;

    /// Effective radius for the current parameters.
    fn effective_radius(&self, mode: EffectiveRadius) -> Result<f64>;

    /// Shell volume over total volume.
    fn volume_ratio(&self) -> Result<f64> {
        Ok(1.0)
    }

    /// Evaluates the normalized intensity `scale / V · Iq(q) + background`.
    ///
    /// A zero volume contributes nothing, so the result is the background.
    fn eval(&self, q: &Array1<f64>) -> Result<Array1<f64>> {
        let iq = self.iq(q)?;
        self.normalize(iq)
    }

    /// Evaluates the normalized 2D intensity.
    fn eval_2d(&self, qx: &Array1<f64>, qy: &Array1<f64>) -> Result<Array1<f64>> {
        let iq = self.iqxy(qx, qy)?;
        self.normalize(iq)
    }

    /// Applies scale, volume normalization and background to raw intensities.
    fn normalize(&self, iq: Array1<f64>) -> Result<Array1<f64>> {
        let scale = self.parameters().value("scale")?;
        let background = self.parameters().value("background")?;
        let volume = self.form_volume()?;

        let factor = if volume == 0.0 { 0.0 } else { scale / volume };
        Ok(iq.mapv(|v| factor * v + background))
    }
}
