//! Spheres with uniform scattering length density.
//!
//! The scattering amplitude of a sphere of radius `r` and contrast `Δρ` is
//!
//! ```text
//! F(q) = Δρ · V · 3 (sin qr - qr cos qr) / (qr)³
//! ```
//!
//! and the kernel intensity is `Iq = 1e-4 · F²`. The factor reconciles SLDs in
//! 1e-6 Å⁻² with intensities in cm⁻¹ once the host divides by `V`. The 2D
//! intensity depends only on `|q|`.
//!
//! The SESANS correlation function follows Kruglov, J. Appl. Cryst. (2003).

use crate::config::EvalConfig;
use crate::error::Result;
use crate::form_factor::sas_3j1x_x;
use crate::geometry::{self, EffectiveRadius};
use crate::model::ScatteringModel;
use crate::models::ModelInfo;
use crate::oracle::OracleCase;
use crate::parameters::{Bounds, ParameterInfo, ParameterKind, ParameterValues};
use crate::query::Query;
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use crate::parallel::map_with_config;

/// Converts `F²` with SLDs in 1e-6 Å⁻² to intensity units.
const INTENSITY_SCALE: f64 = 1.0e-4;

/// Square root of [`INTENSITY_SCALE`], applied to the bare amplitude.
const AMPLITUDE_SCALE: f64 = 1.0e-2;

static SPHERE_PARAMETERS: [ParameterInfo; 3] = [
    ParameterInfo::new(
        "sld",
        "1e-6/Ang^2",
        1.0,
        Bounds::unbounded(),
        ParameterKind::Sld,
        "Layer scattering length density",
    ),
    ParameterInfo::new(
        "sld_solvent",
        "1e-6/Ang^2",
        6.0,
        Bounds::unbounded(),
        ParameterKind::Sld,
        "Solvent scattering length density",
    ),
    ParameterInfo::new(
        "radius",
        "Ang",
        50.0,
        Bounds::min_only(0.0),
        ParameterKind::Volume,
        "Sphere radius",
    ),
];

/// Descriptor of the sphere model.
pub static SPHERE_INFO: ModelInfo = ModelInfo {
    name: "sphere",
    title: "Spheres with uniform scattering length density",
    description: "P(q) = (scale/V) * [3 V (sld - sld_solvent) (sin(qr) - qr cos(qr)) / (qr)^3]^2 + background\n\
                  r: sphere radius\n\
                  V: sphere volume\n\
                  sld: SLD of the sphere\n\
                  sld_solvent: SLD of the solvent",
    category: "shape:sphere",
    parameters: &SPHERE_PARAMETERS,
    effective_radius_type: &EffectiveRadius::ALL,
    have_fq: true,
    vectorized: true,
};

/// Parameter set used for the host's demo plot.
pub static SPHERE_DEMO: [(&str, f64); 7] = [
    ("scale", 1.0),
    ("background", 0.0),
    ("sld", 6.0),
    ("sld_solvent", 1.0),
    ("radius", 120.0),
    ("radius_pd", 0.2),
    ("radius_pd_n", 45.0),
];

/// Reference scenarios for the sphere model.
///
/// Cases 2 and 3 carry a radius distribution; their expected values include
/// the host's size averaging.
pub static SPHERE_TESTS: [OracleCase; 3] = [
    OracleCase::new(&[], &[0.2], Some(&[0.726362])),
    OracleCase::new(
        &[
            ("scale", 1.0),
            ("background", 0.0),
            ("sld", 6.0),
            ("sld_solvent", 1.0),
            ("radius", 120.0),
            ("radius_pd", 0.2),
            ("radius_pd_n", 45.0),
        ],
        &[0.2],
        Some(&[0.228843]),
    ),
    OracleCase::new(
        &[("radius", 120.0), ("radius_pd", 0.2), ("radius_pd_n", 45.0)],
        &[0.1],
        None,
    )
    .with_effective_radius(120.0)
    .with_volume_ratio(1.0),
];

/// Kernel parameters of the sphere model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParameters {
    /// Particle SLD (1e-6 Å⁻²)
    pub sld: f64,

    /// Solvent SLD (1e-6 Å⁻²)
    pub sld_solvent: f64,

    /// Radius (Å)
    pub radius: f64,
}

impl Default for SphereParameters {
    fn default() -> Self {
        Self {
            sld: 1.0,
            sld_solvent: 6.0,
            radius: 50.0,
        }
    }
}

impl SphereParameters {
    pub fn new(sld: f64, sld_solvent: f64, radius: f64) -> Self {
        Self {
            sld,
            sld_solvent,
            radius,
        }
    }

    /// Extract the kernel parameters from a resolved parameter set.
    pub fn from_values(values: &ParameterValues) -> Result<Self> {
        Ok(Self {
            sld: values.value("sld")?,
            sld_solvent: values.value("sld_solvent")?,
            radius: values.value("radius")?,
        })
    }

    /// SLD difference between particle and solvent.
    pub fn contrast(&self) -> f64 {
        self.sld - self.sld_solvent
    }

    pub fn volume(&self) -> f64 {
        geometry::form_volume(self.radius)
    }
}

/// Sequential evaluation when rayon is not compiled in.
#[cfg(not(feature = "parallel"))]
fn map_with_config<F>(x: &Array1<f64>, _config: &EvalConfig, f: F) -> Array1<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    x.map_query(f)
}

#[inline]
fn amplitude_point(q: f64, contrast: f64, volume: f64, radius: f64) -> f64 {
    sas_3j1x_x(q * radius) * contrast * volume
}

#[inline]
fn intensity_point(q: f64, contrast: f64, volume: f64, radius: f64) -> f64 {
    let fq = amplitude_point(q, contrast, volume, radius);
    INTENSITY_SCALE * (fq * fq)
}

/// Kernel intensity `1e-4 · [3 j1(qr)/(qr) · (sld - sld_solvent) · V]²`.
///
/// Accepts a scalar or any array of `q` and returns the same shape. `q = 0`
/// and `radius = 0` are valid; a zero radius gives zero intensity.
///
/// # Examples
///
/// ```
/// use sasphere_rs::models::sphere::intensity_1d;
/// use ndarray::{array, Array1};
///
/// let i0 = intensity_1d(&0.0_f64, 1.0, 6.0, 50.0);
/// let q: Array1<f64> = array![0.0, 0.1, 0.2];
/// let iq = intensity_1d(&q, 1.0, 6.0, 50.0);
/// assert_eq!(iq[0], i0);
/// ```
pub fn intensity_1d<Q: Query>(q: &Q, sld: f64, sld_solvent: f64, radius: f64) -> Q::Output {
    let contrast = sld - sld_solvent;
    let volume = geometry::form_volume(radius);
    q.map_query(|q| intensity_point(q, contrast, volume, radius))
}

/// 2D kernel intensity, `intensity_1d(sqrt(qx² + qy²), ...)`.
///
/// Returns [`crate::SasError::DimensionMismatch`] when `qx` and `qy` differ
/// in shape.
pub fn intensity_2d<Q: Query>(
    qx: &Q,
    qy: &Q,
    sld: f64,
    sld_solvent: f64,
    radius: f64,
) -> Result<Q::Output> {
    let contrast = sld - sld_solvent;
    let volume = geometry::form_volume(radius);
    qx.zip_query(qy, |qx, qy| {
        intensity_point(qx.hypot(qy), contrast, volume, radius)
    })
}

/// Form-factor amplitude and its square, `(F1, F2)`.
///
/// `F1 = 1e-2 · F` and `F2 = 1e-4 · F²`, so `F2` equals [`intensity_1d`]. The
/// host's structure-factor coupling needs `F1` for the decoupling
/// approximation.
pub fn form_factor_amplitudes<Q: Query>(
    q: &Q,
    sld: f64,
    sld_solvent: f64,
    radius: f64,
) -> (Q::Output, Q::Output) {
    let contrast = sld - sld_solvent;
    let volume = geometry::form_volume(radius);
    let f1 = q.map_query(|q| AMPLITUDE_SCALE * amplitude_point(q, contrast, volume, radius));
    let f2 = q.map_query(|q| intensity_point(q, contrast, volume, radius));
    (f1, f2)
}

fn correlation_point(z: f64, radius: f64) -> f64 {
    let d = if radius == 0.0 {
        // z / 0: the particle only overlaps itself at zero shift
        if z == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        z / radius
    };

    if d == 0.0 {
        1.0
    } else if d > 0.0 && d < 2.0 {
        let d2 = d * d;
        (1.0 - d2 / 4.0).sqrt() * (1.0 + d2 / 8.0)
            + d2 / 2.0 * (1.0 - d2 / 16.0) * (d / (2.0 + (4.0 - d2).sqrt())).ln()
    } else {
        0.0
    }
}

/// SESANS correlation function `G(z)` of a solid sphere, normalized to
/// `G(0) = 1`.
///
/// With `d = z / radius`: 1 at `d = 0`, the Kruglov expression for
/// `0 < d < 2`, and 0 for every other `d`. The logarithm and square roots
/// are only evaluated inside `0 < d < 2`.
///
/// `sld` and `solvent_sld` are accepted so the signature matches the other
/// kernels, but the normalized correlation does not depend on them.
///
/// For `radius = 0` the result is 1 at `z = 0` and 0 elsewhere.
pub fn correlation<Q: Query>(z: &Q, _sld: f64, _solvent_sld: f64, radius: f64) -> Q::Output {
    z.map_query(|z| correlation_point(z, radius))
}

/// Draw a random sphere for model exploration: radius log-uniform between
/// 10^1.3 and 10^4 Å, SLDs at their defaults.
pub fn random_parameters<R: Rng + ?Sized>(rng: &mut R) -> SphereParameters {
    let exponent = Uniform::new(1.3, 4.0).sample(rng);
    SphereParameters {
        radius: 10f64.powf(exponent),
        ..SphereParameters::default()
    }
}

/// The sphere model with resolved parameters, as seen by the host.
#[derive(Debug, Clone)]
pub struct SphereModel {
    parameters: ParameterValues,
    config: EvalConfig,
}

impl Default for SphereModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SphereModel {
    /// A sphere model at default parameters.
    pub fn new() -> Self {
        Self {
            parameters: SPHERE_INFO.defaults(),
            config: EvalConfig::default(),
        }
    }

    /// A sphere model with `overrides` applied to the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use sasphere_rs::models::SphereModel;
    /// use sasphere_rs::model::ScatteringModel;
    ///
    /// let model = SphereModel::with_overrides([("radius", 120.0)]).unwrap();
    /// assert_eq!(model.parameters().get("radius"), Some(120.0));
    /// ```
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let parameters = ParameterValues::with_overrides(&SPHERE_INFO, overrides)?;
        log::debug!("sphere model parameters: {:?}", parameters);
        Ok(Self {
            parameters,
            config: EvalConfig::default(),
        })
    }

    /// The demo parameter set. The radius distribution is recorded, not applied.
    pub fn demo() -> Result<Self> {
        Self::with_overrides(SPHERE_DEMO.iter().copied())
    }

    /// Replace the evaluation options.
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Current kernel parameters.
    pub fn kernel_parameters(&self) -> Result<SphereParameters> {
        SphereParameters::from_values(&self.parameters)
    }

    /// Raw `(F1, F2)` at each `q`. See [`form_factor_amplitudes`].
    pub fn fq(&self, q: &Array1<f64>) -> Result<(Array1<f64>, Array1<f64>)> {
        let p = self.kernel_parameters()?;
        Ok(form_factor_amplitudes(q, p.sld, p.sld_solvent, p.radius))
    }
}

impl ScatteringModel for SphereModel {
    fn info(&self) -> &'static ModelInfo {
        &SPHERE_INFO
    }

    fn parameters(&self) -> &ParameterValues {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterValues {
        &mut self.parameters
    }

    fn config(&self) -> &EvalConfig {
        &self.config
    }

    fn iq(&self, q: &Array1<f64>) -> Result<Array1<f64>> {
        let p = self.kernel_parameters()?;
        let (contrast, volume, radius) = (p.contrast(), p.volume(), p.radius);
        Ok(map_with_config(q, &self.config, move |q| {
            intensity_point(q, contrast, volume, radius)
        }))
    }

    fn iqxy(&self, qx: &Array1<f64>, qy: &Array1<f64>) -> Result<Array1<f64>> {
        let q = qx.zip_query(qy, f64::hypot)?;
        self.iq(&q)
    }

    fn sesans(&self, z: &Array1<f64>) -> Result<Array1<f64>> {
        let radius = self.kernel_parameters()?.radius;
        Ok(map_with_config(z, &self.config, move |z| {
            correlation_point(z, radius)
        }))
    }

    fn form_volume(&self) -> Result<f64> {
        Ok(self.kernel_parameters()?.volume())
    }

    fn effective_radius(&self, mode: EffectiveRadius) -> Result<f64> {
        Ok(geometry::effective_radius(
            mode,
            self.kernel_parameters()?.radius,
        ))
    }

    fn volume_ratio(&self) -> Result<f64> {
        Ok(geometry::volume_ratio(self.kernel_parameters()?.radius))
    }
}
