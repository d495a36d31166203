//! Normalized scattering amplitude of a uniform sphere.
//!
//! The amplitude is `3 j1(x) / x = 3 (sin x - x cos x) / x³`, where `j1` is the
//! spherical Bessel function of order one and `x = q r`. It has a removable
//! singularity at the origin with limit 1.

use crate::query::Query;

/// Below this `|x|` the closed form loses precision to cancellation in
/// `sin x - x cos x`, and `x³` eventually underflows.
const SERIES_CUTOFF: f64 = 0.1;

/// `3 (sin x - x cos x) / x³`, equal to exactly 1 at `x = 0`.
///
/// For `|x| < 0.1` the Taylor series
/// `1 - x²/10 + x⁴/280 - x⁶/15120 + x⁸/1330560` is used instead. The first
/// omitted term is below 1e-18 there. Finite input never produces NaN.
///
/// # Examples
///
/// ```
/// use sasphere_rs::form_factor::sas_3j1x_x;
///
/// assert_eq!(sas_3j1x_x(0.0), 1.0);
/// assert!((sas_3j1x_x(1e-3) - 1.0).abs() < 1e-6);
/// assert!((sas_3j1x_x(1e-200) - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn sas_3j1x_x(x: f64) -> f64 {
    if x.abs() < SERIES_CUTOFF {
        let x2 = x * x;
        1.0 + x2 * (-1.0 / 10.0 + x2 * (1.0 / 280.0 + x2 * (-1.0 / 15120.0 + x2 / 1_330_560.0)))
    } else {
        let (sn, cn) = x.sin_cos();
        3.0 * (sn - x * cn) / (x * x * x)
    }
}

/// Elementwise [`sas_3j1x_x`] over a scalar or array of `qr` values.
pub fn normalized_amplitude<Q: Query>(qr: &Q) -> Q::Output {
    qr.map_query(sas_3j1x_x)
}
