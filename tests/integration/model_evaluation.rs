//! Host-side evaluation through the ScatteringModel trait

use crate::test_helpers::array_approx_eq;
use approx::assert_relative_eq;
use ndarray::{array, Array1};
use sasphere_rs::config::EvalConfig;
use sasphere_rs::geometry::{form_volume, EffectiveRadius};
use sasphere_rs::models::sphere::{correlation, intensity_1d};
use sasphere_rs::{Result, SasError, ScatteringModel, SphereModel};
use std::f64::consts::PI;

#[test]
fn test_eval_applies_scale_volume_and_background() -> Result<()> {
    let mut model = SphereModel::with_overrides([("radius", 30.0), ("sld", 4.0)])?;
    model.parameters_mut().set("scale", 0.05)?;
    model.parameters_mut().set("background", 0.2)?;

    let q = Array1::linspace(0.0, 0.4, 41);
    let raw = intensity_1d(&q, 4.0, 6.0, 30.0);
    let expected = raw.mapv(|v| 0.05 / form_volume(30.0) * v + 0.2);

    assert!(array_approx_eq(&model.eval(&q)?, &expected, 1e-12));
    assert_eq!(model.iq(&q)?, raw);

    Ok(())
}

#[test]
fn test_forward_intensity() -> Result<()> {
    // I(0) = scale * 1e-4 * Δρ² * V + background
    let model = SphereModel::new();
    let i0 = model.eval(&array![0.0])?[0];
    let volume = 4.0 / 3.0 * PI * 50.0_f64.powi(3);
    assert_relative_eq!(i0, 1e-4 * 25.0 * volume + 0.001, max_relative = 1e-12);

    Ok(())
}

#[test]
fn test_zero_radius_gives_background() -> Result<()> {
    let model = SphereModel::with_overrides([("radius", 0.0)])?;
    let q = array![0.0, 0.1, 1.0];

    assert!(model.iq(&q)?.iter().all(|&v| v == 0.0));
    assert!(model.eval(&q)?.iter().all(|&v| v == 0.001));
    assert_eq!(model.form_volume()?, 0.0);

    let g = model.sesans(&array![0.0, 5.0])?;
    assert_eq!(g, array![1.0, 0.0]);

    Ok(())
}

#[test]
fn test_2d_matches_1d() -> Result<()> {
    let model = SphereModel::with_overrides([("radius", 80.0)])?;
    let angles = Array1::linspace(0.0, 2.0 * PI, 17);
    let q = 0.07;
    let qx = angles.mapv(|a| q * a.cos());
    let qy = angles.mapv(|a| q * a.sin());

    let i2 = model.eval_2d(&qx, &qy)?;
    let i1 = model.eval(&array![q])?[0];
    for &v in i2.iter() {
        assert_relative_eq!(v, i1, max_relative = 1e-10);
    }

    let err = model.eval_2d(&qx, &array![0.1]).unwrap_err();
    assert!(matches!(err, SasError::DimensionMismatch(_)));

    Ok(())
}

#[test]
fn test_sesans_matches_kernel() -> Result<()> {
    let model = SphereModel::with_overrides([("radius", 40.0)])?;
    let z = Array1::linspace(0.0, 120.0, 121);
    assert_eq!(model.sesans(&z)?, correlation(&z, 1.0, 6.0, 40.0));

    Ok(())
}

#[test]
fn test_parameter_order_and_lookup() -> Result<()> {
    let model = SphereModel::new();
    let names: Vec<&str> = model.parameters().iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["scale", "background", "sld", "sld_solvent", "radius"]);
    assert_eq!(model.info().name, "sphere");
    assert_eq!(model.effective_radius(EffectiveRadius::Radius)?, 50.0);

    let err = SphereModel::with_overrides([("length", 1.0)]).unwrap_err();
    assert!(matches!(err, SasError::ParameterNotFound(_)));

    Ok(())
}

#[test]
fn test_fq() -> Result<()> {
    let model = SphereModel::with_overrides([("sld", 6.0), ("sld_solvent", 1.0)])?;
    let q = Array1::linspace(0.0, 0.2, 21);
    let (f1, f2) = model.fq(&q)?;
    assert_eq!(f2, model.iq(&q)?);
    assert!(f1[0] > 0.0);

    Ok(())
}

#[test]
fn test_parallel_and_sequential_agree() -> Result<()> {
    let q = Array1::linspace(0.0, 1.0, 20_000);
    let parallel = SphereModel::new().with_config(EvalConfig {
        parallel: true,
        parallel_threshold: 1,
    });
    let sequential = SphereModel::new().with_config(EvalConfig::sequential());

    assert_eq!(parallel.eval(&q)?, sequential.eval(&q)?);

    Ok(())
}

#[test]
fn test_concurrent_calls_are_identical() -> Result<()> {
    let model = SphereModel::with_overrides([("radius", 75.0)])?;
    let q = Array1::linspace(0.0, 0.5, 1000);
    let reference = model.eval(&q)?;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| model.eval(&q))).collect();
        for handle in handles {
            let result = handle.join().expect("evaluation thread panicked");
            assert_eq!(result.unwrap(), reference);
        }
    });

    Ok(())
}
