//! Descriptor export consumed by the host registry

use sasphere_rs::parameters::ParameterKind;
use sasphere_rs::{Result, SPHERE_INFO};
use serde_json::Value;

#[test]
fn test_json_parameter_table() -> Result<()> {
    let json: Value = serde_json::from_str(&SPHERE_INFO.to_json()?)?;

    assert_eq!(json["name"], "sphere");
    assert_eq!(json["category"], "shape:sphere");
    assert_eq!(json["have_fq"], true);
    assert_eq!(json["vectorized"], true);
    assert_eq!(json["effective_radius_type"], serde_json::json!(["radius"]));

    let params = json["parameters"].as_array().expect("parameters array");
    let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();
    assert_eq!(names, vec!["sld", "sld_solvent", "radius"]);

    let sld = &params[0];
    assert_eq!(sld["units"], "1e-6/Ang^2");
    assert_eq!(sld["default"], 1.0);
    assert_eq!(sld["bounds"]["min"], Value::Null);
    assert_eq!(sld["bounds"]["max"], Value::Null);
    assert_eq!(sld["kind"], "sld");

    let radius = &params[2];
    assert_eq!(radius["units"], "Ang");
    assert_eq!(radius["default"], 50.0);
    assert_eq!(radius["bounds"]["min"], 0.0);
    assert_eq!(radius["bounds"]["max"], Value::Null);
    assert_eq!(radius["kind"], "volume");
    assert_eq!(radius["description"], "Sphere radius");

    Ok(())
}

#[test]
fn test_kinds_split_contrast_from_volume() {
    let kinds: Vec<ParameterKind> = SPHERE_INFO.parameters.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![ParameterKind::Sld, ParameterKind::Sld, ParameterKind::Volume]
    );
}

#[test]
fn test_host_parameters_visible() {
    let scale = SPHERE_INFO.parameter("scale").expect("scale");
    assert_eq!(scale.default, 1.0);
    let background = SPHERE_INFO.parameter("background").expect("background");
    assert_eq!(background.default, 0.001);
    assert!(SPHERE_INFO.parameter("length").is_none());
}
