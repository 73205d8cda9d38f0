use super::*;

#[test]
fn user_value_shadows_default() {
    let mut s = FilterSettings::new();
    s.set_default_double("fov", 90.0);
    assert_eq!(s.get_double("fov"), 90.0);

    s.set_double("fov", 45.0);
    assert_eq!(s.get_double("fov"), 45.0);
    assert_eq!(s.get_default_double("fov"), 90.0);

    s.erase("fov");
    assert_eq!(s.get_double("fov"), 90.0);
}

#[test]
fn unknown_key_reads_as_zero() {
    let s = FilterSettings::new();
    assert_eq!(s.get_double("rot_x"), 0.0);
    assert!(!s.has_user_value("rot_x"));
}

#[test]
fn json_holds_only_user_values() {
    let mut s = FilterSettings::from_json_str(r#"{ "fov": 60.0, "scale_x": 150 }"#).unwrap();
    assert_eq!(s.get_double("fov"), 60.0);
    assert_eq!(s.get_double("scale_x"), 150.0);

    s.set_default_double("scale_y", 100.0);
    let json: serde_json::Value = serde_json::from_str(&s.to_json_string().unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "fov": 60.0, "scale_x": 150.0 }));
}

#[test]
fn non_numeric_json_is_a_serde_error() {
    let err = FilterSettings::from_json_str(r#"{ "fov": "wide" }"#).unwrap_err();
    assert!(matches!(err, FxError::Serde(_)));

    let err = FilterSettings::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, FxError::Serde(_)));
}

#[test]
fn apply_overlays_user_values_and_keeps_defaults() {
    let mut base = FilterSettings::new();
    base.set_default_double("fov", 90.0);
    base.set_double("rot_x", 10.0);

    let mut patch = FilterSettings::new();
    patch.set_double("rot_x", 20.0);
    patch.set_double("pos_z", -5.0);

    base.apply(&patch);
    assert_eq!(base.get_double("rot_x"), 20.0);
    assert_eq!(base.get_double("pos_z"), -5.0);
    assert_eq!(base.get_double("fov"), 90.0);
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let err = FilterSettings::from_path(Path::new("/nonexistent/perspective.json")).unwrap_err();
    assert!(matches!(err, FxError::Other(_)));
    assert!(err.to_string().contains("perspective.json"));
}
