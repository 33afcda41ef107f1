//! Integration tests for OpsConfig and the serde representation of vectors.

use smallest_linear_algebra::{ColumnVector, CrossProductConvention, OpsConfig, RowVector};

// ---------------------------------------------------------------------------
// Config / CrossProductConvention
// ---------------------------------------------------------------------------

#[test]
fn convention_default_is_standard() {
    assert_eq!(CrossProductConvention::default(), CrossProductConvention::Standard);
}

#[test]
fn convention_from_str_is_case_insensitive() {
    let c: CrossProductConvention = "Legacy".parse().unwrap();
    assert_eq!(c, CrossProductConvention::Legacy);
    let c: CrossProductConvention = " standard ".parse().unwrap();
    assert_eq!(c, CrossProductConvention::Standard);
}

#[test]
fn convention_from_str_unknown_errors() {
    let result: Result<CrossProductConvention, _> = "left-handed".parse();
    let err = result.unwrap_err();
    assert!(err.contains("left-handed"));
}

#[test]
fn ops_config_serializes_to_json() {
    let cfg = OpsConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("cross_product"));
    assert!(json.contains("Standard"));
}

#[test]
fn ops_config_round_trips_json() {
    let cfg = OpsConfig::new(CrossProductConvention::Legacy, 1e-9);
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: OpsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn ops_config_missing_fields_use_defaults() {
    let cfg: OpsConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, OpsConfig::default());
}

// ---------------------------------------------------------------------------
// Vector serde
// ---------------------------------------------------------------------------

#[test]
fn row_vector_serializes_flat() {
    let v = RowVector::new(vec![1.0, 2.5]).unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.5]");
    let back: RowVector = serde_json::from_str("[1, 2.5]").unwrap();
    assert_eq!(back, v);
}

#[test]
fn column_vector_serializes_nested() {
    let c = ColumnVector::new([[1.0], [2.0]]).unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "[[1.0],[2.0]]");
    let back: ColumnVector = serde_json::from_str("[[1.0],[2.0]]").unwrap();
    assert_eq!(back, c);
}

#[test]
fn column_vector_deserialize_rejects_bad_shape() {
    let result: Result<ColumnVector, _> = serde_json::from_str("[[1.0],[2.0, 3.0]]");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid column shape"));
}
