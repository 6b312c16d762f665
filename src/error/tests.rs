//! Unit tests for error types

use super::*;

#[test]
fn test_api_error_display() {
    let err = StatsError::Api {
        status: 502,
        message: "backend unreachable".to_string(),
    };
    assert_eq!(err.to_string(), "API error 502: backend unreachable");
    assert_eq!(err.status(), Some(502));
}

#[test]
fn test_identity_missing_display() {
    let err = StatsError::IdentityMissing;
    assert_eq!(err.to_string(), "no token or user id provided");
    assert_eq!(err.status(), None);
}

#[test]
fn test_json_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: StatsError = parse_err.into();
    assert!(matches!(err, StatsError::Json(_)));
    assert!(err.to_string().starts_with("JSON parsing failed"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: StatsError = io_err.into();
    assert!(matches!(err, StatsError::Io(_)));
}
