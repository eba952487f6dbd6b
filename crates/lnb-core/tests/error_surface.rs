use lnb_core::errors::{ErrorInfo, LnbError};
use lnb_core::SearchFamily;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("line", "12")
        .with_context("reason", "example")
}

#[test]
fn token_error_surface() {
    let err = LnbError::Token(sample_info("T001", "non-numeric field"));
    assert_eq!(err.info().code, "T001");
    assert!(err.info().context.contains_key("line"));
}

#[test]
fn missing_marker_names_the_marker() {
    let err = LnbError::missing_marker("Direction numbers");
    assert_eq!(err.info().code, "missing-marker");
    assert_eq!(
        err.info().context.get("marker").map(String::as_str),
        Some("Direction numbers")
    );
    assert!(err.to_string().starts_with("missing marker:"));
}

#[test]
fn dimension_error_display_includes_hint() {
    let err = LnbError::Dimension(sample_info("D001", "coordinate too large").with_hint("use 0..dim"));
    assert_eq!(
        err.to_string(),
        "dimension error: D001: coordinate too large [line=12, reason=example] (use 0..dim)"
    );
    let bare = LnbError::Token(ErrorInfo::new("size-zero", "point count must be positive"));
    assert_eq!(bare.to_string(), "token error: size-zero: point count must be positive");
}

#[test]
fn errors_round_trip_through_json() {
    let err = LnbError::Config(sample_info("C001", "unknown family"));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Config\""));
    let decoded: LnbError = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, err);
}

#[test]
fn family_tags_parse_and_display() {
    for family in SearchFamily::ALL {
        assert_eq!(family.as_str().parse::<SearchFamily>().unwrap(), family);
    }
    let err = "digital-halton".parse::<SearchFamily>().unwrap_err();
    assert!(matches!(err, LnbError::Config(_)));
    assert!(SearchFamily::DigitalPolynomial.uses_polynomial_size());
    assert!(!SearchFamily::Ordinary.reads_side_file());
}
