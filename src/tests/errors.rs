use serde_json::json;

use crate::{
    error::{ConformanceError, Error, MatchError},
    tagged::get_key,
};

#[test]
fn it_reports_the_key_count_found() {
    assert_eq!(
        ConformanceError::KeyCount { count: 0 }.to_string(),
        "Expected exactly one key but found 0"
    );
    assert_eq!(
        get_key(&json!({ "a": 1, "b": 2 })).unwrap_err().to_string(),
        "Expected exactly one key but found 2"
    );
}

#[test]
fn it_reports_what_a_non_composite_was() {
    assert_eq!(
        get_key(&json!("foo")).unwrap_err().to_string(),
        "Expected a key-tagged value but found a string"
    );
    assert_eq!(
        get_key(&json!(null)).unwrap_err().to_string(),
        "Expected a key-tagged value but found null"
    );
}

#[test]
fn it_reports_the_unmatched_key() {
    let err = MatchError {
        key: "alucard".to_string(),
    };

    assert_eq!(err.to_string(), "No action provided for key: alucard");
}

#[test]
fn it_is_transparent_at_the_crate_level() {
    let inner = ConformanceError::KeyCount { count: 3 };
    let outer = Error::from(inner.clone());

    assert_eq!(outer.to_string(), inner.to_string());

    let inner = MatchError {
        key: "alucard".to_string(),
    };
    let outer = Error::from(inner.clone());

    assert_eq!(outer.to_string(), inner.to_string());
}

#[test]
fn it_discriminates_the_two_kinds() {
    let conformance = Error::from(ConformanceError::KeyCount { count: 0 });
    let unmatched = Error::from(MatchError {
        key: "alucard".to_string(),
    });

    assert!(matches!(conformance, Error::Conformance(_)));
    assert!(matches!(unmatched, Error::Match(_)));
    assert_ne!(conformance, unmatched);
}
