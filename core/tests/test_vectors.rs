//! Run the dispatcher against the JSON cases stored in `test-vectors/`.
//!
//! Each case names an operation, an input text, and either the expected
//! result or the expected error message.

use transform_core::transform;

#[test]
fn transform_test_vectors() {
    let raw = include_str!("../../test-vectors/transform.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let cases = vectors["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let name = case["name"].as_str().unwrap();
        let operation = case["operation"].as_str().unwrap();
        let text = case["text"].as_str().unwrap();

        let outcome = transform(text, operation);
        match (case.get("expected_result"), case.get("expected_error")) {
            (Some(expected), None) => {
                assert_eq!(outcome.unwrap(), expected.as_str().unwrap(), "{name}");
            }
            (None, Some(expected)) => {
                let err = outcome.unwrap_err();
                assert_eq!(err.to_string(), expected.as_str().unwrap(), "{name}");
            }
            _ => panic!("{name}: case needs exactly one of expected_result / expected_error"),
        }
    }
}

#[test]
fn transform_test_vectors_are_stable_across_calls() {
    let raw = include_str!("../../test-vectors/transform.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let operation = case["operation"].as_str().unwrap();
        let text = case["text"].as_str().unwrap();
        assert_eq!(transform(text, operation), transform(text, operation));
    }
}
