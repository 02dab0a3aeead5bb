//! Integration tests for dictionary transforms and folds
//! Exercises the public API the way a caller builds, transforms and folds a dictionary

use anyhow::Result;
use dictmap::{fold_dict, transform_dict, try_transform_dict, Dict, ErrorCode};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Boxed {
    value: String,
}

fn boxed(s: &str) -> Boxed {
    Boxed {
        value: s.to_string(),
    }
}

#[test]
fn test_all_present_values_are_wrapped() -> Result<()> {
    let source: Dict<String> = Dict::from_json_str(r#"{"a": "a", "b": "b", "c": "c"}"#)?;

    let result = transform_dict(&source, |s, _| boxed(s));

    let rendered: serde_json::Value = serde_json::from_str(&result.to_json_string()?)?;
    assert_eq!(
        rendered,
        json!({"a": {"value": "a"}, "b": {"value": "b"}, "c": {"value": "c"}})
    );
    Ok(())
}

#[test]
fn test_absent_value_is_dropped_and_index_is_positional() -> Result<()> {
    let source: Dict<String> = Dict::from_json_str(r#"{"a": "a", "b": null, "c": "c"}"#)?;
    let mut indices = Vec::new();

    let result = transform_dict(&source, |s, index| {
        indices.push((s.clone(), index));
        boxed(s)
    });

    assert_eq!(
        result.to_json_string()?,
        r#"{"a":{"value":"a"},"c":{"value":"c"}}"#
    );
    assert_eq!(indices, vec![("a".to_string(), 0), ("c".to_string(), 2)]);

    // source still carries its absent entry
    assert_eq!(source.slot("b"), Some(None));
    assert_eq!(source.len(), 3);
    Ok(())
}

#[test]
fn test_fold_over_parsed_dictionary() -> Result<()> {
    let prices: Dict<u32> = Dict::from_json_str(r#"{"apple": 3, "pear": null, "plum": 5}"#)?;

    let summary = fold_dict(
        &prices,
        |(count, total): (usize, u32), price, key| {
            assert_ne!(key, "pear");
            (count + 1, total + price)
        },
        (0usize, 0u32),
    );

    assert_eq!(summary, (2, 8));
    Ok(())
}

#[test]
fn test_fold_on_empty_dictionary_returns_initial() -> Result<()> {
    let empty: Dict<u32> = Dict::from_json_str("{}")?;
    let result = fold_dict(&empty, |acc: Vec<u32>, _, _| acc, vec![7, 8]);
    assert_eq!(result, vec![7, 8]);
    Ok(())
}

#[test]
fn test_callback_error_propagates_unchanged() -> Result<()> {
    let source: Dict<String> = Dict::from_json_str(r#"{"port": "8080", "timeout": "soon"}"#)?;

    let err = try_transform_dict(&source, |s, _| s.parse::<u16>()).unwrap_err();

    assert_eq!(err, "soon".parse::<u16>().unwrap_err());
    Ok(())
}

#[test]
fn test_chained_transforms_keep_key_order() {
    let source = Dict::from_iter([
        ("third", Some(3)),
        ("first", Some(1)),
        ("gone", None),
        ("second", Some(2)),
    ]);

    let doubled = source.map_values(|v| v * 2);
    let labelled = doubled.transform(|v, index| format!("{}@{}", v, index));

    let entries: Vec<(&str, &str)> = labelled
        .present()
        .map(|(key, value)| (key, value.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![("third", "6@0"), ("first", "2@1"), ("second", "4@2")]
    );
}

#[test]
fn test_duplicate_keys_are_reported_with_codes() {
    let err = Dict::<u8>::from_json_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PARSE_DUPLICATE_KEY);
    assert!(err.to_string().starts_with("[E1003]"));

    let err = Dict::try_from_entries([("x", Some(1)), ("x", None)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::VALIDATION_DUPLICATE_KEY);
    assert_eq!(err.key(), Some("x"));
}
