// SPDX-License-Identifier: GPL-3.0-only

//! Joining keys, key sequences and text into one ordered key sequence.
//!
//! Rows and more key groups are usually assembled from smaller shared pieces.
//! The joiner flattens exactly one level: a sequence argument contributes its
//! keys in order, while a text argument is promoted to a label key.

use crate::expected::builder::key;
use crate::expected::types::{ExpectedAdditionalMoreKey, ExpectedKey, FixtureError};
use serde::Deserialize;
use serde_json::Value;
use std::fs;

/// One argument of [`join_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyElement {
    /// A single key, appended as is
    Key(ExpectedKey),
    /// A sequence of keys, appended in order
    Keys(Vec<ExpectedKey>),
    /// Plain text, promoted to a key whose visual and output are the text
    Text(String),
}

impl From<ExpectedKey> for KeyElement {
    fn from(key: ExpectedKey) -> Self {
        KeyElement::Key(key)
    }
}

impl From<&ExpectedKey> for KeyElement {
    fn from(key: &ExpectedKey) -> Self {
        KeyElement::Key(key.clone())
    }
}

impl From<ExpectedAdditionalMoreKey> for KeyElement {
    fn from(key: ExpectedAdditionalMoreKey) -> Self {
        KeyElement::Key(key.into_key())
    }
}

impl From<Vec<ExpectedKey>> for KeyElement {
    fn from(keys: Vec<ExpectedKey>) -> Self {
        KeyElement::Keys(keys)
    }
}

impl From<&[ExpectedKey]> for KeyElement {
    fn from(keys: &[ExpectedKey]) -> Self {
        KeyElement::Keys(keys.to_vec())
    }
}

impl<const N: usize> From<[ExpectedKey; N]> for KeyElement {
    fn from(keys: [ExpectedKey; N]) -> Self {
        KeyElement::Keys(keys.into())
    }
}

impl From<&str> for KeyElement {
    fn from(text: &str) -> Self {
        KeyElement::Text(text.to_string())
    }
}

impl From<String> for KeyElement {
    fn from(text: String) -> Self {
        KeyElement::Text(text)
    }
}

/// Joins keys, key sequences and text into one ordered sequence.
///
/// The output order mirrors the input order. Nothing is reordered or
/// deduplicated, and no elements give an empty sequence.
pub fn join_keys<I>(elements: I) -> Vec<ExpectedKey>
where
    I: IntoIterator,
    I::Item: Into<KeyElement>,
{
    let mut joined = Vec::new();
    for element in elements {
        match element.into() {
            KeyElement::Key(key) => joined.push(key),
            KeyElement::Keys(keys) => joined.extend(keys),
            KeyElement::Text(text) => {
                tracing::trace!(text = %text, "promoting text to expected key");
                joined.push(key(text));
            }
        }
    }
    tracing::debug!(count = joined.len(), "joined expected keys");
    joined
}

/// Joins more keys; same as [`join_keys`].
pub fn join_more_keys<I>(elements: I) -> Vec<ExpectedKey>
where
    I: IntoIterator,
    I::Item: Into<KeyElement>,
{
    join_keys(elements)
}

/// Joins untyped JSON elements into one ordered sequence.
///
/// A string is promoted to a label key, an object is read as a key and an
/// array must hold key objects only. Any other value is rejected with
/// [`FixtureError::UnsupportedElement`].
pub fn join_json_elements(elements: &[Value]) -> Result<Vec<ExpectedKey>, FixtureError> {
    let typed = elements
        .iter()
        .enumerate()
        .map(|(index, element)| json_element(index, element))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join_keys(typed))
}

/// Parses a JSON array of elements and joins it.
///
/// The elements follow the rules of [`join_json_elements`]. Errors carry no
/// file path; use [`parse_fixture_file`] for fixtures on disk.
///
/// # Arguments
///
/// * `json` - JSON array of strings, key objects and arrays of key objects
///
/// # Returns
///
/// Returns the joined keys in declaration order, or a `FixtureError` if the
/// JSON is malformed or an element is not supported.
///
/// # Example
///
/// ```rust,ignore
/// use expected_layout::expected::parse_fixture_from_string;
///
/// let json = r#"["q", { "label": "w", "more_keys": [{ "label": "2" }] }]"#;
///
/// match parse_fixture_from_string(json) {
///     Ok(keys) => println!("Parsed {} keys", keys.len()),
///     Err(e) => eprintln!("Parse error: {}", e),
/// }
/// ```
pub fn parse_fixture_from_string(json: &str) -> Result<Vec<ExpectedKey>, FixtureError> {
    let elements: Vec<Value> = serde_json::from_str(json)?;
    join_json_elements(&elements)
}

/// Reads a JSON array of elements from a file and joins it.
///
/// I/O errors (file not found, permission denied) and JSON errors are both
/// reported with the file path.
///
/// # Arguments
///
/// * `path` - Path to the JSON fixture file
///
/// # Returns
///
/// Returns the joined keys in declaration order, or a `FixtureError` if the
/// file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use expected_layout::expected::parse_fixture_file;
///
/// match parse_fixture_file("fixtures/qwerty_top_row.json") {
///     Ok(keys) => {
///         for key in keys {
///             println!("{}", key);
///         }
///     }
///     Err(e) => eprintln!("Failed to load fixture: {}", e),
/// }
/// ```
pub fn parse_fixture_file(path: &str) -> Result<Vec<ExpectedKey>, FixtureError> {
    let json_str =
        fs::read_to_string(path).map_err(|e| FixtureError::io_error_with_path(e, path))?;

    let elements: Vec<Value> = serde_json::from_str(&json_str)
        .map_err(|e| FixtureError::json_error_with_path(e, path))?;

    tracing::debug!(path, elements = elements.len(), "loaded fixture file");
    join_json_elements(&elements)
}

fn json_element(index: usize, element: &Value) -> Result<KeyElement, FixtureError> {
    match element {
        Value::String(text) => Ok(KeyElement::Text(text.clone())),
        Value::Object(_) => json_key(index, element).map(KeyElement::Key),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(_) => json_key(index, item),
                other => Err(FixtureError::unsupported_element(
                    index,
                    format!("{} inside a key sequence", json_kind(other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(KeyElement::Keys),
        other => Err(FixtureError::unsupported_element(index, json_kind(other))),
    }
}

fn json_key(index: usize, value: &Value) -> Result<ExpectedKey, FixtureError> {
    ExpectedKey::deserialize(value).map_err(|e| {
        FixtureError::invalid_argument(format!("element {}: {}", index, e))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Joins keys, key sequences and text of mixed types.
///
/// ```rust,ignore
/// use expected_layout::join_keys;
/// use expected_layout::expected::key;
///
/// let row = join_keys![key("a"), [key("b"), key("c")], "d"];
/// ```
#[macro_export]
macro_rules! join_keys {
    () => {
        ::std::vec::Vec::<$crate::expected::ExpectedKey>::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::expected::join_keys([$($crate::expected::KeyElement::from($element)),+])
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CODE_DELETE;
    use crate::expected::builder::{
        additional_more_key, additional_more_keys_marker, key_with_output, more_key,
    };
    use crate::icons::IconId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_join_flattens_one_level_in_order() {
        let a = key("a");
        let b = key("b");
        let c = key_with_output("c", "cc");

        let joined = join_keys([
            KeyElement::from(&a),
            KeyElement::from(vec![b.clone(), c.clone()]),
            KeyElement::from("d"),
        ]);

        assert_eq!(joined, vec![a, b, c, key("d")]);
        assert_eq!(joined[3].output().text(), Some("d"));
    }

    #[test]
    fn test_join_empty_input() {
        assert!(join_keys(Vec::<KeyElement>::new()).is_empty());
        assert!(join_keys![].is_empty());
    }

    #[test]
    fn test_join_keeps_duplicates() {
        let joined = join_keys(["x", "x", "y"]);
        assert_eq!(joined, vec![key("x"), key("x"), key("y")]);
    }

    #[test]
    fn test_join_macro_accepts_mixed_elements() {
        let delete = key_with_output(IconId(2), CODE_DELETE);
        let joined = join_keys![
            "q",
            [more_key("1"), more_key("!")],
            delete.clone(),
            additional_more_key("ñ"),
            String::from("z"),
        ];
        assert_eq!(
            joined,
            vec![
                key("q"),
                key("1"),
                key("!"),
                delete,
                additional_more_key("ñ").into_key(),
                key("z")
            ]
        );
        assert!(joined[4].is_additional_more_key());
        assert_ne!(joined[4], key("ñ"));
    }

    #[test]
    fn test_join_keeps_additional_and_marker_kinds() {
        let joined = join_more_keys([
            KeyElement::from(additional_more_key("ä")),
            KeyElement::from(vec![additional_more_keys_marker(), more_key("%")]),
        ]);
        assert!(joined[0].is_additional_more_key());
        assert!(joined[1].is_additional_more_key_marker());
        assert!(!joined[2].is_additional_more_key_marker());

        let owner = key("a").with_more_keys(joined.clone());
        assert_eq!(owner.more_keys(), joined.as_slice());
        assert_eq!(owner.to_string(), "a^[+ä, {%}, %]");
    }

    #[test]
    fn test_join_more_keys_alias() {
        let shared = vec![more_key("é"), more_key("è")];
        assert_eq!(
            join_more_keys([KeyElement::from(shared.as_slice()), KeyElement::from("ê")]),
            join_keys([KeyElement::from(shared.clone()), KeyElement::from("ê")])
        );
    }

    #[test]
    fn test_join_json_elements() {
        let elements: Vec<Value> = serde_json::from_str(
            r#"[
                "a",
                [{ "label": "b" }, { "label": "c", "output_text": "cc" }],
                { "icon": 2, "output_code": -5 }
            ]"#,
        )
        .unwrap();

        let joined = join_json_elements(&elements).unwrap();
        assert_eq!(
            joined,
            vec![
                key("a"),
                key("b"),
                key_with_output("c", "cc"),
                key_with_output(IconId(2), CODE_DELETE),
            ]
        );
    }

    #[test]
    fn test_join_json_rejects_unsupported_elements() {
        for (json, found) in [
            (r#"["a", 42]"#, "number"),
            (r#"[true]"#, "boolean"),
            (r#"["a", "b", null]"#, "null"),
        ] {
            let err = parse_fixture_from_string(json).unwrap_err();
            match err {
                FixtureError::UnsupportedElement { found: f, .. } => assert_eq!(f, found),
                other => panic!("Expected UnsupportedElement for {}, got {:?}", json, other),
            }
        }

        match parse_fixture_from_string(r#"["a", "b", null]"#) {
            Err(FixtureError::UnsupportedElement { index, .. }) => assert_eq!(index, 2),
            other => panic!("Expected UnsupportedElement, got {:?}", other),
        }
    }

    #[test]
    fn test_join_json_does_not_flatten_nested_sequences() {
        let err = parse_fixture_from_string(r#"[[[{ "label": "a" }]]]"#).unwrap_err();
        match err {
            FixtureError::UnsupportedElement { index, found, .. } => {
                assert_eq!(index, 0);
                assert_eq!(found, "array inside a key sequence");
            }
            other => panic!("Expected UnsupportedElement, got {:?}", other),
        }

        let err = parse_fixture_from_string(r#"[["a"]]"#).unwrap_err();
        assert!(matches!(err, FixtureError::UnsupportedElement { .. }));
    }

    #[test]
    fn test_join_json_reports_invalid_key_objects() {
        let err = parse_fixture_from_string(r#"["a", { "icon": 2 }]"#).unwrap_err();
        match err {
            FixtureError::InvalidArgument { message, .. } => {
                assert!(message.starts_with("element 1"), "got: {}", message);
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fixture_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"["q", "w", {{ "label": "e", "more_keys": [{{ "label": "é" }}] }}]"#)
            .unwrap();

        let joined = parse_fixture_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            joined,
            vec![key("q"), key("w"), key("e").with_more_keys([more_key("é")])]
        );
    }

    #[test]
    fn test_parse_fixture_file_errors() {
        let err = parse_fixture_file("/nonexistent/path/fixture.json").unwrap_err();
        assert!(matches!(err, FixtureError::IoError { .. }));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "not": "an array" }}"#).unwrap();
        let err = parse_fixture_file(file.path().to_str().unwrap()).unwrap_err();
        match err {
            FixtureError::JsonError { file_path, .. } => assert!(file_path.is_some()),
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fixture_from_string() {
        let keys = parse_fixture_from_string(r#"["q", [{ "kind": "additional", "label": "ä" }]]"#)
            .unwrap();
        assert_eq!(keys, vec![key("q"), additional_more_key("ä").into_key()]);

        let err = parse_fixture_from_string("[\n  \"q\",\n  oops\n]").unwrap_err();
        match err {
            FixtureError::JsonError {
                file_path,
                line_number,
                ..
            } => {
                assert!(file_path.is_none());
                assert_eq!(line_number, Some(3));
            }
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }
}
