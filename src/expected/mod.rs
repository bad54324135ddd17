// SPDX-License-Identifier: GPL-3.0-only

//! Expected keyboard fixtures.
//!
//! This module provides a small declarative vocabulary for writing down the
//! keyboard a test expects: keys with their labels or icons, what they output,
//! and the more keys they show on long press.
//!
//! # Features
//!
//! - **Canonical keys**: every call shape yields the same `{visual, output, more_keys}` form
//! - **Composable rows**: `join_keys` flattens keys, key groups and text in order
//! - **Additional more keys**: keys of [`KeyKind::Additional`] placed by a marker of
//!   [`KeyKind::Marker`] in the more keys
//! - **Functional keys**: delete, enter, shortcut, settings, emoji and space
//! - **JSON fixtures**: the same keys can be declared in JSON files
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use expected_layout::expected::{
//!     additional_more_keys_marker, key, key_with_output, more_key, FunctionalKeys,
//! };
//! use expected_layout::icons::IconSet;
//! use expected_layout::join_keys;
//!
//! let functional = FunctionalKeys::resolve(&IconSet::builtin())?;
//! let e_popup = [more_key("é"), additional_more_keys_marker(), more_key("è")];
//!
//! let row = join_keys![
//!     "q",
//!     "w",
//!     key("e").with_more_keys(e_popup),
//!     key_with_output(".com", ".com "),
//!     functional.delete.clone(),
//! ];
//! ```
//!
//! ## Error Handling
//!
//! The typed factories cannot express an invalid key. [`KeyBuilder`] and the
//! JSON loaders check their input and return a [`FixtureError`].

// Sub-modules
pub mod builder;
pub mod functional;
pub mod join;
pub mod types;

// Re-export public API - Error handling types
pub use types::FixtureError;

// Re-export public API - Data structures
pub use types::{ExpectedAdditionalMoreKey, ExpectedKey, KeyKind, Output, Visual};

// Re-export public API - Factories
pub use builder::{
    additional_more_key, additional_more_keys_marker, key, key_with_more_keys, key_with_output,
    more_key, more_key_with_output, KeyBuilder,
};
pub use functional::FunctionalKeys;
pub use join::{
    join_json_elements, join_keys, join_more_keys, parse_fixture_file, parse_fixture_from_string,
    KeyElement,
};

// ============================================================================
// Public API Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{CODE_DELETE, CODE_SHIFT_ENTER};
    use crate::icons::{IconResolver, IconSet};

    /// Test 1: A bottom row declared from shared pieces
    ///
    /// Verifies that functional keys, shared key groups and plain text compose
    /// into the expected order.
    #[test]
    fn test_compose_bottom_row() {
        let icons = IconSet::builtin();
        let functional = FunctionalKeys::resolve(&icons).unwrap();

        let punctuation = vec![more_key(","), more_key(".")];
        let enter = functional
            .enter
            .with_more_keys([key_with_output(icons.resolve("enter_key").unwrap(), CODE_SHIFT_ENTER)]);

        let row = crate::join_keys![
            functional.emoji.clone(),
            punctuation.clone(),
            functional.space.clone(),
            "/",
            enter.clone(),
        ];

        assert_eq!(row.len(), 6);
        assert_eq!(row[0], functional.emoji);
        assert_eq!(&row[1..3], punctuation.as_slice());
        assert_eq!(row[3], functional.space);
        assert_eq!(row[4], key("/"));
        assert_eq!(row[5].output(), functional.enter.output());
        assert_eq!(row[5].more_keys().len(), 1);
    }

    /// Test 2: Additional more keys declared apart from their marker
    ///
    /// The marker stays in place; substitution belongs to the comparison side.
    #[test]
    fn test_additional_more_keys_keep_marker_in_declaration() {
        let n = key("n").with_more_keys(join_more_keys([
            KeyElement::from(more_key("ń")),
            KeyElement::from(additional_more_keys_marker()),
            KeyElement::from("ñ"),
        ]));
        let additional = [additional_more_key("ŋ")];

        assert!(n.more_keys()[1].is_additional_more_key_marker());
        assert_eq!(n.more_keys()[2], more_key("ñ"));
        assert_eq!(additional[0].as_key().kind(), KeyKind::Additional);
        assert_ne!(additional[0].as_key(), &key("ŋ"));
    }

    /// Test 3: Typed and JSON declarations agree
    #[test]
    fn test_json_fixture_matches_typed_fixture() {
        let icons = IconSet::builtin();
        let delete_id = icons.resolve("delete_key").unwrap();

        let json = format!(
            r#"["a", [{{"label": "b"}}], {{"icon": {}, "output_code": {}}}]"#,
            delete_id.0, CODE_DELETE.0
        );
        let from_json = parse_fixture_from_string(&json).unwrap();
        let typed = crate::join_keys![
            "a",
            vec![key("b")],
            FunctionalKeys::resolve(&icons).unwrap().delete
        ];

        assert_eq!(from_json, typed);
    }

    /// Test 4: Public API type exports
    #[test]
    fn test_public_api_type_exports() {
        let _visual = Visual::Label("a".to_string());
        let _kind = KeyKind::default();
        let _output = Output::Text("a".to_string());
        let _builder = KeyBuilder::new().label("a");
        let _element = KeyElement::Text("a".to_string());
        let _error = FixtureError::invalid_argument("test");
        let _key: ExpectedKey = key_with_more_keys(&key("a"), [more_key("b")]);
        let _more: ExpectedKey = more_key_with_output("b", "bb");
        let _additional: ExpectedAdditionalMoreKey = additional_more_key("c");
        let joined = join_json_elements(&[]).unwrap();
        assert!(joined.is_empty());
    }
}
