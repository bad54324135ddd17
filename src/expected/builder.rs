// SPDX-License-Identifier: GPL-3.0-only

//! Factory functions for expected keys.
//!
//! The free functions here are the vocabulary used when writing expected
//! layouts by hand. They are named in lower case so that fixture declarations
//! read like the keyboard they describe:
//!
//! ```rust,ignore
//! use expected_layout::expected::{key, key_with_output, more_key};
//!
//! let row = vec![
//!     key("q").with_more_keys([more_key("1")]),
//!     key("e").with_more_keys([more_key("é"), more_key("è")]),
//!     key_with_output(".com", ".com "),
//! ];
//! ```
//!
//! [`KeyBuilder`] accepts every field as optional and checks the combination
//! when the key is built. It is also the serde representation of a key.

use crate::app_settings::ADDITIONAL_MORE_KEY_MARKER;
use crate::codes::KeyCode;
use crate::expected::types::{
    ExpectedAdditionalMoreKey, ExpectedKey, FixtureError, KeyKind, Output, Visual,
};
use crate::icons::IconId;
use serde::{Deserialize, Serialize};

/// Creates a key whose visual and output are `label`.
pub fn key(label: impl Into<String>) -> ExpectedKey {
    let label = label.into();
    ExpectedKey::new(label.clone(), label, Vec::new())
}

/// Creates a key with an explicit output.
///
/// The visual is a label or an [`IconId`]; the output is text or a
/// [`KeyCode`].
pub fn key_with_output(visual: impl Into<Visual>, output: impl Into<Output>) -> ExpectedKey {
    ExpectedKey::new(visual, output, Vec::new())
}

/// Creates a copy of `key` that has `more_keys` as its long press alternatives.
///
/// The visual and output of `key` are kept as they are.
pub fn key_with_more_keys(
    key: &ExpectedKey,
    more_keys: impl IntoIterator<Item = ExpectedKey>,
) -> ExpectedKey {
    key.with_more_keys(more_keys)
}

/// Creates a more key whose visual and output are `label`.
pub fn more_key(label: impl Into<String>) -> ExpectedKey {
    key(label)
}

/// Creates a more key with an explicit output.
pub fn more_key_with_output(
    visual: impl Into<Visual>,
    output: impl Into<Output>,
) -> ExpectedKey {
    key_with_output(visual, output)
}

/// Creates an additional more key whose visual and output are `label`.
///
/// Additional more keys are declared independently of the other more keys.
/// Their position in the popup is given by [`additional_more_keys_marker`]
/// entries in the regular more keys.
pub fn additional_more_key(label: impl Into<String>) -> ExpectedAdditionalMoreKey {
    ExpectedAdditionalMoreKey::new(label)
}

/// Creates the `%` placeholder more key.
///
/// The marker has its own [`KeyKind`], so it never equals a regular `%` key.
pub fn additional_more_keys_marker() -> ExpectedKey {
    ExpectedKey::marker()
}

/// Builder for an [`ExpectedKey`] with every field optional.
///
/// Exactly one of `label` and `icon` must be set, and at most one of
/// `output_text` and `output_code`. A label key without an output outputs
/// its label. An icon key has no label to fall back to and needs an output.
///
/// An additional more key takes a label only. A marker takes no other field
/// than its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyBuilder {
    /// Role of the key in a more keys declaration
    #[serde(default, skip_serializing_if = "is_regular")]
    pub kind: KeyKind,

    /// Text label drawn on the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Icon drawn on the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconId>,

    /// Literal output text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,

    /// Numeric output code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_code: Option<KeyCode>,

    /// Long press alternatives in popup order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub more_keys: Vec<ExpectedKey>,
}

impl KeyBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the output text.
    pub fn output_text(mut self, text: impl Into<String>) -> Self {
        self.output_text = Some(text.into());
        self
    }

    /// Sets the output code.
    pub fn output_code(mut self, code: KeyCode) -> Self {
        self.output_code = Some(code);
        self
    }

    /// Appends a more key.
    pub fn more_key(mut self, key: ExpectedKey) -> Self {
        self.more_keys.push(key);
        self
    }

    /// Sets the kind.
    pub fn kind(mut self, kind: KeyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends more keys in order.
    pub fn more_keys(mut self, keys: impl IntoIterator<Item = ExpectedKey>) -> Self {
        self.more_keys.extend(keys);
        self
    }

    /// Validates the fields and builds the canonical key.
    pub fn build(self) -> Result<ExpectedKey, FixtureError> {
        match self.kind {
            KeyKind::Regular => self.build_regular(),
            KeyKind::Additional => self.build_additional(),
            KeyKind::Marker => self.build_marker(),
        }
    }

    fn build_additional(self) -> Result<ExpectedKey, FixtureError> {
        let suggestion = "Declare additional more keys with a label only";
        let Some(label) = self.label else {
            return Err(FixtureError::invalid_argument_with_suggestion(
                "additional more key has no label",
                suggestion,
            ));
        };
        if self.icon.is_some() || self.output_code.is_some() || !self.more_keys.is_empty() {
            return Err(FixtureError::invalid_argument_with_suggestion(
                format!("additional more key '{}' has more than a label", label),
                suggestion,
            ));
        }
        if self.output_text.as_ref().is_some_and(|text| *text != label) {
            return Err(FixtureError::invalid_argument_with_suggestion(
                format!("additional more key '{}' outputs something else", label),
                suggestion,
            ));
        }
        Ok(ExpectedAdditionalMoreKey::new(label).into_key())
    }

    fn build_marker(self) -> Result<ExpectedKey, FixtureError> {
        let has_fields = self.label.as_deref().is_some_and(|l| l != ADDITIONAL_MORE_KEY_MARKER)
            || self.icon.is_some()
            || self.output_text.is_some()
            || self.output_code.is_some()
            || !self.more_keys.is_empty();
        if has_fields {
            return Err(FixtureError::invalid_argument_with_suggestion(
                "additional more keys marker has extra fields",
                "Declare the marker as { \"kind\": \"marker\" }",
            ));
        }
        Ok(ExpectedKey::marker())
    }

    fn build_regular(self) -> Result<ExpectedKey, FixtureError> {
        let output = match (self.output_text, self.output_code) {
            (Some(_), Some(_)) => {
                return Err(FixtureError::invalid_argument_with_suggestion(
                    "key has both an output text and an output code",
                    "Set only one of output_text and output_code",
                ));
            }
            (Some(text), None) => Some(Output::Text(text)),
            (None, Some(code)) => Some(Output::Code(code)),
            (None, None) => None,
        };

        let (visual, output) = match (self.label, self.icon, output) {
            (Some(_), Some(_), _) => {
                return Err(FixtureError::invalid_argument_with_suggestion(
                    "key has both a label and an icon",
                    "Set only one of label and icon",
                ));
            }
            (None, None, _) => {
                return Err(FixtureError::invalid_argument_with_suggestion(
                    "key has neither a label nor an icon",
                    "Set a label or an icon",
                ));
            }
            (None, Some(icon), None) => {
                return Err(FixtureError::invalid_argument_with_suggestion(
                    format!("icon key {} has no output", icon),
                    "Set output_text or output_code for icon keys",
                ));
            }
            (Some(label), None, None) => (Visual::Label(label.clone()), Output::Text(label)),
            (Some(label), None, Some(output)) => (Visual::Label(label), output),
            (None, Some(icon), Some(output)) => (Visual::Icon(icon), output),
        };

        Ok(ExpectedKey::new(visual, output, self.more_keys))
    }
}

impl TryFrom<KeyBuilder> for ExpectedKey {
    type Error = FixtureError;

    fn try_from(builder: KeyBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl TryFrom<KeyBuilder> for ExpectedAdditionalMoreKey {
    type Error = FixtureError;

    fn try_from(builder: KeyBuilder) -> Result<Self, Self::Error> {
        match builder.kind {
            KeyKind::Regular | KeyKind::Additional => {
                builder.kind(KeyKind::Additional).build()?.try_into()
            }
            KeyKind::Marker => Err(FixtureError::invalid_argument(
                "a marker is not an additional more key",
            )),
        }
    }
}

impl From<ExpectedAdditionalMoreKey> for KeyBuilder {
    fn from(key: ExpectedAdditionalMoreKey) -> Self {
        KeyBuilder::from(key.into_key())
    }
}

impl From<ExpectedKey> for KeyBuilder {
    fn from(key: ExpectedKey) -> Self {
        let mut builder = KeyBuilder::new().kind(key.kind());
        if key.is_additional_more_key_marker() {
            return builder;
        }
        builder = builder.more_keys(key.more_keys().iter().cloned());
        match key.visual() {
            Visual::Label(label) => builder.label = Some(label.clone()),
            Visual::Icon(icon) => builder.icon = Some(*icon),
        }
        match key.output() {
            // A label key outputting its label serializes without an output.
            Output::Text(text) if key.visual().label() == Some(text.as_str()) => {}
            Output::Text(text) => builder.output_text = Some(text.clone()),
            Output::Code(code) => builder.output_code = Some(*code),
        }
        builder
    }
}

fn is_regular(kind: &KeyKind) -> bool {
    *kind == KeyKind::Regular
}

// ============================================================================
// Tests
// ============================================================================
