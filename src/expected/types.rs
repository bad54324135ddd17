// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for expected keyboard fixtures.
//!
//! This module defines the canonical expected key descriptor, its visual and
//! output parts, the additional more key wrapper and the error type shared by
//! the fixture builders and loaders.

use crate::app_settings::ADDITIONAL_MORE_KEY_MARKER;
use crate::codes::{printable_code, KeyCode};
use crate::expected::builder::KeyBuilder;
use crate::icons::{IconId, IconResolver};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for fixture construction and loading.
///
/// Every variant carries enough context to point the test author at the
/// offending declaration.
#[derive(Debug)]
pub enum FixtureError {
    /// Visual or output of a key is ambiguous or missing
    InvalidArgument {
        /// Description of the contract violation
        message: String,
        /// Optional suggestion for fixing the declaration
        suggestion: Option<String>,
    },

    /// An element passed to the joiner is not a key, a key sequence or text
    UnsupportedElement {
        /// Position of the element in the joined list
        index: usize,
        /// Kind of value that was found
        found: String,
        /// Optional suggestion for fixing the element
        suggestion: Option<String>,
    },

    /// Icon name is not known to the icon resolver
    UnknownIcon {
        /// The name that failed to resolve
        name: String,
        /// Optional suggestion for fixing the lookup
        suggestion: Option<String>,
    },

    /// I/O error occurred while reading a fixture or icon set file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },
}

impl FixtureError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            suggestion: None,
        }
    }

    /// Creates an invalid argument error with a suggestion.
    pub fn invalid_argument_with_suggestion(
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Creates an unsupported element error for the joiner.
    pub fn unsupported_element(index: usize, found: impl Into<String>) -> Self {
        Self::UnsupportedElement {
            index,
            found: found.into(),
            suggestion: Some(
                "Use a key object, an array of key objects or a plain string".into(),
            ),
        }
    }

    /// Creates an unknown icon error.
    pub fn unknown_icon(name: impl Into<String>) -> Self {
        Self::UnknownIcon {
            name: name.into(),
            suggestion: Some("Check the icon name against the icon set in use".into()),
        }
    }

    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = Some(source.line()).filter(|line| *line > 0);
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(
        source: serde_json::Error,
        file_path: impl Into<String>,
    ) -> Self {
        match Self::json_error(source) {
            Self::JsonError {
                source,
                line_number,
                suggestion,
                ..
            } => Self::JsonError {
                source,
                file_path: Some(file_path.into()),
                line_number,
                suggestion,
            },
            other => other,
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            FixtureError::InvalidArgument {
                message,
                suggestion,
            } => {
                write!(f, "Invalid argument: {}", message)?;
                suggestion
            }
            FixtureError::UnsupportedElement {
                index,
                found,
                suggestion,
            } => {
                write!(
                    f,
                    "Unsupported element at index {}: found {}",
                    index, found
                )?;
                suggestion
            }
            FixtureError::UnknownIcon { name, suggestion } => {
                write!(f, "Unknown icon name '{}'", name)?;
                suggestion
            }
            FixtureError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                suggestion
            }
            FixtureError::JsonError {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                suggestion
            }
        };
        if let Some(hint) = suggestion {
            write!(f, "\n  Suggestion: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::IoError { source, .. } => Some(source),
            FixtureError::JsonError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// Key Visual and Output
// ============================================================================

/// On-screen representation of a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visual {
    /// Text label drawn on the key
    Label(String),
    /// Icon drawn on the key
    Icon(IconId),
}

impl Visual {
    /// Returns the label text, if this visual is a label.
    pub fn label(&self) -> Option<&str> {
        match self {
            Visual::Label(label) => Some(label),
            Visual::Icon(_) => None,
        }
    }

    /// Returns the icon id, if this visual is an icon.
    pub fn icon(&self) -> Option<IconId> {
        match self {
            Visual::Label(_) => None,
            Visual::Icon(id) => Some(*id),
        }
    }
}

impl From<&str> for Visual {
    fn from(label: &str) -> Self {
        Visual::Label(label.to_string())
    }
}

impl From<String> for Visual {
    fn from(label: String) -> Self {
        Visual::Label(label)
    }
}

impl From<IconId> for Visual {
    fn from(id: IconId) -> Self {
        Visual::Icon(id)
    }
}

impl fmt::Display for Visual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visual::Label(label) => f.write_str(label),
            Visual::Icon(id) => write!(f, "{}", id),
        }
    }
}

/// What a key emits when it is activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// Literal output text
    Text(String),
    /// Numeric output code
    Code(KeyCode),
}

impl Output {
    /// Returns the output text, if this output is text.
    pub fn text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Code(_) => None,
        }
    }

    /// Returns the output code, if this output is a code.
    pub fn code(&self) -> Option<KeyCode> {
        match self {
            Output::Text(_) => None,
            Output::Code(code) => Some(*code),
        }
    }

    /// Returns the single code this output produces.
    ///
    /// Text made of exactly one code point maps to that code point, which is
    /// how a real key with a one character output reports its code.
    pub fn effective_code(&self) -> Option<KeyCode> {
        match self {
            Output::Code(code) => Some(*code),
            Output::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::from(c)),
                    _ => None,
                }
            }
        }
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Output::Text(text.to_string())
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

impl From<KeyCode> for Output {
    fn from(code: KeyCode) -> Self {
        Output::Code(code)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Code(code) => f.write_str(&printable_code(*code)),
        }
    }
}

// ============================================================================
// Expected Key Descriptors
// ============================================================================

/// Role of an expected key inside a more keys declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// A key or more key placed by declaration order
    #[default]
    Regular,
    /// An additional more key placed by a marker
    Additional,
    /// The placeholder that positions additional more keys
    Marker,
}

/// A key as a test expects to find it on a keyboard.
///
/// The output is always resolved; a key declared with a label only outputs
/// its label text. More keys are owned by value and declared in popup order.
/// The kind takes part in equality, so an additional more key never equals
/// a regular more key with the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyBuilder", into = "KeyBuilder")]
pub struct ExpectedKey {
    kind: KeyKind,
    visual: Visual,
    output: Output,
    more_keys: Vec<ExpectedKey>,
}

impl ExpectedKey {
    /// Creates a regular key from fully resolved parts.
    pub fn new(
        visual: impl Into<Visual>,
        output: impl Into<Output>,
        more_keys: impl IntoIterator<Item = ExpectedKey>,
    ) -> Self {
        Self {
            kind: KeyKind::Regular,
            visual: visual.into(),
            output: output.into(),
            more_keys: more_keys.into_iter().collect(),
        }
    }

    /// Creates the placeholder that positions additional more keys.
    pub fn marker() -> Self {
        Self {
            kind: KeyKind::Marker,
            visual: Visual::from(ADDITIONAL_MORE_KEY_MARKER),
            output: Output::from(ADDITIONAL_MORE_KEY_MARKER),
            more_keys: Vec::new(),
        }
    }

    pub(crate) fn additional(label: String) -> Self {
        Self {
            kind: KeyKind::Additional,
            visual: Visual::Label(label.clone()),
            output: Output::Text(label),
            more_keys: Vec::new(),
        }
    }

    /// Returns the kind of this key.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Returns the visual of this key.
    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    /// Returns the output of this key.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Returns the more keys of this key in popup order.
    pub fn more_keys(&self) -> &[ExpectedKey] {
        &self.more_keys
    }

    /// Returns true if this key has long press alternatives.
    pub fn has_more_keys(&self) -> bool {
        !self.more_keys.is_empty()
    }

    /// Returns a regular copy of this key with its more keys replaced.
    pub fn with_more_keys(&self, more_keys: impl IntoIterator<Item = ExpectedKey>) -> Self {
        Self::new(self.visual.clone(), self.output.clone(), more_keys)
    }

    /// Returns true if this key is an additional more key.
    pub fn is_additional_more_key(&self) -> bool {
        self.kind == KeyKind::Additional
    }

    /// Returns true if this key is the placeholder that positions additional
    /// more keys inside a more keys declaration.
    pub fn is_additional_more_key_marker(&self) -> bool {
        self.kind == KeyKind::Marker
    }

    /// Renders this key like `Display` but with icon names from `icons`.
    pub fn describe(&self, icons: &impl IconResolver) -> String {
        self.render(&|visual| match visual {
            Visual::Icon(id) => match icons.icon_name(*id) {
                Some(name) => format!("icon:{}", name),
                None => id.to_string(),
            },
            Visual::Label(label) => label.clone(),
        })
    }

    fn render(&self, visual_of: &dyn Fn(&Visual) -> String) -> String {
        if self.kind == KeyKind::Marker {
            return format!("{{{}}}", ADDITIONAL_MORE_KEY_MARKER);
        }
        let visual = visual_of(&self.visual);
        let mut text = if self.output_matches_label() {
            visual
        } else {
            format!("{}|{}", visual, self.output)
        };
        if self.kind == KeyKind::Additional {
            text.insert(0, '+');
        }
        if !self.more_keys.is_empty() {
            let more_keys: Vec<String> =
                self.more_keys.iter().map(|key| key.render(visual_of)).collect();
            text.push_str(&format!("^[{}]", more_keys.join(", ")));
        }
        text
    }

    fn output_matches_label(&self) -> bool {
        match (&self.visual, &self.output) {
            (Visual::Label(label), Output::Text(text)) => label == text,
            _ => false,
        }
    }
}

impl fmt::Display for ExpectedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&|visual| visual.to_string()))
    }
}

/// A more key whose popup position is controlled by the `%` marker.
///
/// Additional more keys are declared apart from the regular more keys of a
/// key; the comparison engine substitutes them for marker occurrences. The
/// wrapped key always has [`KeyKind::Additional`] and a label that is also
/// its output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyBuilder", into = "KeyBuilder")]
pub struct ExpectedAdditionalMoreKey(ExpectedKey);

impl ExpectedAdditionalMoreKey {
    /// Creates an additional more key whose visual and output are `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self(ExpectedKey::additional(label.into()))
    }

    /// Returns the underlying key.
    pub fn as_key(&self) -> &ExpectedKey {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying key.
    pub fn into_key(self) -> ExpectedKey {
        self.0
    }
}

impl TryFrom<ExpectedKey> for ExpectedAdditionalMoreKey {
    type Error = FixtureError;

    fn try_from(key: ExpectedKey) -> Result<Self, Self::Error> {
        if key.is_additional_more_key() {
            Ok(Self(key))
        } else {
            Err(FixtureError::invalid_argument_with_suggestion(
                format!("key '{}' is not an additional more key", key),
                "Declare it with kind \"additional\" and a label only",
            ))
        }
    }
}

impl From<ExpectedAdditionalMoreKey> for ExpectedKey {
    fn from(key: ExpectedAdditionalMoreKey) -> Self {
        key.into_key()
    }
}

impl fmt::Display for ExpectedAdditionalMoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
