// SPDX-License-Identifier: GPL-3.0-only

//! Loading icon sets from JSON configuration.

use crate::expected::FixtureError;
use crate::icons::{IconId, IconSet};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

/// On-disk form of an icon set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IconSetFile {
    #[serde(default)]
    icons: BTreeMap<String, IconId>,
}

/// Parses an icon set from a JSON file.
///
/// I/O and JSON errors carry the file path; id conflicts are reported as
/// [`FixtureError::InvalidArgument`].
///
/// # Arguments
///
/// * `path` - Path to the JSON icon set file
///
/// # Returns
///
/// Returns the loaded `IconSet`, or a `FixtureError` if the file cannot be
/// read, is not a valid icon set, or has conflicting ids.
///
/// # Example
///
/// ```rust,ignore
/// use expected_layout::icons::parser::parse_icon_set_file;
/// use expected_layout::IconResolver;
///
/// match parse_icon_set_file("resources/icons.json") {
///     Ok(icons) => println!("delete_key is {:?}", icons.icon_id("delete_key")),
///     Err(e) => eprintln!("Failed to load icon set: {}", e),
/// }
/// ```
pub fn parse_icon_set_file(path: &str) -> Result<IconSet, FixtureError> {
    let json_str =
        fs::read_to_string(path).map_err(|e| FixtureError::io_error_with_path(e, path))?;

    let file: IconSetFile = serde_json::from_str(&json_str)
        .map_err(|e| FixtureError::json_error_with_path(e, path))?;

    build_icon_set(file, Some(path))
}

/// Parses an icon set from a JSON string.
///
/// # Arguments
///
/// * `json` - JSON object with an `icons` map from icon name to id
///
/// # Returns
///
/// Returns the parsed `IconSet`, or a `FixtureError` if the JSON is malformed
/// or has conflicting ids.
///
/// # Example
///
/// ```rust,ignore
/// use expected_layout::icons::parser::parse_icon_set_from_string;
///
/// let json = r#"{ "icons": { "delete_key": 2, "enter_key": 5 } }"#;
///
/// match parse_icon_set_from_string(json) {
///     Ok(icons) => println!("Parsed {} icons", icons.len()),
///     Err(e) => eprintln!("Parse error: {}", e),
/// }
/// ```
pub fn parse_icon_set_from_string(json: &str) -> Result<IconSet, FixtureError> {
    let file: IconSetFile = serde_json::from_str(json)?;
    build_icon_set(file, None)
}

fn build_icon_set(file: IconSetFile, path: Option<&str>) -> Result<IconSet, FixtureError> {
    if file.icons.is_empty() {
        tracing::warn!(path = path.unwrap_or("<string>"), "icon set has no icons");
    }
    let set = IconSet::from_entries(file.icons)?;
    tracing::debug!(
        path = path.unwrap_or("<string>"),
        icons = set.len(),
        "loaded icon set"
    );
    Ok(set)
}

impl IconSet {
    /// Loads an icon set from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FixtureError> {
        parse_icon_set_file(path)
    }

    /// Loads an icon set from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        parse_icon_set_from_string(json)
    }
}
