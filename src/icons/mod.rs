// SPDX-License-Identifier: GPL-3.0-only

//! Icon registry for expected key visuals.
//!
//! Functional keys show icons instead of labels. Fixtures refer to an icon by
//! an opaque [`IconId`] obtained from an [`IconResolver`]. The resolver is
//! passed in by the caller, so fixtures never depend on global state.
//!
//! # Icon Sets
//!
//! [`IconSet::builtin()`] provides the standard soft keyboard icon names with
//! ids assigned by position. Other tables can be loaded from JSON:
//!
//! ```json
//! {
//!     "icons": {
//!         "delete_key": 2,
//!         "enter_key": 5
//!     }
//! }
//! ```

pub mod parser;

pub use parser::{parse_icon_set_file, parse_icon_set_from_string};

use crate::app_settings::BUILTIN_ICON_NAMES;
use crate::expected::FixtureError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Opaque handle of a key icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub u32);

impl IconId {
    /// The reserved id of the undefined icon.
    pub const UNDEFINED: IconId = IconId(0);
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "icon#{}", self.0)
    }
}

/// Read-only lookup between icon names and ids.
pub trait IconResolver {
    /// Returns the id registered for `name`.
    fn icon_id(&self, name: &str) -> Option<IconId>;

    /// Returns the name registered for `id`.
    fn icon_name(&self, id: IconId) -> Option<&str>;

    /// Returns the id registered for `name`, or an error naming the icon.
    fn resolve(&self, name: &str) -> Result<IconId, FixtureError> {
        match self.icon_id(name) {
            Some(id) => {
                tracing::debug!(name, id = id.0, "resolved icon");
                Ok(id)
            }
            None => Err(FixtureError::unknown_icon(name)),
        }
    }
}

/// An immutable table of icon names and ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    ids: HashMap<String, IconId>,
    names: BTreeMap<IconId, String>,
}

impl IconSet {
    /// Returns the built-in soft keyboard icon set.
    pub fn builtin() -> Self {
        let mut set = IconSet::default();
        for (idx, name) in BUILTIN_ICON_NAMES.iter().enumerate() {
            set.insert_unchecked(name, IconId(idx as u32 + 1));
        }
        set
    }

    /// Builds an icon set from name and id pairs.
    ///
    /// Fails if an id is [`IconId::UNDEFINED`] or is used by two names.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, FixtureError>
    where
        I: IntoIterator<Item = (S, IconId)>,
        S: Into<String>,
    {
        let mut set = IconSet::default();
        for (name, id) in entries {
            let name = name.into();
            if id == IconId::UNDEFINED {
                return Err(FixtureError::invalid_argument_with_suggestion(
                    format!("icon '{}' uses the reserved undefined id 0", name),
                    "Assign icon ids starting at 1",
                ));
            }
            if let Some(existing) = set.names.get(&id) {
                return Err(FixtureError::invalid_argument_with_suggestion(
                    format!("icons '{}' and '{}' share {}", existing, name, id),
                    "Give every icon a distinct id",
                ));
            }
            if set.ids.contains_key(&name) {
                return Err(FixtureError::invalid_argument(format!(
                    "icon '{}' is defined twice",
                    name
                )));
            }
            set.insert_unchecked(&name, id);
        }
        Ok(set)
    }

    /// Returns the number of icons in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the set has no icons.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the icons in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, IconId)> {
        self.names.iter().map(|(id, name)| (name.as_str(), *id))
    }

    fn insert_unchecked(&mut self, name: &str, id: IconId) {
        self.ids.insert(name.to_string(), id);
        self.names.insert(id, name.to_string());
    }
}

impl IconResolver for IconSet {
    fn icon_id(&self, name: &str) -> Option<IconId> {
        self.ids.get(name).copied()
    }

    fn icon_name(&self, id: IconId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }
}

impl<R: IconResolver + ?Sized> IconResolver for &R {
    fn icon_id(&self, name: &str) -> Option<IconId> {
        (**self).icon_id(name)
    }

    fn icon_name(&self, id: IconId) -> Option<&str> {
        (**self).icon_name(id)
    }
}

// ============================================================================
// Tests
// ============================================================================
