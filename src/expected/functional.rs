// SPDX-License-Identifier: GPL-3.0-only

//! Pre-built functional keys shared by expected layouts.

use crate::app_settings::{
    ICON_NAME_DELETE, ICON_NAME_EMOJI, ICON_NAME_ENTER, ICON_NAME_SETTINGS, ICON_NAME_SHORTCUT,
};
use crate::codes::{CODE_DELETE, CODE_EMOJI, CODE_ENTER, CODE_SETTINGS, CODE_SHORTCUT};
use crate::expected::builder::{key, key_with_output};
use crate::expected::types::{ExpectedKey, FixtureError};
use crate::icons::{IconResolver, IconSet};

/// The functional keys most layouts share.
///
/// Icon keys are resolved through the resolver passed to [`resolve`], so the
/// same fixtures work against any icon table.
///
/// [`resolve`]: FunctionalKeys::resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionalKeys {
    pub delete: ExpectedKey,
    pub shortcut: ExpectedKey,
    pub settings: ExpectedKey,
    pub enter: ExpectedKey,
    pub emoji: ExpectedKey,
    pub space: ExpectedKey,
}

impl FunctionalKeys {
    /// Resolves the functional keys against `icons`.
    ///
    /// Fails with [`FixtureError::UnknownIcon`] if one of the functional key
    /// icons is missing from the resolver.
    pub fn resolve(icons: &impl IconResolver) -> Result<Self, FixtureError> {
        Ok(Self {
            delete: key_with_output(icons.resolve(ICON_NAME_DELETE)?, CODE_DELETE),
            shortcut: key_with_output(icons.resolve(ICON_NAME_SHORTCUT)?, CODE_SHORTCUT),
            settings: key_with_output(icons.resolve(ICON_NAME_SETTINGS)?, CODE_SETTINGS),
            enter: key_with_output(icons.resolve(ICON_NAME_ENTER)?, CODE_ENTER),
            emoji: key_with_output(icons.resolve(ICON_NAME_EMOJI)?, CODE_EMOJI),
            space: key(" "),
        })
    }

    /// Resolves the functional keys against the built-in icon set.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::resolve(&IconSet::builtin())
    }
}
