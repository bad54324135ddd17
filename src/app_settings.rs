// SPDX-License-Identifier: GPL-3.0-only

//! Centralized crate settings and constants.

/// Default tracing directive used by the dump binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "expected_layout=info";

/// Marker placed in a more keys declaration where additional more keys go.
pub const ADDITIONAL_MORE_KEY_MARKER: &str = "%";

/// Icon names of the built-in icon set, in id order.
///
/// The icon id of a name is its 1-based position in this list. Id 0 is
/// reserved for the undefined icon.
pub const BUILTIN_ICON_NAMES: &[&str] = &[
    "shift_key",
    "delete_key",
    "settings_key",
    "space_key",
    "enter_key",
    "go_key",
    "search_key",
    "send_key",
    "next_key",
    "done_key",
    "previous_key",
    "tab_key",
    "shortcut_key",
    "space_key_for_number_layout",
    "shift_key_shifted",
    "shortcut_key_disabled",
    "language_switch_key",
    "zwnj_key",
    "zwj_key",
    "emoji_key",
];

/// Icon name of the delete key.
pub const ICON_NAME_DELETE: &str = "delete_key";

/// Icon name of the shortcut (voice input) key.
pub const ICON_NAME_SHORTCUT: &str = "shortcut_key";

/// Icon name of the settings key.
pub const ICON_NAME_SETTINGS: &str = "settings_key";

/// Icon name of the enter key.
pub const ICON_NAME_ENTER: &str = "enter_key";

/// Icon name of the emoji key.
pub const ICON_NAME_EMOJI: &str = "emoji_key";
