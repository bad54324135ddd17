// SPDX-License-Identifier: GPL-3.0-only

//! Output codes emitted by keyboard keys.
//!
//! Non-negative codes are Unicode code points. Negative codes identify
//! functional keys that do not produce text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric output code of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub i32);

impl KeyCode {
    /// Returns the code point as a `char` if this code is a valid Unicode scalar.
    pub fn as_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    /// Returns true for the negative codes of functional keys.
    pub fn is_functional(self) -> bool {
        self.0 < 0
    }
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        KeyCode(c as i32)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printable_code(*self))
    }
}

pub const CODE_TAB: KeyCode = KeyCode('\t' as i32);
pub const CODE_ENTER: KeyCode = KeyCode('\n' as i32);
pub const CODE_SPACE: KeyCode = KeyCode(' ' as i32);

pub const CODE_SHIFT: KeyCode = KeyCode(-1);
pub const CODE_CAPSLOCK: KeyCode = KeyCode(-2);
pub const CODE_SWITCH_ALPHA_SYMBOL: KeyCode = KeyCode(-3);
pub const CODE_OUTPUT_TEXT: KeyCode = KeyCode(-4);
pub const CODE_DELETE: KeyCode = KeyCode(-5);
pub const CODE_SETTINGS: KeyCode = KeyCode(-6);
pub const CODE_SHORTCUT: KeyCode = KeyCode(-7);
pub const CODE_ACTION_NEXT: KeyCode = KeyCode(-8);
pub const CODE_ACTION_PREVIOUS: KeyCode = KeyCode(-9);
pub const CODE_LANGUAGE_SWITCH: KeyCode = KeyCode(-10);
pub const CODE_EMOJI: KeyCode = KeyCode(-11);
pub const CODE_SHIFT_ENTER: KeyCode = KeyCode(-12);
pub const CODE_UNSPECIFIED: KeyCode = KeyCode(-15);

/// Returns a human readable form of a key code for assertion messages.
///
/// Functional and whitespace codes get a name, Latin-1 code points are shown
/// as the character itself and everything else as an escaped code point.
pub fn printable_code(code: KeyCode) -> String {
    let name = match code {
        CODE_SHIFT => "shift",
        CODE_CAPSLOCK => "capslock",
        CODE_SWITCH_ALPHA_SYMBOL => "symbol",
        CODE_OUTPUT_TEXT => "text",
        CODE_DELETE => "delete",
        CODE_SETTINGS => "settings",
        CODE_SHORTCUT => "shortcut",
        CODE_ACTION_NEXT => "action_next",
        CODE_ACTION_PREVIOUS => "action_previous",
        CODE_LANGUAGE_SWITCH => "language_switch",
        CODE_EMOJI => "emoji",
        CODE_SHIFT_ENTER => "shift_enter",
        CODE_UNSPECIFIED => "unspec",
        CODE_TAB => "tab",
        CODE_ENTER => "enter",
        CODE_SPACE => "space",
        KeyCode(value) if value < 0 => return format!("code({})", value),
        KeyCode(value) if value < CODE_SPACE.0 => return format!("\\u{:02X}", value),
        KeyCode(value) if value < 0x100 => {
            return code
                .as_char()
                .map(String::from)
                .unwrap_or_else(|| format!("\\u{:04X}", value));
        }
        KeyCode(value) if value < 0x10000 => return format!("\\u{:04X}", value),
        KeyCode(value) => return format!("\\U{:05X}", value),
    };
    name.to_string()
}
