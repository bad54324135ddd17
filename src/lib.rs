// SPDX-License-Identifier: GPL-3.0-only

//! Expected Layout - expected soft keyboard fixtures for keyboard tests
//!
//! This crate provides the building blocks tests use to declare the keyboard
//! they expect to see. A comparison engine outside this crate checks these
//! declarations against a rendered keyboard.
//!
//! # Architecture
//!
//! 1. **Expected keys** (`expected`): factories that normalize every key shape
//!    into one canonical descriptor, and a joiner that assembles rows and
//!    more key groups from smaller pieces.
//!
//! 2. **Icons** (`icons`): the read-only icon registry the functional keys are
//!    resolved against. It is always passed in explicitly.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants and the built-in icon names
//! - `codes`: Output codes of functional keys
//! - `expected`: Expected key descriptors, factories and the joiner
//! - `icons`: Icon ids, the `IconResolver` trait and icon set loading

pub mod app_settings;
pub mod codes;
pub mod expected;
pub mod icons;

pub use crate::expected::{ExpectedKey, FixtureError};
pub use crate::icons::{IconId, IconResolver, IconSet};

// ============================================================================
// Integration Tests
// ============================================================================
