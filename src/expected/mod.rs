// SPDX-License-Identifier: GPL-3.0-only

//! Expected key model for keyboard verification.
//!
//! This module provides the value types a test compares a rendered keyboard
//! against, and the builder used to assemble them:
//!
//! - [`ExpectedKey`]: one key (visual, output, more keys)
//! - [`ExpectedLayout`]: rows of keys forming a keyboard page
//! - [`ExpectedKeyboardBuilder`]: row edits, replacement and upper-casing
//! - [`codes`]: function key codes and icon names

pub mod builder;
pub mod case;
pub mod codes;
pub mod key;

pub use builder::ExpectedKeyboardBuilder;
pub use key::{ExpectedKey, ExpectedLayout, KeyOutput, KeyVisual, key, key_with_more, keys};
