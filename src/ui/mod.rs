// SPDX-License-Identifier: MPL-2.0
//! Page-facing localization updaters.
//!
//! - [`content`] - Text substitution for elements tagged with a translation key
//! - [`language_selector`] - Selector label, dropdown menu and outside-click handling
//!
//! Every function here takes the active language and page contract
//! explicitly and keeps no state between calls.

pub mod content;
pub mod language_selector;
