// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Language**: Fallback language and the persisted preference key
//! - **Page Contract**: Attribute, id and class names the page markup uses

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Language used when neither a persisted preference nor the environment
/// locale selects a supported one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Key under which the language preference is persisted.
pub const DEFAULT_PREFERENCE_KEY: &str = "lang";

// ==========================================================================
// Page Contract Defaults
// ==========================================================================

/// Attribute naming the translation key of a substitution target.
pub const DEFAULT_KEY_ATTRIBUTE: &str = "data-i18n";

/// Attribute on the document element that declares the page language.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Id of the button showing the active language's name.
pub const DEFAULT_LABEL_ID: &str = "lang-btn";

/// Id of the language dropdown menu.
pub const DEFAULT_MENU_ID: &str = "lang-menu";

/// Class of the container holding the selector button and its menu.
pub const DEFAULT_SELECTOR_CLASS: &str = "lang-selector";

/// Class that makes the menu visible.
pub const DEFAULT_OPEN_CLASS: &str = "show";
