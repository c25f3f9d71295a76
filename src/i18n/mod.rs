// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the landing page.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It holds the per-language string tables and resolves which language a visitor sees.
//!
//! # Features
//!
//! - Embedded `.ftl` string tables for English, Simplified Chinese, Japanese and Korean
//! - Locale resolution from a persisted preference, then the environment locale
//! - Language self-names for the language selector
//! - Lookups that miss silently instead of falling back to another language

pub mod fluent;
pub mod locale;

pub use fluent::{I18n, SELF_NAME_KEY};
pub use locale::{resolve_locale, FixedLocale, LocaleSource, SystemLocale};
