// SPDX-License-Identifier: MPL-2.0
//! `olib_i18n` is the localization layer of the Olib landing page.
//!
//! It holds the English, Simplified Chinese, Japanese and Korean string
//! tables, resolves the visitor's language from a persisted preference or the
//! environment locale, and rewrites the text of every page element tagged
//! with a translation key.

pub mod app;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod ui;
