// SPDX-License-Identifier: MPL-2.0
//! Active language resolution.
//!
//! The active language comes from the persisted preference when it names a
//! supported language, otherwise from the prefix of the locale the
//! environment reports, otherwise the default language.

use crate::app::config::DEFAULT_LANGUAGE;
use unic_langid::LanguageIdentifier;

/// Source of the environment-reported locale string (e.g. "en-US").
pub trait LocaleSource {
    fn locale(&self) -> Option<String>;
}

/// Reads the operating system locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Reports a fixed locale string, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Resolves the active language. Never fails.
///
/// 1. `persisted`, if it parses and is one of `available`
/// 2. `environment`, lower-cased, matched by prefix against the language
///    subtag of each available non-default language
/// 3. [`DEFAULT_LANGUAGE`]
pub fn resolve_locale(
    persisted: Option<&str>,
    environment: Option<&str>,
    available: &[LanguageIdentifier],
) -> LanguageIdentifier {
    if let Some(lang) = persisted.and_then(|value| supported(value, available)) {
        tracing::debug!(%lang, "using persisted language preference");
        return lang;
    }

    if let Some(lang) = environment.and_then(|value| match_prefix(value, available)) {
        tracing::debug!(%lang, "using environment locale");
        return lang;
    }

    default_language()
}

/// The fallback language, `en`.
#[must_use]
pub fn default_language() -> LanguageIdentifier {
    LanguageIdentifier::from_bytes(DEFAULT_LANGUAGE.as_bytes()).unwrap_or_default()
}

fn supported(value: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang = value.trim().parse::<LanguageIdentifier>().ok()?;
    available.contains(&lang).then_some(lang)
}

fn match_prefix(value: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let reported = value.trim().to_lowercase().replace('_', "-");

    available
        .iter()
        .filter(|lang| lang.language.as_str() != DEFAULT_LANGUAGE)
        .find(|lang| reported.starts_with(lang.language.as_str()))
        .cloned()
}
