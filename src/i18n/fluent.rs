// SPDX-License-Identifier: MPL-2.0
//! Translation store backed by Fluent bundles.
//!
//! Each supported language ships one `.ftl` file under `assets/i18n/`, named
//! after its language code. The files are embedded at compile time and share
//! an identical key set; [`I18n::coverage_gaps`] reports any drift.

use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use unic_langid::LanguageIdentifier;

/// Message every resource defines with the language's own name for itself.
pub const SELF_NAME_KEY: &str = "language-self-name";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    message_ids: HashMap<LanguageIdentifier, BTreeSet<String>>,
    available_locales: Vec<LanguageIdentifier>,
}

impl I18n {
    /// Loads the string tables embedded in the binary.
    pub fn new() -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!("Skipping translation file with invalid locale name: {filename}");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ));
            }
        }

        Self::from_sources(sources)
    }

    /// Builds a store from caller-provided FTL sources, one per language.
    ///
    /// A later source for the same language replaces the earlier one.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (LanguageIdentifier, String)>,
    {
        let mut bundles = HashMap::new();
        let mut message_ids = HashMap::new();

        for (locale, source) in sources {
            let ids = collect_message_ids(&source);
            let res = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::Translation(format!(
                    "failed to parse resource for {locale}: {} error(s), first: {:?}",
                    errors.len(),
                    errors.first()
                ))
            })?;

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            bundle.add_resource(res).map_err(|errors| {
                Error::Translation(format!(
                    "failed to add resource for {locale}: {errors:?}"
                ))
            })?;

            bundles.insert(locale.clone(), bundle);
            message_ids.insert(locale, ids);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        Ok(Self {
            bundles,
            message_ids,
            available_locales,
        })
    }

    /// Languages with a loaded string table, sorted by code.
    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    #[must_use]
    pub fn supports(&self, locale: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(locale)
    }

    /// Looks up `key` in the table for `locale`.
    ///
    /// Returns `None` when the language is unknown, the key is absent, the
    /// message has no value or formatting reports errors. There is no
    /// fallback to another language.
    #[must_use]
    pub fn tr(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::debug!(%locale, key, ?errors, "formatting failed");
            None
        }
    }

    /// The language's name for itself, e.g. "日本語" for `ja`.
    #[must_use]
    pub fn display_name(&self, locale: &LanguageIdentifier) -> Option<String> {
        self.tr(locale, SELF_NAME_KEY)
    }

    /// Keys defined by the table for `locale`.
    #[must_use]
    pub fn message_ids(&self, locale: &LanguageIdentifier) -> Option<&BTreeSet<String>> {
        self.message_ids.get(locale)
    }

    /// Keys that some language defines and another lacks, as
    /// `(language missing the key, key)` pairs sorted by language then key.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<(LanguageIdentifier, String)> {
        let all_keys: BTreeSet<&String> = self.message_ids.values().flatten().collect();

        let mut gaps = Vec::new();
        for locale in &self.available_locales {
            let Some(ids) = self.message_ids.get(locale) else {
                continue;
            };
            for key in &all_keys {
                if !ids.contains(*key) {
                    gaps.push((locale.clone(), (*key).clone()));
                }
            }
        }
        gaps
    }
}

/// Collects message identifiers: an identifier at column 0 followed by `=`.
///
/// Terms (`-name`), comments and continuation lines never start with an
/// ASCII letter at column 0, so they are skipped.
fn collect_message_ids(source: &str) -> BTreeSet<String> {
    source
        .lines()
        .filter_map(|line| {
            if !line.starts_with(|c: char| c.is_ascii_alphabetic()) {
                return None;
            }
            let end = line
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(line.len());
            let (id, rest) = line.split_at(end);
            rest.trim_start().starts_with('=').then(|| id.to_string())
        })
        .collect()
}
