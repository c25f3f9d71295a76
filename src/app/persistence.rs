// SPDX-License-Identifier: MPL-2.0
//! Language switch handling.
//!
//! Switching persists the new preference and re-renders every localized
//! piece of the page.

use super::persisted_state::PreferenceStore;
use crate::app::config::PageConfig;
use crate::dom::Document;
use crate::i18n::I18n;
use crate::ui::{content, language_selector};
use unic_langid::LanguageIdentifier;

/// Applies the newly selected language: records it as active, persists it
/// under `preference_key`, then refreshes page content and the selector label.
///
/// The code is not validated. A language without a string table leaves every
/// tagged element as it was. A failed write is logged and the switch still
/// completes.
pub fn apply_language_change(
    active: &mut LanguageIdentifier,
    store: &mut dyn PreferenceStore,
    preference_key: &str,
    document: &mut Document,
    i18n: &I18n,
    page: &PageConfig,
    locale: LanguageIdentifier,
) {
    tracing::info!(from = %active, to = %locale, "switching language");
    *active = locale;

    if let Err(error) = store.set_item(preference_key, &active.to_string()) {
        tracing::warn!(%error, "Failed to persist language preference");
    }

    content::update_content(document, i18n, active, page);
    language_selector::update_language_label(document, i18n, active, page);
}
