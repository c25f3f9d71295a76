// SPDX-License-Identifier: MPL-2.0
//! Host-side state for a localized page.
//!
//! The `Session` owns everything the page's localization needs across events:
//! the string tables, the preference store, the page contract and the active
//! language. Hosts create one session per page and feed it [`Message`]s; the
//! session threads the active language between calls, so none of it lives in
//! module-level globals.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
pub mod persistence;

pub use message::{Flags, Message};

use crate::dom::{Document, NodeId};
use crate::i18n::{resolve_locale, I18n, LocaleSource};
use crate::ui::language_selector::{self, LanguageOption, MenuState};
use crate::ui::content;
use config::{Config, PageConfig};
use persisted_state::PreferenceStore;
use std::fmt;
use unic_langid::LanguageIdentifier;

pub struct Session<S: PreferenceStore> {
    i18n: I18n,
    store: S,
    page: PageConfig,
    preference_key: String,
    active: LanguageIdentifier,
}

impl<S: PreferenceStore> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.active.to_string())
            .field("preference_key", &self.preference_key)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore> Session<S> {
    /// Resolves the active language from the persisted preference and the
    /// environment locale.
    ///
    /// A `locale` set in the config's `[general]` section stands in for the
    /// one `locale_source` reports.
    pub fn start(i18n: I18n, store: S, locale_source: &dyn LocaleSource, config: &Config) -> Self {
        let preference_key = config.general.preference_key.clone();
        let persisted = store.get_item(&preference_key);
        let environment = config
            .general
            .locale
            .clone()
            .or_else(|| locale_source.locale());

        let active = resolve_locale(
            persisted.as_deref(),
            environment.as_deref(),
            i18n.available_locales(),
        );
        tracing::info!(
            %active,
            persisted = persisted.as_deref().unwrap_or("<none>"),
            environment = environment.as_deref().unwrap_or("<none>"),
            "resolved page language"
        );

        Self {
            i18n,
            store,
            page: config.page.clone(),
            preference_key,
            active,
        }
    }

    #[must_use]
    pub fn active_language(&self) -> &LanguageIdentifier {
        &self.active
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn page_config(&self) -> &PageConfig {
        &self.page
    }

    /// Consumes the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Dispatches one page event.
    pub fn update(&mut self, document: &mut Document, message: Message) {
        match message {
            Message::ContentLoaded => self.on_content_loaded(document),
            Message::SelectLanguage(locale) => self.set_language(document, locale),
            Message::ToggleMenu => {
                self.toggle_menu(document);
            }
            Message::DocumentClick(target) => self.on_document_click(document, target),
        }
    }

    /// Page-load flow: localize the content, then label the selector.
    pub fn on_content_loaded(&self, document: &mut Document) {
        content::update_content(document, &self.i18n, &self.active, &self.page);
        language_selector::update_language_label(document, &self.i18n, &self.active, &self.page);
    }

    /// Switches to `locale`, persists it and re-renders the page.
    pub fn set_language(&mut self, document: &mut Document, locale: LanguageIdentifier) {
        persistence::apply_language_change(
            &mut self.active,
            &mut self.store,
            &self.preference_key,
            document,
            &self.i18n,
            &self.page,
            locale,
        );
    }

    pub fn toggle_menu(&self, document: &mut Document) -> Option<MenuState> {
        language_selector::toggle_menu(document, &self.page)
    }

    #[must_use]
    pub fn menu_state(&self, document: &Document) -> MenuState {
        language_selector::menu_state(document, &self.page)
    }

    /// Page-wide click listener; closes the menu on clicks outside the selector.
    pub fn on_document_click(&self, document: &mut Document, target: NodeId) {
        language_selector::handle_document_click(document, &self.page, target);
    }

    #[must_use]
    pub fn language_options(&self) -> Vec<LanguageOption> {
        language_selector::language_options(&self.i18n)
    }
}
