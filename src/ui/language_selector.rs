// SPDX-License-Identifier: MPL-2.0
//! Language selector glue: the button label and the dropdown menu.
//!
//! The menu's open state lives in the document itself (the open class on the
//! menu element), so the helpers here hold no state of their own.

use crate::app::config::PageConfig;
use crate::dom::{Document, NodeId};
use crate::i18n::I18n;
use unic_langid::LanguageIdentifier;

/// Visibility of the language menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// One entry of the selector menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: LanguageIdentifier,
    pub display_name: String,
}

/// Writes the display name of `locale` into the label element.
///
/// No-op when the label element is absent or `locale` has no display name.
pub fn update_language_label(
    document: &mut Document,
    i18n: &I18n,
    locale: &LanguageIdentifier,
    page: &PageConfig,
) {
    let Some(label) = document.element_by_id(&page.label_id) else {
        tracing::debug!(id = %page.label_id, "language label not found");
        return;
    };

    if let Some(name) = i18n.display_name(locale) {
        document.set_text_content(label, &name);
    }
}

/// Reads the menu state; an absent menu counts as closed.
#[must_use]
pub fn menu_state(document: &Document, page: &PageConfig) -> MenuState {
    match document.element_by_id(&page.menu_id) {
        Some(menu) if document.has_class(menu, &page.open_class) => MenuState::Open,
        _ => MenuState::Closed,
    }
}

/// Flips the menu between open and closed.
///
/// Returns the new state, or `None` when the menu element is absent.
pub fn toggle_menu(document: &mut Document, page: &PageConfig) -> Option<MenuState> {
    let menu = document.element_by_id(&page.menu_id)?;
    let open = document.toggle_class(menu, &page.open_class);
    Some(if open { MenuState::Open } else { MenuState::Closed })
}

/// Page-wide click handler: closes the menu when `target` lies outside the
/// selector container.
///
/// Does nothing when the container is absent.
pub fn handle_document_click(document: &mut Document, page: &PageConfig, target: NodeId) {
    let Some(selector) = document.first_by_class(&page.selector_class) else {
        return;
    };
    if document.contains(selector, target) {
        return;
    }
    if let Some(menu) = document.element_by_id(&page.menu_id) {
        document.remove_class(menu, &page.open_class);
    }
}

/// The choices the selector offers, in `available_locales` order.
#[must_use]
pub fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    i18n.available_locales()
        .iter()
        .map(|code| LanguageOption {
            code: code.clone(),
            display_name: i18n.display_name(code).unwrap_or_else(|| code.to_string()),
        })
        .collect()
}
