// SPDX-License-Identifier: MPL-2.0
//! Text substitution for elements tagged with a translation key.

use crate::app::config::{PageConfig, LANG_ATTRIBUTE};
use crate::dom::Document;
use crate::i18n::I18n;
use unic_langid::LanguageIdentifier;

/// Rewrites every tagged element with its translation in `locale` and
/// declares `locale` on the document element.
///
/// Elements whose key has no translation keep their current text. Running
/// the pass again with the same inputs changes nothing.
pub fn update_content(
    document: &mut Document,
    i18n: &I18n,
    locale: &LanguageIdentifier,
    page: &PageConfig,
) {
    let mut missed = 0usize;

    for node in document.elements_with_attribute(&page.key_attribute) {
        let Some(key) = document.attribute(node, &page.key_attribute) else {
            continue;
        };

        match i18n.tr(locale, key).filter(|text| !text.is_empty()) {
            Some(text) => document.set_text_content(node, &text),
            None => {
                tracing::debug!(%locale, key, "no translation; leaving element unchanged");
                missed += 1;
            }
        }
    }

    if missed > 0 && !i18n.supports(locale) {
        tracing::debug!(%locale, missed, "language has no string table");
    }

    if let Some(root) = document.document_element() {
        document.set_attribute(root, LANG_ATTRIBUTE, &locale.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().unwrap()
    }

    fn page() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let html = doc.create_element(root, "html", [("lang", "en")]);
        let title = doc.create_element(html, "h1", [("data-i18n", "hero_title_1")]);
        doc.append_text(title, "Knowledge");
        let custom = doc.create_element(html, "p", [("data-i18n", "not_in_table")]);
        doc.append_text(custom, "Authored text");
        (doc, html, title, custom)
    }

    #[test]
    fn replaces_text_and_sets_lang() {
        let i18n = I18n::new().unwrap();
        let (mut doc, html, title, _) = page();

        update_content(&mut doc, &i18n, &lang("ja"), &PageConfig::default());

        assert_eq!(doc.text_content(title), "知識は");
        assert_eq!(doc.attribute(html, "lang"), Some("ja"));
    }

    #[test]
    fn missing_key_keeps_previous_text() {
        let i18n = I18n::new().unwrap();
        let (mut doc, _, _, custom) = page();

        update_content(&mut doc, &i18n, &lang("ko"), &PageConfig::default());

        assert_eq!(doc.text_content(custom), "Authored text");
    }

    #[test]
    fn unsupported_language_changes_only_lang_attribute() {
        let i18n = I18n::new().unwrap();
        let (mut doc, html, title, custom) = page();

        update_content(&mut doc, &i18n, &lang("fr"), &PageConfig::default());

        assert_eq!(doc.text_content(title), "Knowledge");
        assert_eq!(doc.text_content(custom), "Authored text");
        assert_eq!(doc.attribute(html, "lang"), Some("fr"));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let i18n = I18n::new().unwrap();
        let (mut doc, _, _, _) = page();

        update_content(&mut doc, &i18n, &lang("zh"), &PageConfig::default());
        let first = crate::dom::serialize(&doc);
        update_content(&mut doc, &i18n, &lang("zh"), &PageConfig::default());

        assert_eq!(crate::dom::serialize(&doc), first);
    }

    #[test]
    fn honours_configured_key_attribute() {
        let i18n = I18n::new().unwrap();
        let mut doc = Document::new();
        let root = doc.root();
        let html = doc.create_element(root, "html", Vec::<(String, String)>::new());
        let link = doc.create_element(html, "a", [("data-t", "nav_web")]);
        doc.append_text(link, "Web Version");

        let page = PageConfig {
            key_attribute: "data-t".to_string(),
            ..PageConfig::default()
        };
        update_content(&mut doc, &i18n, &lang("zh"), &page);

        assert_eq!(doc.text_content(link), "网页版");
    }
}
