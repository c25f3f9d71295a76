// SPDX-License-Identifier: MPL-2.0
use olib_i18n::app::config::{Config, PageConfig};
use olib_i18n::app::persisted_state::{MemoryStore, PreferenceStore, StateFile};
use olib_i18n::app::{Message, Session};
use olib_i18n::dom::{self, Document};
use olib_i18n::i18n::{resolve_locale, FixedLocale, I18n};
use olib_i18n::ui::content::update_content;
use olib_i18n::ui::language_selector::MenuState;
use std::path::PathBuf;
use tempfile::tempdir;
use unic_langid::LanguageIdentifier;

fn landing_page() -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/landing.html");
    let source = std::fs::read_to_string(path).expect("fixture should exist");
    dom::parse(&source).expect("fixture should parse")
}

fn lang(code: &str) -> LanguageIdentifier {
    code.parse().unwrap()
}

/// One element per key of the English table.
fn page_with_every_key(i18n: &I18n) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let html = doc.create_element(root, "html", [("lang", "en")]);
    for key in i18n.message_ids(&lang("en")).unwrap() {
        let node = doc.create_element(html, "span", [("data-i18n", key.as_str())]);
        doc.append_text(node, "placeholder");
    }
    doc
}

#[test]
fn every_key_renders_its_table_entry_in_every_language() {
    let i18n = I18n::new().unwrap();
    let page = PageConfig::default();

    for locale in i18n.available_locales() {
        let mut doc = page_with_every_key(&i18n);
        update_content(&mut doc, &i18n, locale, &page);

        for node in doc.elements_with_attribute("data-i18n") {
            let key = doc.attribute(node, "data-i18n").unwrap();
            let expected = i18n.tr(locale, key).expect("identical key sets");
            assert_eq!(doc.text_content(node), expected, "{locale} / {key}");
        }
        let html = doc.document_element().unwrap();
        assert_eq!(doc.attribute(html, "lang"), Some(locale.to_string().as_str()));
    }
}

#[test]
fn content_update_is_idempotent_on_the_landing_page() {
    let i18n = I18n::new().unwrap();
    let mut doc = landing_page();

    update_content(&mut doc, &i18n, &lang("ja"), &PageConfig::default());
    let first = dom::serialize(&doc);
    update_content(&mut doc, &i18n, &lang("ja"), &PageConfig::default());

    assert_eq!(dom::serialize(&doc), first);
}

#[test]
fn resolver_examples() {
    let available = I18n::new().unwrap().available_locales().to_vec();
    assert_eq!(resolve_locale(None, Some("ja-JP"), &available), lang("ja"));
    assert_eq!(resolve_locale(Some("zh"), Some("en-US"), &available), lang("zh"));
    assert_eq!(resolve_locale(None, Some("fr-FR"), &available), lang("en"));
}

#[test]
fn switched_language_survives_a_reload() {
    let temp_dir = tempdir().expect("create temp dir");
    let data_dir = temp_dir.path().to_path_buf();
    let config = Config::default();

    {
        let (store, _) = StateFile::load_from(Some(data_dir.clone()));
        let mut session = Session::start(
            I18n::new().unwrap(),
            store,
            &FixedLocale::new("en-US"),
            &config,
        );
        let mut doc = landing_page();
        session.update(&mut doc, Message::ContentLoaded);
        assert_eq!(session.active_language(), &lang("en"));

        session.update(&mut doc, Message::SelectLanguage(lang("ko")));
    }

    let (store, warning) = StateFile::load_from(Some(data_dir));
    assert!(warning.is_none());
    assert_eq!(store.get_item("lang").as_deref(), Some("ko"));

    let session = Session::start(
        I18n::new().unwrap(),
        store,
        &FixedLocale::new("en-US"),
        &config,
    );
    assert_eq!(session.active_language(), &lang("ko"));
}

#[test]
fn page_load_then_switch_renders_the_landing_page() {
    let mut session = Session::start(
        I18n::new().unwrap(),
        MemoryStore::new(),
        &FixedLocale::new("zh-CN"),
        &Config::default(),
    );
    let mut doc = landing_page();

    session.update(&mut doc, Message::ContentLoaded);
    let label = doc.element_by_id("lang-btn").unwrap();
    let nav = doc.elements_with_attribute("data-i18n")[0];
    assert_eq!(doc.text_content(label), "简体中文");
    assert_eq!(doc.text_content(nav), "功能特点");

    session.update(&mut doc, Message::SelectLanguage(lang("ko")));
    assert_eq!(doc.text_content(label), "한국어");
    assert_eq!(doc.text_content(nav), "기능");

    let written = dom::serialize(&doc);
    assert!(written.contains("<html lang=\"ko\">"));
    assert!(written.contains("<title>Olib</title>"));
    assert!(written.contains("<button id=\"lang-btn\" class=\"lang-btn\">한국어</button>"));
}

#[test]
fn menu_follows_toggle_and_outside_clicks() {
    let session = Session::start(
        I18n::new().unwrap(),
        MemoryStore::new(),
        &FixedLocale(None),
        &Config::default(),
    );
    let mut doc = landing_page();
    let button = doc.element_by_id("lang-btn").unwrap();
    let outside = doc.first_by_class("hero").unwrap();

    assert_eq!(session.menu_state(&doc), MenuState::Closed);
    assert_eq!(session.toggle_menu(&mut doc), Some(MenuState::Open));

    session.on_document_click(&mut doc, button);
    assert_eq!(session.menu_state(&doc), MenuState::Open);

    session.on_document_click(&mut doc, outside);
    assert_eq!(session.menu_state(&doc), MenuState::Closed);
}

#[test]
fn key_missing_from_one_language_keeps_previous_text() {
    let i18n = I18n::from_sources([
        (
            lang("en"),
            "language-self-name = English\nbanner = Launch week\ntagline = Read freely\n".to_string(),
        ),
        (
            lang("ja"),
            "language-self-name = 日本語\ntagline = 自由に読もう\n".to_string(),
        ),
    ])
    .unwrap();
    let mut doc = Document::new();
    let root = doc.root();
    let html = doc.create_element(root, "html", Vec::<(String, String)>::new());
    let banner = doc.create_element(html, "p", [("data-i18n", "banner")]);
    let tagline = doc.create_element(html, "p", [("data-i18n", "tagline")]);
    let page = PageConfig::default();

    update_content(&mut doc, &i18n, &lang("en"), &page);
    assert_eq!(doc.text_content(banner), "Launch week");

    update_content(&mut doc, &i18n, &lang("ja"), &page);
    assert_eq!(doc.text_content(banner), "Launch week");
    assert_eq!(doc.text_content(tagline), "自由に読もう");
}

#[test]
fn untranslated_fixture_element_keeps_authored_text() {
    let i18n = I18n::new().unwrap();
    let mut doc = landing_page();
    update_content(&mut doc, &i18n, &lang("zh"), &PageConfig::default());

    let banner = doc
        .elements_with_attribute("data-i18n")
        .into_iter()
        .find(|&node| doc.attribute(node, "data-i18n") == Some("launch_banner"))
        .unwrap();
    assert_eq!(doc.text_content(banner), "Launch week: everything is free");
}
