// SPDX-License-Identifier: MPL-2.0
//! Page events and runtime flags for the host.

use crate::dom::NodeId;
use unic_langid::LanguageIdentifier;

/// Page events consumed by `Session::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The document finished loading.
    ContentLoaded,
    /// The visitor picked a language from the selector menu.
    SelectLanguage(LanguageIdentifier),
    /// The selector button was activated.
    ToggleMenu,
    /// A click anywhere on the page, with the clicked node.
    DocumentClick(NodeId),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Language to switch to after the page loads (e.g. `ja`), persisted
    /// like a selection from the menu.
    pub lang: Option<String>,
    /// Page markup to localize.
    pub page_path: Option<String>,
    /// Where to write the localized markup; stdout when absent.
    pub output_path: Option<String>,
    /// Print the selectable languages and exit.
    pub list_languages: bool,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `OLIB_I18N_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `OLIB_I18N_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
