// SPDX-License-Identifier: MPL-2.0
//! `olib-i18n` - localizes a landing page document from the command line.
//!
//! The binary plays the browser's part: it loads the page, runs the
//! page-load localization, applies an optional language selection (which is
//! persisted, so the next run starts in that language) and writes the
//! localized markup out.

use olib_i18n::app::config;
use olib_i18n::app::paths;
use olib_i18n::app::persisted_state::StateFile;
use olib_i18n::app::{Flags, Message, Session};
use olib_i18n::dom;
use olib_i18n::error::{Error, Result};
use olib_i18n::i18n::{I18n, SystemLocale};
use olib_i18n::ui::language_selector;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unic_langid::LanguageIdentifier;

const USAGE: &str = "\
Usage: olib-i18n [OPTIONS] <PAGE>

Options:
  --lang <CODE>         Switch to CODE after loading (persisted)
  -o, --output <PATH>   Write the localized page to PATH instead of stdout
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding the persisted preference
  --list-languages      Print the selectable languages and exit
  -h, --help            Print this help";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> std::result::Result<Flags, pico_args::Error> {
    let mut flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        output_path: args.opt_value_from_str(["-o", "--output"])?,
        list_languages: args.contains("--list-languages"),
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        page_path: None,
    };

    flags.page_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    if flags.page_path.is_none() && !flags.list_languages {
        return Err(pico_args::Error::MissingArgument);
    }
    Ok(flags)
}

fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "using default configuration");
    }

    let i18n = I18n::new()?;

    if flags.list_languages {
        for option in language_selector::language_options(&i18n) {
            println!("{}\t{}", option.code, option.display_name);
        }
        return Ok(());
    }

    let Some(page_path) = flags.page_path else {
        return Err(Error::Config("no page given".to_string()));
    };

    let (store, state_warning) = StateFile::load();
    if let Some(warning) = state_warning {
        tracing::warn!(%warning, "starting without a persisted language preference");
    }

    let mut session = Session::start(i18n, store, &SystemLocale, &config);

    let source = fs::read_to_string(&page_path)?;
    let mut document = dom::parse(&source)?;
    session.update(&mut document, Message::ContentLoaded);

    if let Some(lang) = flags.lang {
        let locale = lang.parse::<LanguageIdentifier>().map_err(|error| {
            Error::Config(format!("invalid language code {lang:?}: {error}"))
        })?;
        session.update(&mut document, Message::SelectLanguage(locale));
    }

    let output = dom::serialize(&document);
    match flags.output_path {
        Some(path) => fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}
