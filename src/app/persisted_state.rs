// SPDX-License-Identifier: MPL-2.0
//! Persisted key-value state using CBOR format.
//!
//! The language preference survives across sessions the way browser local
//! storage would keep it: a string value under a string key. Hosts pick the
//! backing store through the [`PreferenceStore`] trait.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable deployments:
//! 1. Use `load_from()` with explicit path override
//! 2. Set `OLIB_I18N_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Key-value persistence surface.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store that lives only as long as the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct StateData {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Store backed by `state.cbor` in the data directory.
///
/// Every [`PreferenceStore::set_item`] rewrites the file.
#[derive(Debug, Clone, PartialEq)]
pub struct StateFile {
    path: Option<PathBuf>,
    data: StateData,
}

impl StateFile {
    /// Opens the state file from the default location.
    ///
    /// Returns a tuple of (store, optional_warning). If loading fails, the
    /// store starts empty and the warning describes the failure.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Opens the state file from a custom directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. `OLIB_I18N_DATA_DIR` environment variable (if set)
    /// 3. Platform-specific data directory
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        });

        let (data, warning) = match &path {
            Some(path) if path.exists() => read_state(path),
            _ => (StateData::default(), None),
        };

        (Self { path, data }, warning)
    }

    /// Location of the backing file, if the data directory could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(Error::State("no data directory available".to_string()));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.data, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn read_state(path: &Path) -> (StateData, Option<String>) {
    match fs::File::open(path) {
        Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
            Ok(data) => (data, None),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Failed to parse state file");
                (
                    StateData::default(),
                    Some(format!("could not parse {}: {error}", path.display())),
                )
            }
        },
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Failed to read state file");
            (
                StateData::default(),
                Some(format!("could not read {}: {error}", path.display())),
            )
        }
    }
}

impl PreferenceStore for StateFile {
    fn get_item(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.data
            .entries
            .insert(key.to_string(), value.to_string());
        self.save()
    }
}
