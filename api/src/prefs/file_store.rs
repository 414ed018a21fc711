//! A [`KeyValueStore`] kept in a JSON file, for builds without a browser.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use dioxus_logger::tracing::warn;

use super::favorites::KeyValueStore;
use super::favorites::StorageError;

/// Overrides the directory holding the store file.
pub const DATA_DIR_VAR: &str = "COIN_WATCH_DATA_DIR";
pub const FILE_NAME: &str = "coin-watch.json";

/// Every key lives in one JSON object; each write rewrites the file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$COIN_WATCH_DATA_DIR/coin-watch.json`, else
    /// `$HOME/.coin-watch/coin-watch.json`, else the working directory.
    pub fn in_default_location() -> Self {
        let dir = std::env::var_os(DATA_DIR_VAR)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".coin-watch")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut items) => items.remove(key),
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // an unreadable file is overwritten
        let mut items = self.read_all().unwrap_or_default();
        items.insert(key.to_string(), value.to_string());
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&items)?)?;
        Ok(())
    }
}
