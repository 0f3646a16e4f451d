//! User preferences and their key-value persistence.
//!
//! Preferences are stored under a single key as JSON text, read once at
//! startup and overwritten wholesale on save.

use crate::error::{AssistantError, AssistantResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key holding the serialized preferences.
pub const PREFERENCES_KEY: &str = "athenaPreferences";

/// Labels for each response depth, shallowest first.
pub const DETAIL_LEVELS: [&str; 5] = ["Minimal", "Basic", "Balanced", "Detailed", "Comprehensive"];

/// Response depth on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ResponseDepth(u8);

impl ResponseDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(depth: u8) -> AssistantResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&depth) {
            Ok(Self(depth))
        } else {
            Err(AssistantError::InvalidDepth(depth))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Human-readable detail level shown next to the depth setting.
    pub fn label(self) -> &'static str {
        DETAIL_LEVELS[usize::from(self.0 - 1)]
    }
}

impl Default for ResponseDepth {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for ResponseDepth {
    type Error = AssistantError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResponseDepth> for u8 {
    fn from(depth: ResponseDepth) -> Self {
        depth.0
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Stored and exported; has no effect on generated content
    pub adaptive_learning: bool,
    pub response_depth: ResponseDepth,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            adaptive_learning: true,
            response_depth: ResponseDepth::default(),
        }
    }
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AssistantResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> AssistantResult<()>;
}

/// In-memory store, used when nothing should touch the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AssistantResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> AssistantResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON object file (`{"key": "value", ...}`).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AssistantResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AssistantResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> AssistantResult<()> {
        // an unreadable file is replaced rather than blocking the save
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Load stored preferences.
///
/// Missing or unreadable entries yield `None`; the caller keeps its defaults.
pub fn load_preferences(store: &dyn KeyValueStore) -> Option<Preferences> {
    let raw = match store.get(PREFERENCES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "Could not read stored preferences");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed stored preferences");
            None
        }
    }
}

/// Overwrite the stored preferences.
pub fn save_preferences(store: &mut dyn KeyValueStore, prefs: &Preferences) -> AssistantResult<()> {
    store.set(PREFERENCES_KEY, serde_json::to_string(prefs)?)
}
