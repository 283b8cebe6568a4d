// crates/frameforge-core/src/settings.rs
//
// Persistent key-value settings. Every action that reads or writes a setting
// goes through one injected SettingsRepository rather than touching storage
// directly.
//
// Values are plain strings under fixed keys. JsonFileStore rewrites the whole
// record on each set. API keys are stored in cleartext; on Unix the file is
// created owner-only (0600).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    GrokKey,
    MidjourneyKey,
    ComfyUiServer,
    DefaultFps,
    DefaultCodec,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::GrokKey,
        SettingKey::MidjourneyKey,
        SettingKey::ComfyUiServer,
        SettingKey::DefaultFps,
        SettingKey::DefaultCodec,
    ];

    /// Storage key. These strings are the on-disk format; do not rename.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::GrokKey       => "grokKey",
            SettingKey::MidjourneyKey => "mjKey",
            SettingKey::ComfyUiServer => "comfyuiServer",
            SettingKey::DefaultFps    => "defaultFPS",
            SettingKey::DefaultCodec  => "defaultCodec",
        }
    }
}

pub trait SettingsRepository {
    fn get(&self, key: SettingKey) -> Option<String>;

    fn set(&mut self, key: SettingKey, value: &str) -> Result<()>;

    /// `get`, treating an empty stored string as absent.
    fn get_non_empty(&self, key: SettingKey) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// Session-only store. Used by tests and as the fallback when the settings
/// file cannot be opened.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsRepository for MemoryStore {
    fn get(&self, key: SettingKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: SettingKey, value: &str) -> Result<()> {
        self.values.insert(key.as_str().to_owned(), value.to_owned());
        Ok(())
    }
}

// ── JsonFileStore ─────────────────────────────────────────────────────────────

/// Settings persisted as a flat JSON object, e.g.
/// `{ "defaultCodec": "libx265", "defaultFPS": "30" }`.
///
/// Unknown keys already in the file are kept and written back untouched.
#[derive(Debug)]
pub struct JsonFileStore {
    path:   PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "settings opened");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        write_private(&self.path, text.as_bytes())?;
        Ok(())
    }
}

impl SettingsRepository for JsonFileStore {
    fn get(&self, key: SettingKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: SettingKey, value: &str) -> Result<()> {
        let previous = self.values.insert(key.as_str().to_owned(), value.to_owned());
        if let Err(e) = self.flush() {
            // Keep memory and disk in agreement when the write fails.
            match previous {
                Some(v) => self.values.insert(key.as_str().to_owned(), v),
                None    => self.values.remove(key.as_str()),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut f = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation; tighten files left by older builds.
    f.set_permissions(fs::Permissions::from_mode(0o600))?;
    f.write_all(bytes)
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_use_fixed_storage_names() {
        let names: Vec<_> = SettingKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["grokKey", "mjKey", "comfyuiServer", "defaultFPS", "defaultCodec"]);
    }

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set(SettingKey::DefaultFps, "24").unwrap();
        store.set(SettingKey::DefaultFps, "60").unwrap();
        assert_eq!(store.get(SettingKey::DefaultFps).as_deref(), Some("60"));
    }

    #[test]
    fn empty_value_reads_as_absent_through_get_non_empty() {
        let mut store = MemoryStore::new();
        store.set(SettingKey::ComfyUiServer, "").unwrap();
        assert_eq!(store.get(SettingKey::ComfyUiServer).as_deref(), Some(""));
        assert_eq!(store.get_non_empty(SettingKey::ComfyUiServer), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(SettingKey::GrokKey), None);
        store.set(SettingKey::GrokKey, "xai-123").unwrap();
        store.set(SettingKey::DefaultCodec, "libx265").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(SettingKey::GrokKey).as_deref(), Some("xai-123"));
        assert_eq!(reopened.get(SettingKey::DefaultCodec).as_deref(), Some("libx265"));
    }

    #[test]
    fn file_store_writes_flat_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set(SettingKey::DefaultFps, "30").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["defaultFPS"], "30");
    }

    #[test]
    fn file_store_keeps_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set(SettingKey::MidjourneyKey, "mj").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"theme\""));
        assert!(text.contains("\"mjKey\""));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(crate::ControlError::Json(_))));
    }

    #[cfg(unix)]
    #[test]
    fn file_is_owner_only_on_unix() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set(SettingKey::GrokKey, "secret").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
