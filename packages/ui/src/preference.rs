//! Durable storage for the visitor's language choice.
//!
//! One key, one value. Anything unreadable in storage falls back to the
//! reported locale, and from there to English.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
#[cfg(not(target_arch = "wasm32"))]
use std::{fs, io};

use crate::Lang;

/// Storage key holding the language code.
pub const LANG_KEY: &str = "selectedLang";

#[cfg(not(target_arch = "wasm32"))]
const APP_NAME: &str = "404builder";
#[cfg(not(target_arch = "wasm32"))]
const PREFS_FILE: &str = "preferences.toml";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store shared by every caller in this process.
    pub fn process() -> Self {
        static STORE: OnceLock<MemoryStore> = OnceLock::new();
        STORE.get_or_init(MemoryStore::new).clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(key.to_string(), value.to_string());
            }
            Err(_) => tracing::warn!(key, "preference: memory store poisoned, dropping write"),
        }
    }
}

/// `window.localStorage`, or nothing when the browser refuses access.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::debug!("preference: localStorage unavailable, choices will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!(key, "preference: localStorage write rejected");
        }
    }
}

/// TOML file of string entries, read and rewritten on every access.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `<config dir>/404builder/preferences.toml`. Without a config dir nothing persists.
    pub fn in_config_dir() -> Self {
        let path = dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(PREFS_FILE);
            path
        });
        if path.is_none() {
            tracing::debug!("preference: no config directory, choices will not persist");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read(&self) -> BTreeMap<String, String> {
        let Some(path) = self.path.as_deref() else {
            return BTreeMap::new();
        };
        let Ok(content) = fs::read_to_string(path) else {
            return BTreeMap::new();
        };
        toml::from_str(&content).unwrap_or_else(|err| {
            tracing::debug!(path = %path.display(), %err, "preference: unreadable preferences file");
            BTreeMap::new()
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(entries).map_err(io::Error::other)?;
    fs::write(path, content)
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let mut entries = self.read();
        entries.insert(key.to_string(), value.to_string());
        if let Err(err) = write_entries(path, &entries) {
            tracing::warn!(path = %path.display(), %err, "preference: could not save preferences file");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = BrowserStore;

#[cfg(all(not(target_arch = "wasm32"), not(test)))]
pub type PlatformStore = FileStore;

// Unit tests must not touch the real config directory.
#[cfg(all(not(target_arch = "wasm32"), test))]
pub type PlatformStore = MemoryStore;

/// Loads and saves the active [`Lang`].
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl PreferenceStore<PlatformStore> {
    /// Store backing the running app.
    #[cfg(target_arch = "wasm32")]
    pub fn platform() -> Self {
        Self::new(BrowserStore::open())
    }

    /// Store backing the running app.
    #[cfg(all(not(target_arch = "wasm32"), not(test)))]
    pub fn platform() -> Self {
        Self::new(FileStore::in_config_dir())
    }

    #[cfg(all(not(target_arch = "wasm32"), test))]
    pub fn platform() -> Self {
        Self::new(MemoryStore::process())
    }
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored language if valid, else derived from `locale`, else English.
    pub fn load(&self, locale: Option<&str>) -> Lang {
        if let Some(stored) = self.storage.get(LANG_KEY) {
            match Lang::from_code(&stored) {
                Some(lang) => return lang,
                None => tracing::debug!(%stored, "preference: ignoring unknown stored language"),
            }
        }
        locale.map(Lang::from_locale).unwrap_or_default()
    }

    pub fn save(&self, lang: Lang) {
        self.storage.set(LANG_KEY, lang.code());
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Locale the visitor's environment reports, if any.
#[cfg(target_arch = "wasm32")]
pub fn preferred_locale() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

/// Locale the visitor's environment reports, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn preferred_locale() -> Option<String> {
    locale_from_env(|key| std::env::var(key).ok())
}

/// POSIX precedence: `LC_ALL`, then `LC_MESSAGES`, then `LANG`. Empty values are skipped.
pub fn locale_from_env(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(var)
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_uses_locale() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        assert_eq!(prefs.load(Some("es-PY")), Lang::Es);
        assert_eq!(prefs.load(Some("fr-FR")), Lang::En);
        assert_eq!(prefs.load(None), Lang::En);
    }

    #[test]
    fn stored_value_wins_over_locale() {
        let store = MemoryStore::new();
        store.set(LANG_KEY, "en");
        let prefs = PreferenceStore::new(store);
        assert_eq!(prefs.load(Some("es-ES")), Lang::En);
    }

    #[test]
    fn corrupt_value_falls_back_to_locale() {
        let store = MemoryStore::new();
        store.set(LANG_KEY, "klingon");
        let prefs = PreferenceStore::new(store);
        assert_eq!(prefs.load(Some("es")), Lang::Es);
        assert_eq!(prefs.load(Some("de-DE")), Lang::En);
    }

    #[test]
    fn save_writes_the_code() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        prefs.save(Lang::Es);
        assert_eq!(prefs.storage().get(LANG_KEY).as_deref(), Some("es"));
        prefs.save(Lang::En);
        assert_eq!(prefs.storage().get(LANG_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v");
        assert_eq!(b.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_store_survives_a_restart() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("preferences.toml");

        PreferenceStore::new(FileStore::at(&path)).save(Lang::Es);
        assert!(path.exists());

        let reopened = PreferenceStore::new(FileStore::at(&path));
        assert_eq!(reopened.load(Some("en-US")), Lang::Es);
        assert_eq!(reopened.storage().path(), Some(path.as_path()));
    }

    #[test]
    fn file_store_keeps_other_entries() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FileStore::at(dir.path().join("preferences.toml"));
        store.set("other", "kept");
        store.set(LANG_KEY, "en");
        store.set(LANG_KEY, "es");
        assert_eq!(store.get("other").as_deref(), Some("kept"));
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write file");

        let prefs = PreferenceStore::new(FileStore::at(&path));
        assert_eq!(prefs.load(Some("es-PY")), Lang::Es);
        assert_eq!(prefs.load(Some("fr-FR")), Lang::En);

        prefs.save(Lang::En);
        assert_eq!(prefs.load(Some("es-PY")), Lang::En);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FileStore::at(dir.path().join("absent.toml"));
        assert_eq!(store.get(LANG_KEY), None);
    }

    #[test]
    fn env_locale_precedence() {
        let env = |key: &str| match key {
            "LC_ALL" => Some(String::new()),
            "LC_MESSAGES" => None,
            "LANG" => Some("es_ES.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(locale_from_env(env).as_deref(), Some("es_ES.UTF-8"));

        let env = |key: &str| match key {
            "LC_ALL" => Some("fr_FR.UTF-8".to_string()),
            _ => Some("es_ES.UTF-8".to_string()),
        };
        assert_eq!(locale_from_env(env).as_deref(), Some("fr_FR.UTF-8"));
        assert_eq!(locale_from_env(|_| None), None);
    }
}
