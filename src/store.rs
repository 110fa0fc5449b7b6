use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, PrefKey, Scope};

const STORE_DIR: &str = ".parlor";

/// Flat string key-value store backing the modal preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn get_pref(&self, key: PrefKey, scope: &Scope) -> Result<Option<String>> {
        self.get(&key.storage_key(scope))
    }

    fn set_pref(&mut self, key: PrefKey, scope: &Scope, value: &str) -> Result<()> {
        self.set(&key.storage_key(scope), value)
    }
}

/// In-process store; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    entries: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk `.parlor` directory: `config.json` plus `prefs.json`.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn parlor_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(workspace_root: &Path) -> Result<Self> {
        let root = Self::parlor_dir(workspace_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `parlor init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    /// Walks up from `start` to the nearest directory holding `.parlor`.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::parlor_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!(
            "No {} directory found (run `parlor init`)",
            STORE_DIR
        ))
    }

    pub fn init(workspace_root: &Path, force: bool) -> Result<Self> {
        let root = Self::parlor_dir(workspace_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;

        let store = Self { root };
        store.write_config(&ClientConfig::default())?;
        store.write_prefs(&BTreeMap::new())?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_prefs(&self) -> Result<BTreeMap<String, String>> {
        let path = self.root.join("prefs.json");
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = fs::read(&path).context("read prefs.json")?;
        serde_json::from_slice(&bytes).context("parse prefs.json")
    }

    pub fn write_prefs(&self, prefs: &BTreeMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(prefs).context("serialize prefs")?;
        write_atomic(&self.root.join("prefs.json"), &bytes).context("write prefs.json")?;
        Ok(())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_prefs()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut prefs = self.read_prefs()?;
        prefs.insert(key.to_string(), value.to_string());
        self.write_prefs(&prefs)
    }
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store/prefs_tests.rs"]
mod tests;
