use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::store::write_atomic;

/// Where a character's long-term memory text lives.
pub trait MemorySource {
    fn load_memory(&self, character: &str) -> Result<String>;
    fn save_memory(&mut self, character: &str, text: &str) -> Result<()>;
}

/// Memory files laid out as `<dir>/<lowercased character>_memory.txt`.
#[derive(Clone, Debug)]
pub struct MemoryDir {
    dir: PathBuf,
}

impl MemoryDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Memory file for `character`. Names that could leave the directory are
    /// refused.
    pub fn path_for(&self, character: &str) -> Result<PathBuf> {
        if character.contains(['/', '\\']) || character.contains("..") {
            bail!("invalid character name for memory file: {:?}", character);
        }
        Ok(self
            .dir
            .join(format!("{}_memory.txt", character.to_lowercase())))
    }
}

impl MemorySource for MemoryDir {
    fn load_memory(&self, character: &str) -> Result<String> {
        let path = self.path_for(character)?;
        if !path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    fn save_memory(&mut self, character: &str, text: &str) -> Result<()> {
        let path = self.path_for(character)?;
        write_atomic(&path, text.as_bytes()).with_context(|| format!("write {}", path.display()))
    }
}
