//! High-score persistence gateway.
//!
//! The session controller owns the high score in memory and flushes it
//! through a [`ScoreStore`] only when it changes. The file-backed store
//! keeps a tiny JSON document so the format stays inspectable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Read/write gateway for the best-ever score.
pub trait ScoreStore {
    /// Load the persisted high score; absent state reads as 0.
    fn load(&self) -> Result<u32>;

    /// Persist a new high score.
    fn save(&mut self, high_score: u32) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's home directory.
    pub fn default_path() -> PathBuf {
        let base = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        base.join(".tui-snake").join("highscore.json")
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        let record: HighScoreRecord = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed high score file {:?}", self.path))?;
        Ok(record.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score })
            .context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;
        Ok(())
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    value: u32,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, writes: 0 }
    }

    /// Number of times `save` was called.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.value = high_score;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_zero() {
        let dir = TempDir::new().unwrap();
        let store = FileScoreStore::new(dir.path().join("highscore.json"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileScoreStore::new(dir.path().join("highscore.json"));
        store.save(120).unwrap();
        assert_eq!(store.load().unwrap(), 120);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("highscore.json");
        let mut store = FileScoreStore::new(nested.clone());
        store.save(30).unwrap();
        assert!(nested.exists());
        assert_eq!(store.load().unwrap(), 30);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("highscore.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileScoreStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load().unwrap(), 0);
        store.save(10).unwrap();
        store.save(20).unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.load().unwrap(), 20);
    }
}
