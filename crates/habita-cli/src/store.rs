//! Local data file access
//!
//! The CLI reads and writes a single JSON document holding the habit
//! collection and the profile snapshot, in the same wire format the
//! Habita app exchanges with its backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use habita::{Habit, UserProfile};

/// The on-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub profile: UserProfile,
}

impl DataFile {
    /// Load from disk; a missing file is an empty collection
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {:?}", path))?;
        let data: DataFile =
            serde_json::from_str(&content).with_context(|| "Failed to parse data file")?;
        Ok(data)
    }

    /// Save to disk, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize data")?;
        fs::write(path, content).with_context(|| format!("Failed to write data file {:?}", path))?;
        Ok(())
    }
}
