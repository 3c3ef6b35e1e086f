#![cfg(feature = "std")]

//! JSON documents kept in the user's data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

pub const STATS_FILE: &str = ".broadside_stats.json";
pub const ACHIEVEMENTS_FILE: &str = ".broadside_achievements.json";

/// `$HOME`, or the working directory when it is not set.
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read `path` as JSON. Missing, unreadable or corrupt files yield
/// `T::default()`.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return T::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("ignoring corrupt {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// Write `doc` to `path` as pretty JSON.
pub fn save<T: Serialize>(path: &Path, doc: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
