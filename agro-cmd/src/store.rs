//! File-backed city store for the CLI.

use agro_advice::{CityStore, StoreError, CITY_STORAGE_KEY};
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

/// Name of the state directory under `$HOME`.
pub const STATE_DIR_NAME: &str = ".agro-advisor";

/// Use `explicit` when given, otherwise `$HOME/.agro-advisor`.
pub fn resolve_state_dir(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let home = std::env::var_os("HOME").context("HOME is not set; pass --state-dir")?;
    Ok(PathBuf::from(home).join(STATE_DIR_NAME))
}

/// Keeps the last submitted city in a file named after the storage key.
#[derive(Debug, Clone)]
pub struct FileCityStore {
    path: PathBuf,
}

impl FileCityStore {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CITY_STORAGE_KEY),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CityStore for FileCityStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .filter(|city| !city.is_empty())
    }

    fn save(&mut self, city: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, city)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("agro-cmd-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_round_trip_is_verbatim() {
        let dir = scratch_dir("store");
        let mut store = FileCityStore::in_dir(&dir);
        assert_eq!(store.load(), None);

        store.save("São Paulo").unwrap();
        assert_eq!(store.load().as_deref(), Some("São Paulo"));
        assert!(store.path().ends_with("userCity"));

        store.save("Pune").unwrap();
        assert_eq!(FileCityStore::in_dir(&dir).load().as_deref(), Some("Pune"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_explicit_state_dir_wins() {
        let dir = resolve_state_dir(Some(PathBuf::from("/tmp/agro"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/agro"));
    }
}
