//! JSON file store: the snapshot lives in one file, replaced atomically on commit.

use crate::models::{League, LeagueError};
use crate::store::{LeagueStore, Snapshot};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// League snapshot kept in one JSON file, replaced atomically on every commit.
///
/// Single-process only: the revision check is serialised by an in-process mutex, so two
/// processes pointed at the same file can overwrite each other's commits.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serialises read-compare-write within this process.
    write_lock: Mutex<()>,
}

fn unavailable(context: &str, e: impl std::fmt::Display) -> LeagueError {
    LeagueError::StoreUnavailable(format!("{}: {}", context, e))
}

impl JsonFileStore {
    /// A missing file reads as an empty league at revision 0.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> Result<Snapshot, LeagueError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| unavailable("corrupt league file", e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(unavailable("read failed", e)),
        }
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> Result<(), LeagueError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| unavailable("encode failed", e))?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(|e| unavailable("create failed", e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| unavailable("write failed", e))?;
        // Contents must be on disk before the rename makes them visible.
        file.sync_all().map_err(|e| unavailable("sync failed", e))?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(|e| unavailable("rename failed", e))
    }
}

impl LeagueStore for JsonFileStore {
    fn load(&self) -> Result<Snapshot, LeagueError> {
        self.read_snapshot()
    }

    fn commit(&self, expected_revision: u64, league: &League) -> Result<u64, LeagueError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| LeagueError::StoreUnavailable("lock error".to_string()))?;
        let current = self.read_snapshot()?;
        if current.revision != expected_revision {
            return Err(LeagueError::Conflict);
        }
        let next = Snapshot {
            revision: current.revision + 1,
            league: league.clone(),
        };
        self.write_snapshot(&next)?;
        log::debug!("Wrote league revision {} to {}", next.revision, self.path.display());
        Ok(next.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entrant;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("league-store-{}-{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_file_is_empty_league() {
        let store = JsonFileStore::new(temp_path("missing"));
        let snap = store.load().unwrap();
        assert_eq!(snap.revision, 0);
        assert!(snap.league.entrants.is_empty());
    }

    #[test]
    fn commit_persists_and_checks_revision() {
        let path = temp_path("commit");
        let store = JsonFileStore::new(&path);
        let mut league = League::new();
        league.entrants.push(Entrant::new("Ana"));

        assert_eq!(store.commit(0, &league), Ok(1));
        assert_eq!(store.commit(0, &league), Err(LeagueError::Conflict));

        let reopened = JsonFileStore::new(&path);
        let snap = reopened.load().unwrap();
        assert_eq!(snap.revision, 1);
        assert_eq!(snap.league, league);
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn corrupt_file_is_store_unavailable() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(LeagueError::StoreUnavailable(_))));
        fs::remove_file(path).unwrap();
    }
}
