//! In-process store: the league document behind a RwLock.

use crate::models::{League, LeagueError};
use crate::store::{LeagueStore, Snapshot};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing league at revision 0.
    pub fn with_league(league: League) -> Self {
        Self {
            inner: RwLock::new(Snapshot {
                revision: 0,
                league,
            }),
        }
    }
}

impl LeagueStore for MemoryStore {
    fn load(&self) -> Result<Snapshot, LeagueError> {
        let g = self
            .inner
            .read()
            .map_err(|_| LeagueError::StoreUnavailable("lock error".to_string()))?;
        Ok(g.clone())
    }

    fn commit(&self, expected_revision: u64, league: &League) -> Result<u64, LeagueError> {
        let mut g = self
            .inner
            .write()
            .map_err(|_| LeagueError::StoreUnavailable("lock error".to_string()))?;
        if g.revision != expected_revision {
            return Err(LeagueError::Conflict);
        }
        g.revision += 1;
        g.league = league.clone();
        Ok(g.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_revision_conflicts() {
        let store = MemoryStore::new();
        let snap = store.load().unwrap();
        assert_eq!(store.commit(snap.revision, &snap.league), Ok(1));
        assert_eq!(
            store.commit(snap.revision, &snap.league),
            Err(LeagueError::Conflict)
        );
        assert_eq!(store.load().unwrap().revision, 1);
    }
}
