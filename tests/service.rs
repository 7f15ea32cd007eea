//! Integration tests for LeagueService over the stores.

use league_tournament_web::{
    compute_stats, League, LeagueError, LeagueService, LeagueStore, MemoryStore, Snapshot,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

fn service_with(names: &[&str]) -> LeagueService {
    let service = LeagueService::new(Arc::new(MemoryStore::new()));
    for name in names {
        service.register_entrant(name).unwrap();
    }
    service
}

/// Reports `Conflict` for the first `conflicts` commits, then delegates.
struct FlakyStore {
    inner: MemoryStore,
    conflicts: AtomicU32,
}

impl LeagueStore for FlakyStore {
    fn load(&self) -> Result<Snapshot, LeagueError> {
        self.inner.load()
    }

    fn commit(&self, expected_revision: u64, league: &League) -> Result<u64, LeagueError> {
        let left = self.conflicts.load(Ordering::SeqCst);
        if left > 0 {
            self.conflicts.store(left - 1, Ordering::SeqCst);
            return Err(LeagueError::Conflict);
        }
        self.inner.commit(expected_revision, league)
    }
}

struct DownStore;

impl LeagueStore for DownStore {
    fn load(&self) -> Result<Snapshot, LeagueError> {
        Err(LeagueError::StoreUnavailable("connection refused".to_string()))
    }

    fn commit(&self, _expected_revision: u64, _league: &League) -> Result<u64, LeagueError> {
        Err(LeagueError::StoreUnavailable("connection refused".to_string()))
    }
}

#[test]
fn commit_twice_requires_reset() {
    let service = service_with(&["A", "B", "C", "D"]);
    let rounds = service.preview_fixtures(false).unwrap();
    assert_eq!(rounds.len(), 6);

    assert_eq!(service.commit_fixtures(&rounds), Ok(12));
    assert_eq!(service.commit_fixtures(&rounds), Err(LeagueError::AlreadyScheduled));
    assert_eq!(service.matches().unwrap().len(), 12);

    service.reset_tournament().unwrap();
    assert!(service.matches().unwrap().is_empty());
    assert_eq!(service.commit_fixtures(&rounds), Ok(12));
}

#[test]
fn preview_does_not_store_anything() {
    let service = service_with(&["A", "B", "C"]);
    let rounds = service.preview_fixtures(true).unwrap();
    assert_eq!(rounds.len(), 6);
    assert!(service.matches().unwrap().is_empty());
}

#[test]
fn roster_is_locked_once_scheduled() {
    let service = service_with(&["A", "B"]);
    assert_eq!(service.register_entrant("a"), Err(LeagueError::DuplicateEntrantName));
    assert_eq!(service.register_entrant("   "), Err(LeagueError::EmptyName));

    let rounds = service.preview_fixtures(false).unwrap();
    service.commit_fixtures(&rounds).unwrap();
    let a = service.entrants().unwrap()[0].id;

    assert_eq!(service.register_entrant("C"), Err(LeagueError::RosterLocked));
    assert_eq!(service.remove_entrant(a), Err(LeagueError::RosterLocked));

    service.reset_tournament().unwrap();
    assert_eq!(service.remove_entrant(a).unwrap().name, "A");
    assert_eq!(service.entrants().unwrap().len(), 1);
}

#[test]
fn pending_and_history_split_matches_in_schedule_order() {
    let service = service_with(&["A", "B", "C", "D"]);
    let rounds = service.preview_fixtures(false).unwrap();
    service.commit_fixtures(&rounds).unwrap();

    let pending = service.pending_matches().unwrap();
    assert_eq!(pending.len(), 12);
    let keys: Vec<_> = pending.iter().map(|m| m.schedule_key()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    service.submit_result(pending[0].id, 2, 2).unwrap();
    service.submit_result(pending[5].id, 0, 1).unwrap();
    assert_eq!(service.pending_matches().unwrap().len(), 10);
    let history = service.match_history().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|m| m.is_settled()));
}

#[test]
fn standings_follow_submitted_results() {
    let service = service_with(&["A", "B", "C"]);
    let rounds = service.preview_fixtures(false).unwrap();
    service.commit_fixtures(&rounds).unwrap();
    let matches = service.matches().unwrap();
    let entrants = service.entrants().unwrap();
    let c = entrants.iter().find(|e| e.name == "C").unwrap().id;

    // C wins every match it plays.
    for m in matches.iter().filter(|m| m.involves(c)) {
        let (ga, gb) = if m.entrant_a == c { (2, 0) } else { (0, 2) };
        service.submit_result(m.id, ga, gb).unwrap();
    }
    let table = service.standings().unwrap();
    assert_eq!(table[0].name, "C");
    assert_eq!(table[0].stats.points, 12);
    assert_eq!(table[0].stats.goal_difference, 8);
}

#[test]
fn conflicts_are_retried_then_surfaced() {
    let store = Arc::new(FlakyStore {
        inner: MemoryStore::new(),
        conflicts: AtomicU32::new(2),
    });
    let service = LeagueService::new(store.clone()).with_max_commit_retries(3);
    assert!(service.register_entrant("A").is_ok());
    assert_eq!(service.entrants().unwrap().len(), 1);

    store.conflicts.store(10, Ordering::SeqCst);
    assert_eq!(service.register_entrant("B"), Err(LeagueError::Conflict));
    assert_eq!(service.entrants().unwrap().len(), 1);
}

#[test]
fn store_failures_are_not_empty_results() {
    let service = LeagueService::new(Arc::new(DownStore));
    assert!(matches!(service.standings(), Err(LeagueError::StoreUnavailable(_))));
    assert!(matches!(service.pending_matches(), Err(LeagueError::StoreUnavailable(_))));
    assert!(matches!(service.reset_tournament(), Err(LeagueError::StoreUnavailable(_))));
}

#[test]
fn concurrent_submissions_keep_statistics_consistent() {
    let service = Arc::new(service_with(&["A", "B", "C", "D", "E", "F"]).with_max_commit_retries(1000));
    let rounds = service.preview_fixtures(false).unwrap();
    service.commit_fixtures(&rounds).unwrap();
    let ids: Vec<_> = service.matches().unwrap().iter().map(|m| m.id).collect();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let service = Arc::clone(&service);
            let ids = ids.clone();
            thread::spawn(move || {
                for (i, m) in ids.iter().enumerate() {
                    service.submit_result(*m, ((i + t) % 4) as i64, (t % 3) as i64).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let matches = service.matches().unwrap();
    assert!(matches.iter().all(|m| m.is_settled()));
    for e in service.entrants().unwrap() {
        assert_eq!(e.stats, compute_stats(e.id, &matches), "stats of {}", e.name);
        assert_eq!(e.stats.played(), 10);
    }
}
