//! LeagueService: the engine's operations over a `LeagueStore`.
//!
//! Every mutation loads a snapshot, applies the logic to an owned copy and commits it with
//! the revision it was read at. A failed operation never reaches the store; a `Conflict`
//! reruns the whole read-modify-commit.

use crate::logic::{self, Ranking};
use crate::models::{Entrant, EntrantId, GameMatch, League, LeagueError, MatchId, Round};
use crate::store::LeagueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeagueService {
    store: Arc<dyn LeagueStore>,
    ranking: Ranking,
    max_commit_retries: u32,
}

impl LeagueService {
    pub fn new(store: Arc<dyn LeagueStore>) -> Self {
        Self {
            store,
            ranking: Ranking::default(),
            max_commit_retries: 3,
        }
    }

    pub fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_max_commit_retries(mut self, retries: u32) -> Self {
        self.max_commit_retries = retries;
        self
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    fn read(&self) -> Result<League, LeagueError> {
        Ok(self.store.load()?.league)
    }

    /// Run `op` on a fresh copy of the league and commit it atomically.
    fn mutate<T>(
        &self,
        mut op: impl FnMut(&mut League) -> Result<T, LeagueError>,
    ) -> Result<T, LeagueError> {
        let mut attempt = 0;
        loop {
            let snapshot = self.store.load()?;
            let mut league = snapshot.league;
            let out = op(&mut league)?;
            match self.store.commit(snapshot.revision, &league) {
                Ok(_) => return Ok(out),
                Err(LeagueError::Conflict) if attempt < self.max_commit_retries => {
                    attempt += 1;
                    log::warn!(
                        "Concurrent update at revision {}, retrying ({}/{})",
                        snapshot.revision,
                        attempt,
                        self.max_commit_retries
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Registered entrants in registration order.
    pub fn entrants(&self) -> Result<Vec<Entrant>, LeagueError> {
        Ok(self.read()?.entrants)
    }

    pub fn register_entrant(&self, name: &str) -> Result<Entrant, LeagueError> {
        self.mutate(|league| logic::register_entrant(league, name))
    }

    pub fn remove_entrant(&self, id: EntrantId) -> Result<Entrant, LeagueError> {
        self.mutate(|league| logic::remove_entrant(league, id))
    }

    /// Candidate schedule for the current roster. Nothing is stored.
    pub fn preview_fixtures(&self, shuffle: bool) -> Result<Vec<Round>, LeagueError> {
        let entrants = self.read()?.entrants;
        Ok(if shuffle {
            logic::shuffled_fixtures(&entrants, &mut rand::thread_rng())
        } else {
            logic::generate_fixtures(&entrants)
        })
    }

    /// Store `rounds` as the league schedule. Returns the number of matches created.
    pub fn commit_fixtures(&self, rounds: &[Round]) -> Result<usize, LeagueError> {
        self.mutate(|league| logic::commit_fixtures(league, rounds))
    }

    pub fn submit_result(
        &self,
        match_id: MatchId,
        goals_a: i64,
        goals_b: i64,
    ) -> Result<(Entrant, Entrant), LeagueError> {
        self.mutate(|league| logic::submit_result(league, match_id, goals_a, goals_b))
    }

    pub fn standings(&self) -> Result<Vec<Entrant>, LeagueError> {
        Ok(logic::standings(&self.read()?, &self.ranking))
    }

    pub fn reset_tournament(&self) -> Result<(), LeagueError> {
        self.mutate(|league| {
            logic::reset_tournament(league);
            Ok(())
        })
    }

    /// All matches ordered by turn, then round.
    pub fn matches(&self) -> Result<Vec<GameMatch>, LeagueError> {
        let mut matches = self.read()?.matches;
        matches.sort_by_key(GameMatch::schedule_key);
        Ok(matches)
    }

    /// Matches still awaiting a result, ordered by turn, then round.
    pub fn pending_matches(&self) -> Result<Vec<GameMatch>, LeagueError> {
        Ok(self.matches()?.into_iter().filter(|m| !m.is_settled()).collect())
    }

    /// Settled matches, ordered by turn, then round.
    pub fn match_history(&self) -> Result<Vec<GameMatch>, LeagueError> {
        Ok(self.matches()?.into_iter().filter(GameMatch::is_settled).collect())
    }
}
