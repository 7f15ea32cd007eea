//! League document and LeagueError.

use crate::models::entrant::{Entrant, EntrantId};
use crate::models::game::{GameMatch, MatchId};
use serde::{Deserialize, Serialize};

/// What a `NotFound` error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Missing {
    Match(MatchId),
    Entrant(EntrantId),
}

/// Errors that can occur during league operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Goal count negative or out of range. Rejected before any write.
    InvalidScore,
    /// Unknown match or entrant id.
    NotFound(Missing),
    /// Fixtures already exist; a reset is required before committing new ones.
    AlreadyScheduled,
    /// The league changed underneath a read-modify-commit. Safe to retry.
    Conflict,
    /// The underlying store failed.
    StoreUnavailable(String),
    /// Entrant name empty after trimming.
    EmptyName,
    /// An entrant with this name already exists (names are unique, case-insensitive).
    DuplicateEntrantName,
    /// The roster cannot change while fixtures exist.
    RosterLocked,
    /// Commit attempted with no pairings.
    EmptySchedule,
    /// Rounds are not a complete double round-robin of the roster.
    InvalidSchedule(String),
}

impl LeagueError {
    /// Stable machine-readable kind for callers.
    pub fn kind(&self) -> &'static str {
        match self {
            LeagueError::InvalidScore => "invalid_score",
            LeagueError::NotFound(_) => "not_found",
            LeagueError::AlreadyScheduled => "already_scheduled",
            LeagueError::Conflict => "conflict",
            LeagueError::StoreUnavailable(_) => "store_unavailable",
            LeagueError::EmptyName => "empty_name",
            LeagueError::DuplicateEntrantName => "duplicate_entrant_name",
            LeagueError::RosterLocked => "roster_locked",
            LeagueError::EmptySchedule => "empty_schedule",
            LeagueError::InvalidSchedule(_) => "invalid_schedule",
        }
    }
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::InvalidScore => write!(f, "Goals must be non-negative whole numbers"),
            LeagueError::NotFound(Missing::Match(id)) => write!(f, "Match {} not found", id),
            LeagueError::NotFound(Missing::Entrant(id)) => write!(f, "Entrant {} not found", id),
            LeagueError::AlreadyScheduled => {
                write!(f, "Fixtures already exist; reset the tournament first")
            }
            LeagueError::Conflict => write!(f, "Concurrent update detected, try again"),
            LeagueError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
            LeagueError::EmptyName => write!(f, "Entrant name is required"),
            LeagueError::DuplicateEntrantName => write!(f, "An entrant with this name already exists"),
            LeagueError::RosterLocked => {
                write!(f, "The roster cannot change while fixtures exist")
            }
            LeagueError::EmptySchedule => write!(f, "Schedule contains no matches"),
            LeagueError::InvalidSchedule(reason) => write!(f, "Invalid schedule: {}", reason),
        }
    }
}

impl std::error::Error for LeagueError {}

/// Full league state: the roster and every scheduled match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Registered entrants, in registration order.
    pub entrants: Vec<Entrant>,
    pub matches: Vec<GameMatch>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn entrant(&self, id: EntrantId) -> Result<&Entrant, LeagueError> {
        self.entrants
            .iter()
            .find(|e| e.id == id)
            .ok_or(LeagueError::NotFound(Missing::Entrant(id)))
    }

    pub fn get_match(&self, id: MatchId) -> Result<&GameMatch, LeagueError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or(LeagueError::NotFound(Missing::Match(id)))
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Result<&mut GameMatch, LeagueError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(LeagueError::NotFound(Missing::Match(id)))
    }
}
