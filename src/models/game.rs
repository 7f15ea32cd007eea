//! Match (game), Turn, MatchStatus and the derived Outcome.

use crate::models::entrant::{EntrantId, EntrantRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which pass of the double round-robin a match belongs to.
///
/// Serialised as `1` / `2`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Turn {
    #[default]
    First,
    Second,
}

impl Turn {
    pub fn number(self) -> u8 {
        match self {
            Turn::First => 1,
            Turn::Second => 2,
        }
    }
}

impl From<Turn> for u8 {
    fn from(turn: Turn) -> u8 {
        turn.number()
    }
}

impl TryFrom<u8> for Turn {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Turn::First),
            2 => Ok(Turn::Second),
            other => Err(format!("turn must be 1 or 2, got {}", other)),
        }
    }
}

/// Whether a scoreline has been submitted for the match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Settled,
}

/// Result of a settled match, derived from its scoreline (never stored).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "winner")]
pub enum Outcome {
    Win(EntrantId),
    Draw,
}

/// A single scheduled match between two entrants. Entrant A is the host.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub entrant_a: EntrantId,
    pub entrant_b: EntrantId,
    /// Display copies of the entrant names at scheduling time.
    pub entrant_a_name: String,
    pub entrant_b_name: String,
    /// 0-based round index within its turn.
    pub round: usize,
    pub turn: Turn,
    pub goals_a: u32,
    pub goals_b: u32,
    pub status: MatchStatus,
    /// Time of the latest result submission; None while pending.
    pub settled_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(a: &EntrantRef, b: &EntrantRef, round: usize, turn: Turn) -> Self {
        Self {
            id: Uuid::new_v4(),
            entrant_a: a.id,
            entrant_b: b.id,
            entrant_a_name: a.name.clone(),
            entrant_b_name: b.name.clone(),
            round,
            turn,
            goals_a: 0,
            goals_b: 0,
            status: MatchStatus::Pending,
            settled_at: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.status == MatchStatus::Settled
    }

    pub fn involves(&self, id: EntrantId) -> bool {
        self.entrant_a == id || self.entrant_b == id
    }

    /// `(scored, conceded)` from the given entrant's side, if it plays in this match.
    pub fn score_for(&self, id: EntrantId) -> Option<(u32, u32)> {
        if id == self.entrant_a {
            Some((self.goals_a, self.goals_b))
        } else if id == self.entrant_b {
            Some((self.goals_b, self.goals_a))
        } else {
            None
        }
    }

    /// None while pending.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_settled() {
            return None;
        }
        Some(match self.goals_a.cmp(&self.goals_b) {
            std::cmp::Ordering::Greater => Outcome::Win(self.entrant_a),
            std::cmp::Ordering::Less => Outcome::Win(self.entrant_b),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Sort key for display: turn, then round.
    pub fn schedule_key(&self) -> (Turn, usize) {
        (self.turn, self.round)
    }
}
