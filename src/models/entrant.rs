//! Entrant and EntrantStats data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entrant (used in matches and lookups).
pub type EntrantId = Uuid;

/// Aggregate record of an entrant, derived from its settled matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntrantStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl EntrantStats {
    /// Fold one settled scoreline (from this entrant's side) into the record.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        if scored > conceded {
            self.wins += 1;
        } else if scored < conceded {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
        self.goal_difference += i64::from(scored) - i64::from(conceded);
        self.points = 3 * self.wins + self.draws;
    }

    /// Number of settled matches this record was folded from.
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// A registered entrant of the league.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
    pub stats: EntrantStats,
}

impl Entrant {
    /// Create a new entrant with the given name and zeroed statistics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            registered_at: Utc::now(),
            stats: EntrantStats::default(),
        }
    }

    /// Lightweight id + name view used by fixtures.
    pub fn to_ref(&self) -> EntrantRef {
        EntrantRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Id and display name of an entrant, as carried by pairings.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct EntrantRef {
    pub id: EntrantId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_derives_points_and_goal_difference() {
        let mut s = EntrantStats::default();
        s.record(3, 1);
        s.record(0, 2);
        s.record(2, 2);
        assert_eq!((s.wins, s.losses, s.draws), (1, 1, 1));
        assert_eq!((s.goals_for, s.goals_against), (5, 5));
        assert_eq!(s.goal_difference, 0);
        assert_eq!(s.points, 4);
        assert_eq!(s.played(), 3);
    }
}
