//! Standings: recompute entrant statistics from settled matches, and rank them.

use crate::models::{Entrant, EntrantId, EntrantStats, GameMatch, League};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

/// Fold every settled match involving `id` into a fresh record.
pub fn compute_stats(id: EntrantId, matches: &[GameMatch]) -> EntrantStats {
    matches
        .iter()
        .filter(|m| m.is_settled())
        .filter_map(|m| m.score_for(id))
        .fold(EntrantStats::default(), |mut stats, (scored, conceded)| {
            stats.record(scored, conceded);
            stats
        })
}

/// Rebuild statistics from scratch for the entrants in `scope` (all entrants when `None`).
pub fn recompute(league: &mut League, scope: Option<&HashSet<EntrantId>>) {
    let League { entrants, matches } = league;
    let mut refreshed = 0;
    for e in entrants
        .iter_mut()
        .filter(|e| scope.map_or(true, |s| s.contains(&e.id)))
    {
        e.stats = compute_stats(e.id, &matches[..]);
        refreshed += 1;
    }
    log::debug!("Recomputed statistics for {} entrant(s)", refreshed);
}

/// A single ranking criterion. Each orders "better" entrants first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankCriterion {
    Points,
    GoalDifference,
    GoalsFor,
    /// Fewer conceded ranks higher.
    GoalsAgainst,
    Wins,
    /// Alphabetical, case-insensitive.
    Name,
}

impl RankCriterion {
    pub fn compare(self, a: &Entrant, b: &Entrant) -> Ordering {
        let (sa, sb) = (&a.stats, &b.stats);
        match self {
            RankCriterion::Points => sb.points.cmp(&sa.points),
            RankCriterion::GoalDifference => sb.goal_difference.cmp(&sa.goal_difference),
            RankCriterion::GoalsFor => sb.goals_for.cmp(&sa.goals_for),
            RankCriterion::GoalsAgainst => sa.goals_against.cmp(&sb.goals_against),
            RankCriterion::Wins => sb.wins.cmp(&sa.wins),
            RankCriterion::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

impl FromStr for RankCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "points" => Ok(RankCriterion::Points),
            "goal_difference" => Ok(RankCriterion::GoalDifference),
            "goals_for" => Ok(RankCriterion::GoalsFor),
            "goals_against" => Ok(RankCriterion::GoalsAgainst),
            "wins" => Ok(RankCriterion::Wins),
            "name" => Ok(RankCriterion::Name),
            other => Err(format!("unknown rank criterion: {}", other)),
        }
    }
}

/// Ordered list of criteria; the first one that differs decides.
/// Entrants equal on every criterion keep registration order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub criteria: Vec<RankCriterion>,
}

impl Default for Ranking {
    /// Points, then goal difference.
    fn default() -> Self {
        Self {
            criteria: vec![RankCriterion::Points, RankCriterion::GoalDifference],
        }
    }
}

impl Ranking {
    pub fn new(criteria: Vec<RankCriterion>) -> Self {
        Self { criteria }
    }

    pub fn compare(&self, a: &Entrant, b: &Entrant) -> Ordering {
        self.criteria
            .iter()
            .map(|c| c.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort, best first.
    pub fn sort(&self, entrants: &mut [Entrant]) {
        entrants.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for Ranking {
    type Err = String;

    /// Comma-separated criteria, e.g. `points,goal_difference,goals_for`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let criteria = s
            .split(',')
            .filter(|c| !c.trim().is_empty())
            .map(RankCriterion::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if criteria.is_empty() {
            return Err("ranking needs at least one criterion".to_string());
        }
        Ok(Self { criteria })
    }
}

/// Ranked table of the league's entrants.
pub fn standings(league: &League, ranking: &Ranking) -> Vec<Entrant> {
    let mut table = league.entrants.clone();
    ranking.sort(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_parses_criteria_list() {
        let r: Ranking = "points, goal_difference,goals_for".parse().unwrap();
        assert_eq!(
            r.criteria,
            vec![
                RankCriterion::Points,
                RankCriterion::GoalDifference,
                RankCriterion::GoalsFor
            ]
        );
        assert!("points,head_to_head".parse::<Ranking>().is_err());
        assert!("".parse::<Ranking>().is_err());
    }
}
