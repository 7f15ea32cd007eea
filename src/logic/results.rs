//! Result submission: validate a scoreline, settle the match, refresh statistics.

use crate::logic::standings::recompute;
use crate::models::{Entrant, League, LeagueError, MatchId, MatchStatus};
use chrono::Utc;
use std::collections::HashSet;

/// Highest goal count accepted for one side of a match.
pub const MAX_GOALS: u32 = u16::MAX as u32;

/// Reject negative goal counts and values above `MAX_GOALS`.
pub fn validate_goals(goals: i64) -> Result<u32, LeagueError> {
    u32::try_from(goals)
        .ok()
        .filter(|&g| g <= MAX_GOALS)
        .ok_or(LeagueError::InvalidScore)
}

/// Record `goals_a`-`goals_b` for the match and return both entrants' refreshed records (A first).
///
/// A first submission refreshes only the two entrants involved. Editing an already settled
/// match recomputes the whole league from the settled scorelines, so the previous result is
/// replaced rather than added to.
pub fn submit_result(
    league: &mut League,
    match_id: MatchId,
    goals_a: i64,
    goals_b: i64,
) -> Result<(Entrant, Entrant), LeagueError> {
    let goals_a = validate_goals(goals_a)?;
    let goals_b = validate_goals(goals_b)?;

    let m = league.get_match_mut(match_id)?;
    let previous = m.is_settled().then_some((m.goals_a, m.goals_b));
    m.goals_a = goals_a;
    m.goals_b = goals_b;
    m.status = MatchStatus::Settled;
    m.settled_at = Some(Utc::now());
    let (a, b) = (m.entrant_a, m.entrant_b);

    match previous {
        None => {
            log::info!("Match {} settled {}-{}", match_id, goals_a, goals_b);
            recompute(league, Some(&HashSet::from([a, b])));
        }
        Some((old_a, old_b)) => {
            log::info!(
                "Match {} edited {}-{} -> {}-{}",
                match_id,
                old_a,
                old_b,
                goals_a,
                goals_b
            );
            recompute(league, None);
        }
    }

    Ok((league.entrant(a)?.clone(), league.entrant(b)?.clone()))
}
