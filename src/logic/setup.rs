//! Roster management and tournament reset.

use crate::models::{Entrant, EntrantId, EntrantStats, League, LeagueError, Missing};

/// Register a new entrant. Names are trimmed and unique (case-insensitive).
/// Refused while fixtures exist.
pub fn register_entrant(league: &mut League, name: &str) -> Result<Entrant, LeagueError> {
    if league.is_scheduled() {
        return Err(LeagueError::RosterLocked);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(LeagueError::EmptyName);
    }
    if league
        .entrants
        .iter()
        .any(|e| e.name.to_lowercase() == name.to_lowercase())
    {
        return Err(LeagueError::DuplicateEntrantName);
    }
    let entrant = Entrant::new(name);
    league.entrants.push(entrant.clone());
    log::info!("Registered entrant {} ({})", entrant.name, entrant.id);
    Ok(entrant)
}

/// Remove an entrant by id. Refused while fixtures exist.
pub fn remove_entrant(league: &mut League, id: EntrantId) -> Result<Entrant, LeagueError> {
    if league.is_scheduled() {
        return Err(LeagueError::RosterLocked);
    }
    let idx = league
        .entrants
        .iter()
        .position(|e| e.id == id)
        .ok_or(LeagueError::NotFound(Missing::Entrant(id)))?;
    let removed = league.entrants.remove(idx);
    log::info!("Removed entrant {} ({})", removed.name, removed.id);
    Ok(removed)
}

/// Delete every match and zero every entrant's statistics. The roster is kept.
pub fn reset_tournament(league: &mut League) {
    let cleared = league.matches.len();
    league.matches.clear();
    for e in &mut league.entrants {
        e.stats = EntrantStats::default();
    }
    log::info!(
        "Tournament reset: {} matches cleared, {} entrants zeroed",
        cleared,
        league.entrants.len()
    );
}
