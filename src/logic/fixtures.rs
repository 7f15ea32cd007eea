//! Fixture generation (double round-robin, circle method) and schedule commit.

use crate::models::{
    Entrant, EntrantId, EntrantRef, GameMatch, League, LeagueError, Pairing, Round, Turn,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Generate a full double round-robin schedule for `entrants`, in the given order.
///
/// 1. Odd rosters get one bye slot appended.
/// 2. Slot 0 stays fixed; round r pairs slot j with slot n-1-j.
/// 3. After each round the last slot moves to position 1.
/// 4. Turn 2 repeats turn 1 with sides swapped.
///
/// Pairings against the bye are dropped; the real entrant is reported as the round's `bye`.
/// Fewer than two entrants yield no rounds.
pub fn generate_fixtures(entrants: &[Entrant]) -> Vec<Round> {
    if entrants.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<EntrantRef>> = entrants.iter().map(|e| Some(e.to_ref())).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut first_turn = Vec::with_capacity(n - 1);
    for index in 0..n - 1 {
        let mut pairs = Vec::with_capacity(n / 2);
        let mut bye = None;
        for j in 0..n / 2 {
            match (&slots[j], &slots[n - 1 - j]) {
                (Some(a), Some(b)) => pairs.push(Pairing {
                    entrant_a: a.clone(),
                    entrant_b: b.clone(),
                }),
                (Some(e), None) | (None, Some(e)) => bye = Some(e.clone()),
                // Only one bye slot exists.
                (None, None) => {}
            }
        }
        first_turn.push(Round {
            turn: Turn::First,
            index,
            pairs,
            bye,
        });
        slots[1..].rotate_right(1);
    }

    let second_turn: Vec<Round> = first_turn
        .iter()
        .map(|r| Round {
            turn: Turn::Second,
            index: r.index,
            pairs: r.pairs.iter().map(Pairing::mirrored).collect(),
            bye: r.bye.clone(),
        })
        .collect();

    first_turn.into_iter().chain(second_turn).collect()
}

/// Generate a schedule from a freshly shuffled copy of the roster. Never touches the league.
pub fn shuffled_fixtures<R: Rng + ?Sized>(entrants: &[Entrant], rng: &mut R) -> Vec<Round> {
    let mut shuffled = entrants.to_vec();
    shuffled.shuffle(rng);
    generate_fixtures(&shuffled)
}

/// Flatten rounds into pending matches.
pub fn rounds_to_matches(rounds: &[Round]) -> Vec<GameMatch> {
    rounds
        .iter()
        .flat_map(|r| {
            r.pairs
                .iter()
                .map(move |p| GameMatch::new(&p.entrant_a, &p.entrant_b, r.index, r.turn))
        })
        .collect()
}

/// Check that `rounds` is a double round-robin of exactly the registered roster:
/// no self-pairings, nobody twice in one round, every ordered pair once.
fn validate_schedule(league: &League, rounds: &[Round]) -> Result<(), LeagueError> {
    let mut ordered: HashSet<(EntrantId, EntrantId)> = HashSet::new();
    let mut busy: HashMap<(Turn, usize), HashSet<EntrantId>> = HashMap::new();

    for r in rounds {
        let in_round = busy.entry((r.turn, r.index)).or_default();
        for p in &r.pairs {
            let (a, b) = (p.entrant_a.id, p.entrant_b.id);
            league.entrant(a)?;
            league.entrant(b)?;
            if a == b {
                return Err(LeagueError::InvalidSchedule(format!(
                    "{} is paired with itself",
                    p.entrant_a.name
                )));
            }
            if !in_round.insert(a) || !in_round.insert(b) {
                return Err(LeagueError::InvalidSchedule(format!(
                    "an entrant plays twice in round {} of turn {}",
                    r.index,
                    r.turn.number()
                )));
            }
            if !ordered.insert((a, b)) {
                return Err(LeagueError::InvalidSchedule(format!(
                    "{} hosts {} more than once",
                    p.entrant_a.name, p.entrant_b.name
                )));
            }
        }
    }

    let n = league.entrants.len();
    let expected = n * n.saturating_sub(1);
    if ordered.len() != expected {
        return Err(LeagueError::InvalidSchedule(format!(
            "{} of {} meetings scheduled",
            ordered.len(),
            expected
        )));
    }
    Ok(())
}

/// Store the schedule in the league. Returns the number of matches created.
///
/// Rejected with `AlreadyScheduled` while any match exists. The rounds must reference only
/// registered entrants and form a complete double round-robin of the roster; names are taken
/// from the current roster.
pub fn commit_fixtures(league: &mut League, rounds: &[Round]) -> Result<usize, LeagueError> {
    if league.is_scheduled() {
        return Err(LeagueError::AlreadyScheduled);
    }
    let mut matches = rounds_to_matches(rounds);
    if matches.is_empty() {
        return Err(LeagueError::EmptySchedule);
    }
    validate_schedule(league, rounds)?;
    for m in &mut matches {
        m.entrant_a_name = league.entrant(m.entrant_a)?.name.clone();
        m.entrant_b_name = league.entrant(m.entrant_b)?.name.clone();
    }
    let count = matches.len();
    league.matches = matches;
    log::info!(
        "Committed {} matches over {} rounds for {} entrants",
        count,
        rounds.len(),
        league.entrants.len()
    );
    Ok(count)
}
