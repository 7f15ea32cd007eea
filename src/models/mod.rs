//! Data structures for the league: entrants, matches, rounds, league document.

mod entrant;
mod game;
mod league;
mod round;

pub use entrant::{Entrant, EntrantId, EntrantRef, EntrantStats};
pub use game::{GameMatch, MatchId, MatchStatus, Outcome, Turn};
pub use league::{League, LeagueError, Missing};
pub use round::{Pairing, Round};
