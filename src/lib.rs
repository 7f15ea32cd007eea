//! Round-robin league organizer: library with models, business logic and storage.

pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::Config;
pub use logic::{
    commit_fixtures, compute_stats, generate_fixtures, recompute, register_entrant, remove_entrant,
    reset_tournament, rounds_to_matches, shuffled_fixtures, standings, submit_result,
    validate_goals, RankCriterion, Ranking, MAX_GOALS,
};
pub use models::{
    Entrant, EntrantId, EntrantRef, EntrantStats, GameMatch, League, LeagueError, MatchId,
    MatchStatus, Missing, Outcome, Pairing, Round, Turn,
};
pub use service::LeagueService;
pub use store::{JsonFileStore, LeagueStore, MemoryStore, Snapshot};
