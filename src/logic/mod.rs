//! League business logic: roster setup, fixtures, results, standings.

mod fixtures;
mod results;
mod setup;
mod standings;

pub use fixtures::{commit_fixtures, generate_fixtures, rounds_to_matches, shuffled_fixtures};
pub use results::{submit_result, validate_goals, MAX_GOALS};
pub use setup::{register_entrant, remove_entrant, reset_tournament};
pub use standings::{compute_stats, recompute, standings, RankCriterion, Ranking};
