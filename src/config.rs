//! Runtime configuration from environment variables.
//!
//! `HOST`, `PORT`, `LEAGUE_DATA_FILE` (unset: in-memory league), `LEAGUE_COMMIT_RETRIES`,
//! `LEAGUE_RANKING` (comma-separated criteria). Log level comes from `RUST_LOG`.
//! A `LEAGUE_DATA_FILE` must not be shared between server processes.

use crate::logic::Ranking;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: Option<PathBuf>,
    /// Extra attempts after a `Conflict` before giving up.
    pub max_commit_retries: u32,
    pub ranking: Ranking,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_commit_retries() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: None,
            max_commit_retries: default_commit_retries(),
            ranking: Ranking::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let data_file = lookup("LEAGUE_DATA_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let max_commit_retries = lookup("LEAGUE_COMMIT_RETRIES")
            .and_then(|r| r.parse().ok())
            .unwrap_or_else(default_commit_retries);
        let ranking = match lookup("LEAGUE_RANKING") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring LEAGUE_RANKING ({}), using points,goal_difference", e);
                Ranking::default()
            }),
            None => Ranking::default(),
        };
        Self {
            host,
            port,
            data_file,
            max_commit_retries,
            ranking,
        }
    }
}
