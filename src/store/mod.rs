//! Persistence boundary: a revisioned league document behind a small trait.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{League, LeagueError};
use serde::{Deserialize, Serialize};

/// League document together with the revision it was read at.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub revision: u64,
    pub league: League,
}

/// Document-style repository holding the entrants and matches collections.
///
/// `commit` is a compare-and-swap on the revision: the whole document is replaced
/// only if nobody committed since `expected_revision` was read.
pub trait LeagueStore: Send + Sync {
    fn load(&self) -> Result<Snapshot, LeagueError>;

    /// Store `league` and return its new revision, or `Conflict` if the stored
    /// revision is no longer `expected_revision`.
    fn commit(&self, expected_revision: u64, league: &League) -> Result<u64, LeagueError>;
}
