//! Round and Pairing: the in-memory candidate schedule produced by fixture generation.

use crate::models::entrant::EntrantRef;
use crate::models::game::Turn;
use serde::{Deserialize, Serialize};

/// One ordered meeting: `entrant_a` hosts `entrant_b`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub entrant_a: EntrantRef,
    pub entrant_b: EntrantRef,
}

impl Pairing {
    /// Same meeting with sides swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            entrant_a: self.entrant_b.clone(),
            entrant_b: self.entrant_a.clone(),
        }
    }
}

/// One round of a turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub turn: Turn,
    /// 0-based index within the turn.
    pub index: usize,
    pub pairs: Vec<Pairing>,
    /// Entrant sitting out this round (odd rosters only).
    #[serde(default)]
    pub bye: Option<EntrantRef>,
}
