//! Collaborator ports and read-only context for one fight.
//!
//! Round resolution consumes exactly three things from the outside world:
//! balance tables, a grammar helper and a randomness source. Location-driven
//! restrictions (e.g. "cannot dodge here") arrive as [`TerrainFlags`] instead
//! of ambient state so the pipeline stays a function of its inputs.

mod grammar;
mod rng;

pub use grammar::{EnglishGrammar, Grammar};
pub use rng::{CombatRng, PcgRng, ScriptedRng};

use bitflags::bitflags;

use crate::config::CombatTables;

bitflags! {
    /// Restrictions imposed by where the fight takes place.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TerrainFlags: u8 {
        /// Nobody can dodge (narrow ledge, deep mud).
        const CANNOT_DODGE = 1 << 0;
        /// Spell-like actions (burn, chill) are suppressed.
        const CANNOT_CAST  = 1 << 1;
    }
}

/// Everything a round needs besides the two combatants.
///
/// Tables, grammar and terrain are read-only; the RNG is the only mutable
/// collaborator and is threaded through every roll.
pub struct CombatEnv<'a> {
    pub tables: &'a CombatTables,
    pub grammar: &'a dyn Grammar,
    pub terrain: TerrainFlags,
    pub rng: &'a mut dyn CombatRng,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        tables: &'a CombatTables,
        grammar: &'a dyn Grammar,
        rng: &'a mut dyn CombatRng,
    ) -> Self {
        Self {
            tables,
            grammar,
            terrain: TerrainFlags::empty(),
            rng,
        }
    }

    pub fn with_terrain(mut self, terrain: TerrainFlags) -> Self {
        self.terrain = terrain;
        self
    }

    /// Shorthand for `grammar.pluralize`.
    pub fn plural(&self, word: &str, count: u32) -> String {
        self.grammar.pluralize(word, count)
    }
}
