//! Data-driven combatant definitions and loaders.
//!
//! This crate turns content files into ready-to-fight [`combat_core::Combatant`]s:
//! - Opponent and player definitions (roster, TOML or RON)
//! - Balance tables (TOML)
//!
//! Definitions list their behavior modules in attachment order, each carrying
//! the module's options, so any opponent can be composed without code.

pub mod definitions;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use definitions::{BehaviorSpec, CombatantDefinition, Roster};

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, RosterLoader, TablesLoader};
