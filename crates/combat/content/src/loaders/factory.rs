//! Content factory for building fighters from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{CombatTables, Combatant, Side};

use crate::definitions::Roster;
use crate::loaders::{LoadResult, RosterLoader, TablesLoader};

/// Loads combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tables.toml   (optional, defaults otherwise)
/// └── roster.toml   (or roster.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance tables from `tables.toml`, or the shipped defaults when
    /// the file is absent.
    pub fn load_tables(&self) -> LoadResult<CombatTables> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            tracing::debug!(target: "content::factory", "no tables.toml, using defaults");
            return Ok(CombatTables::default());
        }
        TablesLoader::load(&path)
    }

    /// Load the roster from `roster.toml`, falling back to `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let toml = self.data_dir.join("roster.toml");
        if toml.exists() {
            return RosterLoader::load(&toml);
        }
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Build a fresh opponent by id.
    pub fn build_opponent(roster: &Roster, id: &str) -> LoadResult<Combatant> {
        roster
            .opponent(id)
            .map(|def| def.build(Side::Opponent))
            .ok_or_else(|| anyhow::anyhow!("Unknown opponent '{}'", id))
    }

    /// Build a fresh player by id.
    pub fn build_player(roster: &Roster, id: &str) -> LoadResult<Combatant> {
        roster
            .player(id)
            .map(|def| def.build(Side::Player))
            .ok_or_else(|| anyhow::anyhow!("Unknown player '{}'", id))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
