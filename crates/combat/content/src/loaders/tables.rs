//! Balance tables loader.

use std::path::Path;

use combat_core::CombatTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatTables`] from TOML files.
///
/// Missing keys keep their shipped defaults.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<CombatTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatTables> {
        let tables: CombatTables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        anyhow::ensure!(
            tables.dodge_cap <= 100 && tables.miss_chance <= 100,
            "dodge_cap and miss_chance are percentages (got {} and {})",
            tables.dodge_cap,
            tables.miss_chance
        );
        Ok(tables)
    }
}
