//! Roster loader.

use std::collections::HashSet;
use std::path::Path;

use crate::definitions::{CombatantDefinition, Roster};
use crate::loaders::{LoadResult, read_file};

/// Loader for the combatant roster.
///
/// The format follows the file extension: `.toml` or `.ron`.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let roster = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::parse_toml(&content)?,
            Some("ron") => Self::parse_ron(&content)?,
            _ => anyhow::bail!(
                "Unsupported roster format for {} (expected .toml or .ron)",
                path.display()
            ),
        };

        tracing::debug!(
            target: "content::roster",
            path = %path.display(),
            players = roster.players.len(),
            opponents = roster.opponents.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    pub fn parse_toml(content: &str) -> LoadResult<Roster> {
        let roster: Roster = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;
        Self::validate(&roster)?;
        Ok(roster)
    }

    /// Optional numbers are written `Some(n)`, as everywhere in RON.
    pub fn parse_ron(content: &str) -> LoadResult<Roster> {
        // Behaviors are tagged by a `kind` field, which the RON text
        // deserializer cannot buffer. Its value tree can.
        let value: ron::Value = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        let roster: Roster = value
            .into_rust()
            .map_err(|e| anyhow::anyhow!("Invalid roster RON: {}", e))?;
        Self::validate(&roster)?;
        Ok(roster)
    }

    fn validate(roster: &Roster) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for def in roster.players.iter().chain(&roster.opponents) {
            anyhow::ensure!(seen.insert(def.id.as_str()), "Duplicate combatant id '{}'", def.id);
            Self::validate_definition(def)?;
        }
        Ok(())
    }

    fn validate_definition(def: &CombatantDefinition) -> LoadResult<()> {
        anyhow::ensure!(def.hp > 0, "Combatant '{}' has no hit points", def.id);
        anyhow::ensure!(
            def.stats.crit <= 100 && def.stats.dodge <= 100,
            "Combatant '{}' has crit/dodge outside 0-100",
            def.id
        );
        Ok(())
    }
}
