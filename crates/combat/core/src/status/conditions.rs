//! Conditions - how active statuses bend the attack pipeline.
//!
//! Modules only write keys; the effects of those keys on other actions are
//! concentrated here so that no module needs to know about another:
//!
//! - `stunned`: the combatant loses its turn
//! - `blind`: the combatant's attacks always miss
//! - `chilled`: the combatant's dodge chance is halved
//! - `tired`: the combatant cannot dodge at all
//! - `burned`: burn-tagged attacks against the combatant hit harder

use crate::combat::ActionTags;
use crate::config::CombatTables;
use crate::env::TerrainFlags;

use super::{StatusKey, StatusStore};

pub fn is_stunned(status: &StatusStore) -> bool {
    status.has(StatusKey::Stunned)
}

pub fn is_blind(status: &StatusStore) -> bool {
    status.has(StatusKey::Blind)
}

/// Effective dodge chance (percent) for a defender.
pub fn dodge_chance(
    base_dodge: u32,
    defender: &StatusStore,
    terrain: TerrainFlags,
    tables: &CombatTables,
) -> u32 {
    if terrain.contains(TerrainFlags::CANNOT_DODGE) || defender.has(StatusKey::Tired) {
        return 0;
    }
    let mut chance = base_dodge;
    if defender.has(StatusKey::Chilled) {
        chance /= 2;
    }
    chance.min(tables.dodge_cap)
}

/// Extra damage multiplier (percent) from the defender's conditions, or
/// `None` when nothing applies.
pub fn incoming_bonus(tags: ActionTags, defender: &StatusStore, tables: &CombatTables) -> Option<u32> {
    if tags.contains(ActionTags::BURN) && defender.has(StatusKey::Burned) {
        return Some(100 + tables.burned_bonus);
    }
    None
}
