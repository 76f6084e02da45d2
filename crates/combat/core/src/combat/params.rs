//! Attack parameters and action property tags.

use bitflags::bitflags;

use crate::combatant::CombatStats;

bitflags! {
    /// Properties of an action that other systems key off (what can block,
    /// resist or amplify it).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ActionTags: u16 {
        /// Deals weapon damage through the attack pipeline.
        const ATTACK = 1 << 0;
        const MELEE  = 1 << 1;
        const RANGED = 1 << 2;
        /// Spell-like; suppressed where casting is impossible.
        const SPELL  = 1 << 3;
        const BURN   = 1 << 4;
        const CHILL  = 1 << 5;
        const POISON = 1 << 6;
        /// Committed, heavy blow (a ripostes only turns half of it).
        const HEAVY  = 1 << 7;
        /// Self-targeted preparation or stance; no attack roll.
        const STANCE = 1 << 8;
    }
}

/// Inputs to one attack resolution.
///
/// `multiplier_pct` is the combined multiplier in percent (100 = ×1).
/// Attacker hooks may rewrite it before damage is finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackParams {
    pub min_damage: u32,
    pub max_damage: u32,
    pub multiplier_pct: u32,
    pub can_crit: bool,
    /// Skips the dodge and miss rolls (e.g. squeezing a held victim).
    pub unavoidable: bool,
    pub tags: ActionTags,
}

impl AttackParams {
    /// Ordinary weapon attack: damage rolls between force and
    /// force + technique.
    pub fn from_stats(stats: &CombatStats) -> Self {
        Self {
            min_damage: stats.force,
            max_damage: stats.force.saturating_add(stats.technique),
            multiplier_pct: 100,
            can_crit: true,
            unavoidable: false,
            tags: ActionTags::ATTACK,
        }
    }

    pub fn with_multiplier(mut self, multiplier_pct: u32) -> Self {
        self.multiplier_pct = multiplier_pct;
        self
    }

    pub fn tagged(mut self, tags: ActionTags) -> Self {
        self.tags |= tags;
        self
    }

    pub fn without_crit(mut self) -> Self {
        self.can_crit = false;
        self
    }

    pub fn unavoidable(mut self) -> Self {
        self.unavoidable = true;
        self
    }
}
