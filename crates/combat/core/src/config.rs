/// Balance tables shared by every fight.
///
/// Per-module numbers (weights, durations, multipliers) live on the module
/// options; these are the knobs the attack pipeline and selector read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    /// Flat chance (percent) that an undodged attack still misses.
    pub miss_chance: u32,
    /// Upper bound on any dodge chance after conditions are applied.
    pub dodge_cap: u32,
    /// Damage multiplier (percent) applied on a critical hit.
    pub crit_multiplier: u32,
    /// Extra damage (percent) a burned defender takes from burn attacks.
    pub burned_bonus: u32,
    /// Weight budget shared between special actions and the basic attack.
    pub weight_budget: u32,
}

impl CombatTables {
    pub const DEFAULT_MISS_CHANCE: u32 = 5;
    pub const DEFAULT_DODGE_CAP: u32 = 75;
    pub const DEFAULT_CRIT_MULTIPLIER: u32 = 200;
    pub const DEFAULT_BURNED_BONUS: u32 = 50;
    pub const DEFAULT_WEIGHT_BUDGET: u32 = 100;

    pub const fn new() -> Self {
        Self {
            miss_chance: Self::DEFAULT_MISS_CHANCE,
            dodge_cap: Self::DEFAULT_DODGE_CAP,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            burned_bonus: Self::DEFAULT_BURNED_BONUS,
            weight_budget: Self::DEFAULT_WEIGHT_BUDGET,
        }
    }

    /// Default tables with the flat miss chance removed.
    pub const fn without_misses() -> Self {
        let mut tables = Self::new();
        tables.miss_chance = 0;
        tables
    }
}

impl Default for CombatTables {
    fn default() -> Self {
        Self::new()
    }
}
