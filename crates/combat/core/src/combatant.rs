//! Fight participants.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::behavior::Behavior;
use crate::status::StatusStore;

/// Which side of the fight a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

/// Display name plus grammatical number, for templated text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub name: String,
    /// "The wolves are…" rather than "The wolf is…".
    #[cfg_attr(feature = "serde", serde(default))]
    pub plural: bool,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plural: false,
        }
    }

    pub fn plural(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plural: true,
        }
    }

    /// "is" or "are".
    pub fn verb(&self) -> &'static str {
        if self.plural { "are" } else { "is" }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Current/maximum hit points. Current never drops below 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub const fn new(current: u32, max: u32) -> Self {
        let current = if current > max { max } else { current };
        Self { current, max }
    }

    /// Applies damage, clamped at 0. Returns the HP actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current - before
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Offensive and defensive numbers read by the attack pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatStats {
    /// Minimum rolled damage.
    pub force: u32,
    /// Spread added on top of force for the maximum roll.
    pub technique: u32,
    /// Flat reduction applied to every incoming roll.
    pub defence: u32,
    /// Critical hit chance, percent.
    pub crit: u32,
    /// Dodge chance, percent.
    pub dodge: u32,
}

impl CombatStats {
    pub const fn new(force: u32, technique: u32, defence: u32, crit: u32, dodge: u32) -> Self {
        Self {
            force,
            technique,
            defence,
            crit,
            dodge,
        }
    }
}

bitflags! {
    /// Afflictions a combatant shrugs off entirely.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Immunities: u8 {
        const BURN   = 1 << 0;
        const CHILL  = 1 << 1;
        const POISON = 1 << 2;
        const STUN   = 1 << 3;
        const BLIND  = 1 << 4;
    }
}

/// One side of a fight.
///
/// Special actions come from attached [`Behavior`] modules, held in
/// attachment order. That order is significant: it is the tie-break for
/// forced actions, the walk order of the weight table and the order in which
/// attack hooks run.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub label: Label,
    pub side: Side,
    pub hp: Health,
    pub stats: CombatStats,
    pub immunities: Immunities,
    pub status: StatusStore,
    pub(crate) behaviors: Vec<Arc<dyn Behavior>>,
}

impl Combatant {
    pub fn new(side: Side, label: Label, max_hp: u32, stats: CombatStats) -> Self {
        Self {
            label,
            side,
            hp: Health::full(max_hp),
            stats,
            immunities: Immunities::empty(),
            status: StatusStore::new(),
            behaviors: Vec::new(),
        }
    }

    pub fn player(name: impl Into<String>, max_hp: u32, stats: CombatStats) -> Self {
        Self::new(Side::Player, Label::new(name), max_hp, stats)
    }

    pub fn opponent(label: Label, max_hp: u32, stats: CombatStats) -> Self {
        Self::new(Side::Opponent, label, max_hp, stats)
    }

    pub fn with_immunities(mut self, immunities: Immunities) -> Self {
        self.immunities = immunities;
        self
    }

    pub fn with_hp(mut self, hp: Health) -> Self {
        self.hp = hp;
        self
    }

    /// Builder form of [`Combatant::attach`].
    pub fn with(mut self, behavior: impl Behavior + 'static) -> Self {
        self.attach(behavior);
        self
    }

    /// Appends a module to the attachment list.
    pub fn attach(&mut self, behavior: impl Behavior + 'static) -> &mut Self {
        self.behaviors.push(Arc::new(behavior));
        self
    }

    pub fn attach_shared(&mut self, behavior: Arc<dyn Behavior>) -> &mut Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn behaviors(&self) -> &[Arc<dyn Behavior>] {
        &self.behaviors
    }

    /// The module that handles `action`, if any.
    pub fn behavior_for(&self, action: &str) -> Option<Arc<dyn Behavior>> {
        self.behaviors
            .iter()
            .find(|b| b.handles(action))
            .map(Arc::clone)
    }

    pub fn name(&self) -> &str {
        &self.label.name
    }

    pub fn verb(&self) -> &'static str {
        self.label.verb()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_depleted()
    }
}
