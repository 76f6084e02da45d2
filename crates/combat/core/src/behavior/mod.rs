//! Behavior modules: composable special actions.
//!
//! Each module grants one special action (sometimes with a follow-up forced
//! action) and owns the status keys it writes. Modules are attached to a
//! [`Combatant`] at construction time and never reference each other; they
//! interact only through the attack pipeline's hooks and the generic
//! conditions in [`crate::status::conditions`].
//!
//! # Anatomy
//!
//! - `action()` / `handles()`: the action names this module resolves
//! - `tags()`: properties other systems key off
//! - `weight()`: selection weight, or `None` while ineligible
//! - `forced_action()`: an action this module mandates regardless of weights
//! - `perform()`: resolves one of its actions and returns message lines
//! - `modify_attack()` (hook A) / `on_hit_taken()` (hook B): pipeline hooks

mod basic;
mod berserk;
mod blind;
mod constrict;
mod defend;
mod element;
mod furious;
mod multi_attack;
mod poison;
mod riposte;
mod stun;

pub use basic::{BASIC_ATTACK, BasicAttack};
pub use berserk::{Berserk, BerserkOptions};
pub use blind::{Blind, BlindOptions};
pub use constrict::{Constrict, HoldKind, HoldOptions};
pub use defend::{Defend, DefendOptions};
pub use element::{Burn, Chill, ElementOptions};
pub use furious::{Furious, FuriousOptions};
pub use multi_attack::{MultiAttack, MultiAttackOptions};
pub use poison::{Poison, PoisonOptions};
pub use riposte::{Riposte, RiposteOptions};
pub use stun::{Stun, StunOptions};

use std::fmt;

use crate::combat::{ActionTags, AttackOutcome, AttackParams, HitResult, IncomingHit};
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::Result;
use crate::text::Template;

/// A self-contained special action.
pub trait Behavior: Send + Sync + fmt::Debug {
    /// The action selected through the weight table.
    fn action(&self) -> &'static str;

    /// Whether this module resolves `action` (its own action plus any
    /// follow-ups it forces).
    fn handles(&self, action: &str) -> bool {
        action == self.action()
    }

    fn tags(&self) -> ActionTags;

    /// Selection weight, or `None` while the action is ineligible.
    fn weight(&self, actor: &Combatant, opponent: &Combatant, terrain: TerrainFlags)
    -> Option<u32>;

    /// Action this module forces this turn, if any.
    fn forced_action(&self, _actor: &Combatant) -> Option<&'static str> {
        None
    }

    /// Resolves `action` and returns its message lines.
    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>>;

    /// Hook A: runs on every attack this module's owner makes.
    fn modify_attack(&self, _actor: &Combatant, _params: &mut AttackParams) {}

    /// Hook B: runs on every hit this module's owner takes.
    fn on_hit_taken(&self, _hit: &mut IncomingHit<'_>) {}
}

/// Whether terrain suppresses an action with these tags.
pub(crate) fn suppressed(tags: ActionTags, terrain: TerrainFlags) -> bool {
    tags.contains(ActionTags::SPELL) && terrain.contains(TerrainFlags::CANNOT_CAST)
}

/// Dodge and miss wording shared by attack modules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AvoidLines {
    /// Slots: defender, attacker.
    pub dodge: Template,
    /// Slots: attacker, defender.
    pub miss: Template,
}

impl AvoidLines {
    pub const fn standard() -> Self {
        Self {
            dodge: Template::new("%s dodges the attack from %s."),
            miss: Template::new("%s misses %s."),
        }
    }

    pub const fn new(dodge: &'static str, miss: &'static str) -> Self {
        Self {
            dodge: Template::new(dodge),
            miss: Template::new(miss),
        }
    }

    /// The line for a dodged or missed attack; `None` for a hit.
    pub fn line(&self, outcome: &AttackOutcome, actor: &Combatant, target: &Combatant) -> Option<String> {
        match outcome.result {
            HitResult::Dodged => Some(self.dodge.fill(&[&target.label, &actor.label])),
            HitResult::Missed => Some(self.miss.fill(&[&actor.label, &target.label])),
            HitResult::Hit => None,
        }
    }
}

impl Default for AvoidLines {
    fn default() -> Self {
        Self::standard()
    }
}

/// Appends the lines pipeline hooks produced after the attack's own line.
pub(crate) fn push_outcome_extras(lines: &mut Vec<String>, outcome: AttackOutcome) {
    lines.extend(outcome.extra_messages);
}
