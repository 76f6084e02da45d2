//! Poisoned bite. Damage over time ticks during maintenance, independent of
//! later attacks.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::{Combatant, Immunities};
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::{StatusKey, duration_value};
use crate::text::{Template, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoisonOptions {
    pub weight: u32,
    /// Number of maintenance ticks.
    pub duration: u32,
    /// Damage per tick.
    pub magnitude: u32,
    pub cooldown: u32,
    /// Slots: attacker, defender, damage, defender.
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl Default for PoisonOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            duration: 3,
            magnitude: 5,
            cooldown: 4,
            hit: Template::new("%s bites %s for %s! Venom seeps into %s."),
            avoid: AvoidLines::standard(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Poison {
    options: PoisonOptions,
}

impl Poison {
    pub const ACTION: &'static str = "poison";

    pub fn new(weight: u32) -> Self {
        Self::with_options(PoisonOptions {
            weight,
            ..PoisonOptions::default()
        })
    }

    pub fn with_options(options: PoisonOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Poison {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        ActionTags::ATTACK | ActionTags::MELEE | ActionTags::POISON
    }

    fn weight(&self, actor: &Combatant, opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        if actor.status.has(StatusKey::PoisonCooldown)
            || opponent.immunities.contains(Immunities::POISON)
        {
            return None;
        }
        Some(self.options.weight)
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        if action != Self::ACTION {
            return Err(CombatError::UnknownAction {
                action: action.to_string(),
                combatant: actor.label.name.clone(),
            });
        }

        let params = AttackParams::from_stats(&actor.stats)
            .without_crit()
            .tagged(self.tags());
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;
        actor
            .status
            .set(StatusKey::PoisonCooldown, self.options.cooldown);

        if let Some(line) = self.options.avoid.line(&outcome, actor, opponent) {
            return Ok(vec![line]);
        }

        opponent
            .status
            .set(StatusKey::Poisoned, duration_value(self.options.duration));
        opponent
            .status
            .set(StatusKey::PoisonDamage, self.options.magnitude);

        let mut lines = vec![self.options.hit.fill(&[
            &actor.label,
            &opponent.label,
            &damage_text(outcome.damage),
            &opponent.label,
        ])];
        push_outcome_extras(&mut lines, outcome);
        Ok(lines)
    }
}
