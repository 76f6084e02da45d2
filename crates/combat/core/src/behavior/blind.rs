//! Blinding attack. A blind combatant cannot land hits until it wears off.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::{Combatant, Immunities};
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::{StatusKey, duration_value};
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlindOptions {
    pub weight: u32,
    pub duration: u32,
    pub cooldown: u32,
    pub is_ranged: bool,
    /// Slots: attacker, defender, damage, crit suffix, defender, is/are,
    /// duration, "turn".
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl Default for BlindOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            duration: 2,
            cooldown: 4,
            is_ranged: false,
            hit: Template::new(
                "%s throws grit into the eyes of %s for %s%s! %s %s blinded for %d %s.",
            ),
            avoid: AvoidLines::standard(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Blind {
    options: BlindOptions,
}

impl Blind {
    pub const ACTION: &'static str = "blind";

    pub fn new(weight: u32) -> Self {
        Self::with_options(BlindOptions {
            weight,
            ..BlindOptions::default()
        })
    }

    pub fn with_options(options: BlindOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Blind {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        if self.options.is_ranged {
            ActionTags::ATTACK | ActionTags::RANGED
        } else {
            ActionTags::ATTACK | ActionTags::MELEE
        }
    }

    fn weight(&self, actor: &Combatant, opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        if actor.status.has(StatusKey::BlindCooldown)
            || opponent.immunities.contains(Immunities::BLIND)
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

        let params = AttackParams::from_stats(&actor.stats).tagged(self.tags());
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;
        actor
            .status
            .set(StatusKey::BlindCooldown, self.options.cooldown);

        if let Some(line) = self.options.avoid.line(&outcome, actor, opponent) {
            return Ok(vec![line]);
        }

        let duration = self.options.duration;
        opponent.status.set(StatusKey::Blind, duration_value(duration));
        let mut lines = vec![self.options.hit.fill(&[
            &actor.label,
            &opponent.label,
            &damage_text(outcome.damage),
            &crit_suffix(outcome.did_crit),
            &opponent.label,
            &opponent.verb(),
            &duration,
            &env.plural("turn", duration),
        ])];
        push_outcome_extras(&mut lines, outcome);
        Ok(lines)
    }
}
