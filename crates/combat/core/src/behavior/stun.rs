//! Stunning blow: normal damage plus a lost turn for the target.

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
pub struct StunOptions {
    pub weight: u32,
    /// Turns the target loses.
    pub duration: u32,
    pub cooldown: u32,
    /// Slots: attacker, defender, damage, crit suffix, defender, is/are,
    /// duration, "turn".
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl Default for StunOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            duration: 1,
            cooldown: 3,
            hit: Template::new("%s slams into %s for %s%s! %s %s stunned for %d %s."),
            avoid: AvoidLines::standard(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Stun {
    options: StunOptions,
}

impl Stun {
    pub const ACTION: &'static str = "stun";

    pub fn new(weight: u32) -> Self {
        Self::with_options(StunOptions {
            weight,
            ..StunOptions::default()
        })
    }

    pub fn with_options(options: StunOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StunOptions {
        &self.options
    }
}

impl Behavior for Stun {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        ActionTags::ATTACK | ActionTags::MELEE
    }

    fn weight(&self, actor: &Combatant, opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        if actor.status.has(StatusKey::StunCooldown) || opponent.immunities.contains(Immunities::STUN) {
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
        actor.status.set(StatusKey::StunCooldown, self.options.cooldown);

        let mut lines = Vec::new();
        if let Some(line) = self.options.avoid.line(&outcome, actor, opponent) {
            lines.push(line);
            return Ok(lines);
        }

        let duration = self.options.duration;
        opponent
            .status
            .set(StatusKey::Stunned, duration_value(duration));
        lines.push(self.options.hit.fill(&[
            &actor.label,
            &opponent.label,
            &damage_text(outcome.damage),
            &crit_suffix(outcome.did_crit),
            &opponent.label,
            &opponent.verb(),
            &duration,
            &env.plural("turn", duration),
        ]));
        push_outcome_extras(&mut lines, outcome);
        Ok(lines)
    }
}
