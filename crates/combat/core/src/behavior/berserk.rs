//! Berserk rage: once triggered, every attack the combatant makes is forced
//! and amplified until the rage decays.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::StatusKey;
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BerserkOptions {
    pub weight: u32,
    /// Stored berserk value on entering the rage. Decays through generic
    /// maintenance like any other duration.
    pub duration: u32,
    /// Added to the multiplier of every attack while raging, percent.
    pub bonus: u32,
    /// Slots: attacker, is/are.
    pub enter: Template,
    /// Slots: attacker, defender, damage, crit suffix.
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl Default for BerserkOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            duration: 3,
            bonus: 100,
            enter: Template::new("%s %s overcome by a berserk rage!"),
            hit: Template::new("%s savagely mauls %s for %s%s."),
            avoid: AvoidLines::standard(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Berserk {
    options: BerserkOptions,
}

impl Berserk {
    pub const ACTION: &'static str = "berserk";

    pub fn new(weight: u32) -> Self {
        Self::with_options(BerserkOptions {
            weight,
            ..BerserkOptions::default()
        })
    }

    pub fn with_options(options: BerserkOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Berserk {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        ActionTags::ATTACK | ActionTags::MELEE
    }

    fn weight(&self, _actor: &Combatant, _opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        Some(self.options.weight)
    }

    fn forced_action(&self, actor: &Combatant) -> Option<&'static str> {
        actor.status.has(StatusKey::Berserk).then_some(Self::ACTION)
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

        let mut lines = Vec::new();
        if !actor.status.has(StatusKey::Berserk) {
            actor.status.set(StatusKey::Berserk, self.options.duration);
            lines.push(self.options.enter.fill(&[&actor.label, &actor.verb()]));
        }

        let params = AttackParams::from_stats(&actor.stats).tagged(self.tags());
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;
        let line = self
            .options
            .avoid
            .line(&outcome, actor, opponent)
            .unwrap_or_else(|| {
                self.options.hit.fill(&[
                    &actor.label,
                    &opponent.label,
                    &damage_text(outcome.damage),
                    &crit_suffix(outcome.did_crit),
                ])
            });
        lines.push(line);
        push_outcome_extras(&mut lines, outcome);
        Ok(lines)
    }

    fn modify_attack(&self, actor: &Combatant, params: &mut AttackParams) {
        if actor.status.has(StatusKey::Berserk) {
            params.multiplier_pct = params.multiplier_pct.saturating_add(self.options.bonus);
        }
    }
}
