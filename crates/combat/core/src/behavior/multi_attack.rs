//! Flurry: several independent attacks in one action.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultiAttackOptions {
    pub weight: u32,
    pub min_attacks: u32,
    pub max_attacks: u32,
    /// Multiplier applied to each strike, percent.
    pub multiplier: u32,
    /// Slots: attacker, number of strikes.
    pub prepare: Template,
    /// Slots: attacker, defender, damage, crit suffix.
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl Default for MultiAttackOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            min_attacks: 2,
            max_attacks: 3,
            multiplier: 100,
            prepare: Template::new("%s unleashes a flurry of %d strikes!"),
            hit: Template::new("%s strikes %s for %s%s."),
            avoid: AvoidLines::standard(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MultiAttack {
    options: MultiAttackOptions,
}

impl MultiAttack {
    pub const ACTION: &'static str = "multiAttack";

    pub fn new(weight: u32) -> Self {
        Self::with_options(MultiAttackOptions {
            weight,
            ..MultiAttackOptions::default()
        })
    }

    pub fn with_options(options: MultiAttackOptions) -> Self {
        Self { options }
    }
}

impl Behavior for MultiAttack {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        ActionTags::ATTACK | ActionTags::MELEE
    }

    fn weight(&self, _actor: &Combatant, _opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
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

        let strikes = env
            .rng
            .between(self.options.min_attacks, self.options.max_attacks)?;
        let mut lines = vec![self.options.prepare.fill(&[&actor.label, &strikes])];

        for _ in 0..strikes {
            if opponent.is_defeated() || actor.is_defeated() {
                break;
            }
            let params = AttackParams::from_stats(&actor.stats)
                .with_multiplier(self.options.multiplier)
                .tagged(ActionTags::MELEE);
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
        }
        Ok(lines)
    }
}
