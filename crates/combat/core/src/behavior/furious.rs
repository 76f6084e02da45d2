//! Two-round charge: a telegraphed wind-up, then a forced double-damage blow
//! that leaves the attacker tired.
//!
//! ```text
//! idle --furious--> prepared (is_furious) --furiousAttack--> idle + tired
//! ```

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::StatusKey;
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras};

/// Stored tired value after a charge. Written literally, not as a turn
/// count, so the attacker is tired for exactly one of its own turns.
const TIRED_AFTER_CHARGE: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FuriousOptions {
    pub weight: u32,
    pub multiplier: u32,
    /// Slots: attacker.
    pub prepare: Template,
    /// Slots: attacker, defender, damage, crit suffix.
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl Default for FuriousOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            multiplier: 200,
            prepare: Template::new("%s paws at the ground, working itself into a fury."),
            hit: Template::new("%s charges furiously into %s for %s%s!"),
            avoid: AvoidLines::new(
                "%s sidesteps the furious charge from %s.",
                "%s charges blindly past %s.",
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Furious {
    options: FuriousOptions,
}

impl Furious {
    pub const ACTION: &'static str = "furious";
    pub const ATTACK: &'static str = "furiousAttack";

    pub fn new(weight: u32) -> Self {
        Self::with_options(FuriousOptions {
            weight,
            ..FuriousOptions::default()
        })
    }

    pub fn with_options(options: FuriousOptions) -> Self {
        Self { options }
    }

    fn prepare(&self, actor: &mut Combatant) -> Vec<String> {
        actor.status.enable(StatusKey::IsFurious);
        vec![self.options.prepare.fill(&[&actor.label])]
    }

    fn charge(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        let params = AttackParams::from_stats(&actor.stats)
            .with_multiplier(self.options.multiplier)
            .tagged(ActionTags::MELEE | ActionTags::HEAVY);
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;

        actor.status.clear(StatusKey::IsFurious);
        actor.status.set(StatusKey::Tired, TIRED_AFTER_CHARGE);

        let mut lines = Vec::with_capacity(1 + outcome.extra_messages.len());
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
}

impl Behavior for Furious {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn handles(&self, action: &str) -> bool {
        action == Self::ACTION || action == Self::ATTACK
    }

    fn tags(&self) -> ActionTags {
        ActionTags::STANCE
    }

    fn weight(&self, _actor: &Combatant, _opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        Some(self.options.weight)
    }

    fn forced_action(&self, actor: &Combatant) -> Option<&'static str> {
        actor.status.has(StatusKey::IsFurious).then_some(Self::ATTACK)
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        match action {
            Self::ACTION => Ok(self.prepare(actor)),
            Self::ATTACK => self.charge(actor, opponent, env),
            _ => Err(CombatError::UnknownAction {
                action: action.to_string(),
                combatant: actor.label.name.clone(),
            }),
        }
    }
}
