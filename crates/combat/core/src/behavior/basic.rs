//! The default attack every combatant falls back to.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::Combatant;
use crate::env::CombatEnv;
use crate::error::Result;
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, push_outcome_extras};

/// Action name of the default attack.
pub const BASIC_ATTACK: &str = "doAttack";

/// Plain weapon attack. Takes whatever weight the special actions leave
/// unclaimed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicAttack {
    /// Slots: attacker, defender, damage text, crit suffix.
    pub hit: Template,
    pub avoid: AvoidLines,
}

impl BasicAttack {
    pub const fn standard() -> Self {
        Self {
            hit: Template::new("%s hits %s for %s%s."),
            avoid: AvoidLines::standard(),
        }
    }

    pub fn perform(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        let params = AttackParams::from_stats(&actor.stats).tagged(ActionTags::MELEE);
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;

        let mut lines = Vec::with_capacity(1 + outcome.extra_messages.len());
        let line = self.avoid.line(&outcome, actor, opponent).unwrap_or_else(|| {
            self.hit.fill(&[
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

impl Default for BasicAttack {
    fn default() -> Self {
        Self::standard()
    }
}
