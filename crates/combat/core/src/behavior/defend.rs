//! Defensive stance. Spends a turn to blunt the next hit taken, however many
//! rounds later it lands.

use crate::combat::{ActionTags, IncomingHit, percent_of};
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::StatusKey;
use crate::text::Template;

use super::Behavior;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefendOptions {
    pub weight: u32,
    /// Share of the blocked hit removed, percent (rounded up).
    pub reduction: u32,
    /// Slots: actor.
    pub stance: Template,
    /// Slots: defender, attacker.
    pub absorb: Template,
}

impl Default for DefendOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            reduction: 50,
            stance: Template::new("%s takes a defensive stance."),
            absorb: Template::new("%s braces against the blow from %s."),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Defend {
    options: DefendOptions,
}

impl Defend {
    pub const ACTION: &'static str = "defend";

    pub fn new(weight: u32) -> Self {
        Self::with_options(DefendOptions {
            weight,
            ..DefendOptions::default()
        })
    }

    pub fn with_options(options: DefendOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Defend {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        ActionTags::STANCE
    }

    fn weight(&self, _actor: &Combatant, _opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        Some(self.options.weight)
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        _opponent: &mut Combatant,
        _env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        if action != Self::ACTION {
            return Err(CombatError::UnknownAction {
                action: action.to_string(),
                combatant: actor.label.name.clone(),
            });
        }
        actor.status.enable(StatusKey::IsDefending);
        Ok(vec![self.options.stance.fill(&[&actor.label])])
    }

    fn on_hit_taken(&self, hit: &mut IncomingHit<'_>) {
        if !hit.status.has(StatusKey::IsDefending) {
            return;
        }
        hit.status.clear(StatusKey::IsDefending);
        hit.damage = hit
            .damage
            .saturating_sub(percent_of(hit.damage, self.options.reduction));
        hit.messages
            .push(self.options.absorb.fill(&[hit.defender, hit.attacker]));
    }
}
