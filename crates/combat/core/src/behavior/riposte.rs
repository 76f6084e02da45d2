//! Riposte stance: the next hit taken is turned back on the attacker.
//!
//! Heavy blows are only half parried. The defender keeps the rest.

use crate::combat::{ActionTags, IncomingHit, percent_of};
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::StatusKey;
use crate::text::{Template, damage_text};

use super::Behavior;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RiposteOptions {
    pub weight: u32,
    /// Share of a heavy hit that is parried back, percent (rounded up).
    pub heavy_reflect: u32,
    /// Slots: actor.
    pub stance: Template,
    /// Slots: defender, attacker, reflected damage.
    pub counter: Template,
}

impl Default for RiposteOptions {
    fn default() -> Self {
        Self {
            weight: 0,
            heavy_reflect: 50,
            stance: Template::new("%s readies a riposte."),
            counter: Template::new("%s parries and ripostes, dealing %s back to %s!"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Riposte {
    options: RiposteOptions,
}

impl Riposte {
    pub const ACTION: &'static str = "riposte";

    pub fn new(weight: u32) -> Self {
        Self::with_options(RiposteOptions {
            weight,
            ..RiposteOptions::default()
        })
    }

    pub fn with_options(options: RiposteOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Riposte {
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
        actor.status.enable(StatusKey::IsRiposting);
        Ok(vec![self.options.stance.fill(&[&actor.label])])
    }

    fn on_hit_taken(&self, hit: &mut IncomingHit<'_>) {
        if !hit.status.has(StatusKey::IsRiposting) {
            return;
        }
        hit.status.clear(StatusKey::IsRiposting);

        let reflected = if hit.tags.contains(ActionTags::HEAVY) {
            percent_of(hit.damage, self.options.heavy_reflect).min(hit.damage)
        } else {
            hit.damage
        };
        hit.damage -= reflected;
        hit.reflected = hit.reflected.saturating_add(reflected);
        hit.messages.push(self.options.counter.fill(&[
            hit.defender,
            &damage_text(reflected),
            hit.attacker,
        ]));
    }
}
