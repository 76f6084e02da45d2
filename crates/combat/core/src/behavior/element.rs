//! Elemental attacks: burn and chill.
//!
//! Both deal amplified damage and leave a lingering condition on the target.
//! Re-applying refreshes the duration rather than stacking it.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::{Combatant, Immunities};
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::{StatusKey, duration_value};
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras, suppressed};

/// Options shared by burn and chill. Unset fields take the element's own
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementOptions {
    pub weight: u32,
    /// Damage multiplier, percent.
    pub multiplier: Option<u32>,
    /// Turns the condition lasts; 2 when unset.
    pub duration: Option<u32>,
    pub is_ranged: bool,
    /// Spell-like attacks are unavailable where casting is impossible.
    pub is_spell: bool,
    /// Slots: attacker, defender, damage, crit suffix, defender, is/are.
    pub hit: Option<Template>,
    pub avoid: AvoidLines,
}

const DEFAULT_DURATION: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Element {
    Fire,
    Frost,
}

impl Element {
    const fn status(self) -> StatusKey {
        match self {
            Self::Fire => StatusKey::Burned,
            Self::Frost => StatusKey::Chilled,
        }
    }

    const fn immunity(self) -> Immunities {
        match self {
            Self::Fire => Immunities::BURN,
            Self::Frost => Immunities::CHILL,
        }
    }

    const fn tag(self) -> ActionTags {
        match self {
            Self::Fire => ActionTags::BURN,
            Self::Frost => ActionTags::CHILL,
        }
    }

    const fn multiplier(self) -> u32 {
        match self {
            Self::Fire => 125,
            Self::Frost => 110,
        }
    }

    const fn hit(self) -> Template {
        match self {
            Self::Fire => Template::new("%s scorches %s for %s%s! %s %s burning."),
            Self::Frost => {
                Template::new("%s freezes %s for %s%s! %s %s chilled to the bone.")
            }
        }
    }
}

fn element_tags(element: Element, options: &ElementOptions) -> ActionTags {
    let mut tags = ActionTags::ATTACK | element.tag();
    tags |= if options.is_ranged {
        ActionTags::RANGED
    } else {
        ActionTags::MELEE
    };
    if options.is_spell {
        tags |= ActionTags::SPELL;
    }
    tags
}

fn element_weight(
    element: Element,
    options: &ElementOptions,
    opponent: &Combatant,
    terrain: TerrainFlags,
) -> Option<u32> {
    if opponent.immunities.contains(element.immunity())
        || suppressed(element_tags(element, options), terrain)
    {
        return None;
    }
    Some(options.weight)
}

fn element_perform(
    element: Element,
    options: &ElementOptions,
    actor: &mut Combatant,
    opponent: &mut Combatant,
    env: &mut CombatEnv<'_>,
) -> Result<Vec<String>> {
    let multiplier = options.multiplier.unwrap_or(element.multiplier());
    let params = AttackParams::from_stats(&actor.stats)
        .with_multiplier(multiplier)
        .tagged(element_tags(element, options));
    let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;

    if let Some(line) = options.avoid.line(&outcome, actor, opponent) {
        return Ok(vec![line]);
    }

    let duration = options.duration.unwrap_or(DEFAULT_DURATION);
    opponent
        .status
        .set(element.status(), duration_value(duration));
    let hit = options.hit.clone().unwrap_or_else(|| element.hit());
    let mut lines = vec![hit.fill(&[
        &actor.label,
        &opponent.label,
        &damage_text(outcome.damage),
        &crit_suffix(outcome.did_crit),
        &opponent.label,
        &opponent.verb(),
    ])];
    push_outcome_extras(&mut lines, outcome);
    Ok(lines)
}

fn unknown(action: &str, actor: &Combatant) -> CombatError {
    CombatError::UnknownAction {
        action: action.to_string(),
        combatant: actor.label.name.clone(),
    }
}

/// Fire attack. Leaves the target burned, which makes later burn attacks
/// against it hit harder.
#[derive(Clone, Debug)]
pub struct Burn {
    options: ElementOptions,
}

impl Burn {
    pub const ACTION: &'static str = "burn";

    pub fn new(weight: u32) -> Self {
        Self::with_options(ElementOptions {
            weight,
            ..ElementOptions::default()
        })
    }

    pub fn with_options(options: ElementOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Burn {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        element_tags(Element::Fire, &self.options)
    }

    fn weight(&self, _actor: &Combatant, opponent: &Combatant, terrain: TerrainFlags) -> Option<u32> {
        element_weight(Element::Fire, &self.options, opponent, terrain)
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        if action != Self::ACTION {
            return Err(unknown(action, actor));
        }
        element_perform(Element::Fire, &self.options, actor, opponent, env)
    }
}

/// Frost attack. A chilled target dodges half as well.
#[derive(Clone, Debug)]
pub struct Chill {
    options: ElementOptions,
}

impl Chill {
    pub const ACTION: &'static str = "chill";

    pub fn new(weight: u32) -> Self {
        Self::with_options(ElementOptions {
            weight,
            ..ElementOptions::default()
        })
    }

    pub fn with_options(options: ElementOptions) -> Self {
        Self { options }
    }
}

impl Behavior for Chill {
    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn tags(&self) -> ActionTags {
        element_tags(Element::Frost, &self.options)
    }

    fn weight(&self, _actor: &Combatant, opponent: &Combatant, terrain: TerrainFlags) -> Option<u32> {
        element_weight(Element::Frost, &self.options, opponent, terrain)
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        if action != Self::ACTION {
            return Err(unknown(action, actor));
        }
        element_perform(Element::Frost, &self.options, actor, opponent, env)
    }
}
