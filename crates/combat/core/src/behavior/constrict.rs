//! Holds: constrict and grab.
//!
//! A successful hold stuns the victim and locks the holder into a forced
//! follow-up action every round until the victim gets free. The victim's
//! `stunned` counter doubles as the hold clock:
//!
//! | stunned remaining | forced round                                   |
//! |-------------------|------------------------------------------------|
//! | >= 2              | escape roll; on failure a squeeze tick         |
//! | 1                 | a final squeeze tick, then a guaranteed escape |
//! | 0                 | the hold has lapsed and is released            |
//!
//! A blind holder keeps the hold and its escape rolls, but its squeeze ticks
//! miss.
//!
//! Grab is the same machine with different odds and wording.

use crate::combat::{ActionTags, AttackParams, AttackPipeline};
use crate::combatant::{Combatant, Immunities};
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};
use crate::status::StatusKey;
use crate::text::{Template, crit_suffix, damage_text};

use super::{AvoidLines, Behavior, push_outcome_extras};

/// Which flavour of hold this is. Determines the action names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HoldKind {
    #[default]
    Constrict,
    Grab,
}

impl HoldKind {
    pub const fn action(self) -> &'static str {
        match self {
            Self::Constrict => "constrict",
            Self::Grab => "grab",
        }
    }

    pub const fn hold_action(self) -> &'static str {
        match self {
            Self::Constrict => "beConstricting",
            Self::Grab => "struggle",
        }
    }
}

/// Tunables for a hold. Unset numbers take the defaults of `kind`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HoldOptions {
    /// Set by the constructor. Data names the hold through the entry's
    /// `kind` tag instead.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub kind: HoldKind,
    pub weight: u32,
    /// Multiplier of the seizing hit, percent.
    pub seize_multiplier: Option<u32>,
    /// Stored `stunned` value on the victim after a successful seize.
    pub hold_turns: Option<u32>,
    /// Victim's escape chance while two or more turns remain, percent.
    pub escape_chance: Option<u32>,
    /// Multiplier of a squeeze tick after a failed escape, percent.
    pub squeeze_multiplier: Option<u32>,
    /// Multiplier of the last squeeze before the guaranteed escape, percent.
    pub final_multiplier: Option<u32>,
    pub avoid: AvoidLines,
}

/// Resolved numbers and wording of one hold.
#[derive(Clone, Debug, PartialEq, Eq)]
struct HoldProfile {
    seize_multiplier: u32,
    hold_turns: u32,
    escape_chance: u32,
    squeeze_multiplier: u32,
    final_multiplier: u32,
    /// Slots: holder, victim, damage, crit suffix, victim, is/are.
    seize: Template,
    /// Slots: holder, victim, damage.
    squeeze: Template,
    /// Slots: victim, holder.
    escape: Template,
    /// Slots: holder, victim.
    release: Template,
}

impl HoldProfile {
    fn resolve(options: &HoldOptions) -> Self {
        let base = match options.kind {
            HoldKind::Constrict => Self {
                seize_multiplier: 75,
                hold_turns: 3,
                escape_chance: 50,
                squeeze_multiplier: 75,
                final_multiplier: 75,
                seize: Template::new(
                    "%s coils around %s for %s%s! %s %s caught in a crushing hold.",
                ),
                squeeze: Template::new("%s squeezes %s for %s."),
                escape: Template::new("%s breaks free from %s!"),
                release: Template::new("%s loosens its coils and lets go of %s."),
            },
            HoldKind::Grab => Self {
                seize_multiplier: 100,
                hold_turns: 3,
                escape_chance: 25,
                squeeze_multiplier: 125,
                final_multiplier: 125,
                seize: Template::new("%s seizes %s for %s%s! %s %s held fast."),
                squeeze: Template::new("%s tightens its grip on %s for %s."),
                escape: Template::new("%s struggles free from %s!"),
                release: Template::new("%s releases %s."),
            },
        };
        Self {
            seize_multiplier: options.seize_multiplier.unwrap_or(base.seize_multiplier),
            hold_turns: options.hold_turns.unwrap_or(base.hold_turns),
            escape_chance: options.escape_chance.unwrap_or(base.escape_chance),
            squeeze_multiplier: options.squeeze_multiplier.unwrap_or(base.squeeze_multiplier),
            final_multiplier: options.final_multiplier.unwrap_or(base.final_multiplier),
            ..base
        }
    }
}

#[derive(Clone, Debug)]
pub struct Constrict {
    options: HoldOptions,
    profile: HoldProfile,
}

impl Constrict {
    pub fn new(weight: u32) -> Self {
        Self::with_options(HoldOptions {
            weight,
            ..HoldOptions::default()
        })
    }

    /// Grab-style hold: harder to escape and hurts more while it lasts.
    pub fn grab(weight: u32) -> Self {
        Self::with_options(HoldOptions {
            kind: HoldKind::Grab,
            weight,
            ..HoldOptions::default()
        })
    }

    pub fn with_options(options: HoldOptions) -> Self {
        let profile = HoldProfile::resolve(&options);
        Self { options, profile }
    }

    pub fn kind(&self) -> HoldKind {
        self.options.kind
    }

    fn seize(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        let params = AttackParams::from_stats(&actor.stats)
            .with_multiplier(self.profile.seize_multiplier)
            .tagged(ActionTags::MELEE);
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;

        if let Some(line) = self.options.avoid.line(&outcome, actor, opponent) {
            return Ok(vec![line]);
        }

        opponent
            .status
            .set(StatusKey::Stunned, self.profile.hold_turns);
        actor.status.enable(StatusKey::IsConstricting);

        let mut lines = vec![self.profile.seize.fill(&[
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

    fn hold(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        let remaining = opponent.status.get(StatusKey::Stunned);
        let mut lines = Vec::new();

        match remaining {
            0 => {
                actor.status.clear(StatusKey::IsConstricting);
                lines.push(self.profile.release.fill(&[&actor.label, &opponent.label]));
            }
            1 => {
                self.squeeze(actor, opponent, env, self.profile.final_multiplier, &mut lines)?;
                self.break_free(actor, opponent, &mut lines);
            }
            _ => {
                if env.rng.chance(self.profile.escape_chance)? {
                    self.break_free(actor, opponent, &mut lines);
                } else {
                    self.squeeze(actor, opponent, env, self.profile.squeeze_multiplier, &mut lines)?;
                }
            }
        }

        tracing::trace!(
            target: "combat::behavior",
            holder = actor.name(),
            victim = opponent.name(),
            remaining,
            held = actor.status.has(StatusKey::IsConstricting),
            "hold resolved"
        );
        Ok(lines)
    }

    fn squeeze(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
        multiplier: u32,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let params = AttackParams::from_stats(&actor.stats)
            .with_multiplier(multiplier)
            .without_crit()
            .unavoidable()
            .tagged(ActionTags::MELEE);
        let outcome = AttackPipeline::resolve(actor, opponent, params, env)?;
        // Only blindness gets past an unavoidable squeeze.
        if let Some(line) = self.options.avoid.line(&outcome, actor, opponent) {
            lines.push(line);
            return Ok(());
        }
        lines.push(self.profile.squeeze.fill(&[
            &actor.label,
            &opponent.label,
            &damage_text(outcome.damage),
        ]));
        push_outcome_extras(lines, outcome);
        Ok(())
    }

    fn break_free(&self, actor: &mut Combatant, opponent: &mut Combatant, lines: &mut Vec<String>) {
        opponent.status.clear(StatusKey::Stunned);
        actor.status.clear(StatusKey::IsConstricting);
        lines.push(self.profile.escape.fill(&[&opponent.label, &actor.label]));
    }
}

impl Behavior for Constrict {
    fn action(&self) -> &'static str {
        self.options.kind.action()
    }

    fn handles(&self, action: &str) -> bool {
        action == self.options.kind.action() || action == self.options.kind.hold_action()
    }

    fn tags(&self) -> ActionTags {
        ActionTags::ATTACK | ActionTags::MELEE
    }

    fn weight(&self, _actor: &Combatant, opponent: &Combatant, _terrain: TerrainFlags) -> Option<u32> {
        if opponent.immunities.contains(Immunities::STUN) {
            return None;
        }
        Some(self.options.weight)
    }

    fn forced_action(&self, actor: &Combatant) -> Option<&'static str> {
        actor
            .status
            .has(StatusKey::IsConstricting)
            .then_some(self.options.kind.hold_action())
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        let kind = self.options.kind;
        if action == kind.action() {
            self.seize(actor, opponent, env)
        } else if action == kind.hold_action() {
            self.hold(actor, opponent, env)
        } else {
            Err(CombatError::UnknownAction {
                action: action.to_string(),
                combatant: actor.label.name.clone(),
            })
        }
    }
}
