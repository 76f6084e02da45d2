//! Turn and round resolution.

use crate::behavior::{BASIC_ATTACK, BasicAttack};
use crate::combatant::Combatant;
use crate::env::CombatEnv;
use crate::error::{CombatError, Result};
use crate::status::conditions;
use crate::text::Template;

use super::maintenance::run_maintenance;
use super::selector::ActionSelector;

/// State of the fight after a turn, from the acting side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum FightOutcome {
    Ongoing,
    ActorWon,
    OpponentWon,
}

impl FightOutcome {
    /// Terminal check. The opponent falling takes precedence, so an attacker
    /// killed by its own reflected blow still wins if it dropped the
    /// defender too.
    pub fn between(actor: &Combatant, opponent: &Combatant) -> Self {
        if opponent.is_defeated() {
            Self::ActorWon
        } else if actor.is_defeated() {
            Self::OpponentWon
        } else {
            Self::Ongoing
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// What one turn or round produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// The action taken, or `None` when the actor lost its turn.
    pub action: Option<String>,
    pub messages: Vec<String>,
    pub outcome: FightOutcome,
}

/// Resolves turns for any pair of combatants.
///
/// Holds only wording; all fight state lives on the combatants, so one
/// resolver can serve every fight.
#[derive(Clone, Debug)]
pub struct RoundResolver {
    basic: BasicAttack,
    /// Slots: name, is/are.
    stunned: Template,
}

impl RoundResolver {
    pub fn new() -> Self {
        Self {
            basic: BasicAttack::standard(),
            stunned: Template::new("%s %s stunned and cannot act."),
        }
    }

    pub fn with_basic(mut self, basic: BasicAttack) -> Self {
        self.basic = basic;
        self
    }

    /// A full automated round for `actor`: select, act, then run upkeep for
    /// `actor` and `opponent` in that order.
    ///
    /// Upkeep is skipped when the action itself ended the fight.
    pub fn resolve_round(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<RoundReport> {
        let mut report = self.act(actor, opponent, None, env)?;
        if report.outcome.is_over() {
            return Ok(report);
        }

        report.messages.extend(run_maintenance(actor, env));
        report.messages.extend(run_maintenance(opponent, env));
        report.outcome = FightOutcome::between(actor, opponent);

        tracing::debug!(
            target: "combat::round",
            actor = actor.name(),
            action = report.action.as_deref().unwrap_or("-"),
            outcome = %report.outcome,
            actor_hp = actor.hp.current,
            opponent_hp = opponent.hp.current,
            "round resolved"
        );
        Ok(report)
    }

    /// A single turn without upkeep, typically the player's.
    ///
    /// `requested` is validated against the actor's attached modules. A
    /// module that forces an action overrides the request; `None` falls back
    /// to weighted selection.
    pub fn resolve_turn(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        requested: Option<&str>,
        env: &mut CombatEnv<'_>,
    ) -> Result<RoundReport> {
        self.act(actor, opponent, requested, env)
    }

    /// End-of-fight hook: every status on both sides is dropped.
    pub fn end_fight(&self, actor: &mut Combatant, opponent: &mut Combatant) {
        actor.status.clear_all();
        opponent.status.clear_all();
        tracing::debug!(
            target: "combat::round",
            actor = actor.name(),
            opponent = opponent.name(),
            "fight state cleared"
        );
    }

    fn act(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        requested: Option<&str>,
        env: &mut CombatEnv<'_>,
    ) -> Result<RoundReport> {
        if FightOutcome::between(actor, opponent).is_over() {
            return Err(CombatError::FightOver);
        }

        if conditions::is_stunned(&actor.status) {
            let line = self.stunned.fill(&[&actor.label, &actor.verb()]);
            return Ok(RoundReport {
                action: None,
                messages: vec![line],
                outcome: FightOutcome::Ongoing,
            });
        }

        let action = match (ActionSelector::forced(actor), requested) {
            (Some(forced), _) => forced,
            (None, Some(requested)) => {
                ActionSelector::validate(actor, opponent, requested, env.terrain)?
            }
            (None, None) => ActionSelector::choose(actor, opponent, env)?,
        };

        let messages = self.perform(action, actor, opponent, env).inspect_err(|error| {
            tracing::error!(
                target: "combat::round",
                actor = actor.name(),
                action,
                %error,
                severity = error.severity().as_str(),
                "action failed"
            );
        })?;

        Ok(RoundReport {
            action: Some(action.to_string()),
            messages,
            outcome: FightOutcome::between(actor, opponent),
        })
    }

    fn perform(
        &self,
        action: &str,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        env: &mut CombatEnv<'_>,
    ) -> Result<Vec<String>> {
        if action == BASIC_ATTACK {
            return self.basic.perform(actor, opponent, env);
        }
        let behavior = actor
            .behavior_for(action)
            .ok_or_else(|| CombatError::UnknownAction {
                action: action.to_string(),
                combatant: actor.label.name.clone(),
            })?;
        behavior.perform(action, actor, opponent, env)
    }
}

impl Default for RoundResolver {
    fn default() -> Self {
        Self::new()
    }
}
