//! Weighted action selection.

use crate::behavior::BASIC_ATTACK;
use crate::combatant::Combatant;
use crate::env::{CombatEnv, TerrainFlags};
use crate::error::{CombatError, Result};

/// One row of the selection table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightEntry {
    pub action: &'static str,
    pub weight: u32,
}

/// Picks the action a combatant takes this turn.
///
/// # Order
///
/// 1. The first attached module (in attachment order) that forces an action
///    wins outright. No roll is drawn.
/// 2. Otherwise a table is built: the basic attack first, weighted with
///    whatever the budget leaves after the eligible modules' weights, then
///    every eligible module in attachment order.
/// 3. One integer `r` in `[1, max(budget, total)]` is drawn and the table is
///    walked accumulating weight; the first entry whose range holds `r` wins.
pub struct ActionSelector;

impl ActionSelector {
    /// The action a module forces this turn, if any.
    pub fn forced(actor: &Combatant) -> Option<&'static str> {
        actor
            .behaviors()
            .iter()
            .find_map(|behavior| behavior.forced_action(actor))
    }

    /// Selection table for this turn, basic attack first.
    pub fn weight_table(
        actor: &Combatant,
        opponent: &Combatant,
        terrain: TerrainFlags,
        budget: u32,
    ) -> Vec<WeightEntry> {
        let specials: Vec<WeightEntry> = actor
            .behaviors()
            .iter()
            .filter_map(|behavior| {
                behavior
                    .weight(actor, opponent, terrain)
                    .map(|weight| WeightEntry {
                        action: behavior.action(),
                        weight,
                    })
            })
            .collect();
        let claimed = specials
            .iter()
            .fold(0u32, |sum, entry| sum.saturating_add(entry.weight));

        let mut table = Vec::with_capacity(specials.len() + 1);
        table.push(WeightEntry {
            action: BASIC_ATTACK,
            weight: budget.saturating_sub(claimed),
        });
        table.extend(specials);
        table
    }

    /// Chooses this turn's action.
    pub fn choose(actor: &Combatant, opponent: &Combatant, env: &mut CombatEnv<'_>) -> Result<&'static str> {
        if let Some(action) = Self::forced(actor) {
            tracing::debug!(
                target: "combat::selector",
                combatant = actor.name(),
                action,
                "forced action"
            );
            return Ok(action);
        }

        let table = Self::weight_table(actor, opponent, env.terrain, env.tables.weight_budget);
        let total = table
            .iter()
            .fold(0u32, |sum, entry| sum.saturating_add(entry.weight));
        if total == 0 {
            return Err(CombatError::EmptyWeightTable {
                combatant: actor.label.name.clone(),
            });
        }

        let max = env.tables.weight_budget.max(total);
        let roll = env.rng.between(1, max)?;
        let action = Self::pick(&table, roll).ok_or(CombatError::RollOutOfRange { roll, max })?;
        tracing::trace!(
            target: "combat::selector",
            combatant = actor.name(),
            ?table,
            roll,
            action,
            "weighted draw"
        );
        Ok(action)
    }

    /// Walks the table with a drawn value.
    pub fn pick(table: &[WeightEntry], roll: u32) -> Option<&'static str> {
        let mut cumulative = 0u32;
        table.iter().find_map(|entry| {
            cumulative = cumulative.saturating_add(entry.weight);
            (entry.weight > 0 && roll <= cumulative).then_some(entry.action)
        })
    }

    /// Checks that `action` may be requested directly by `actor` this turn.
    pub fn validate(
        actor: &Combatant,
        opponent: &Combatant,
        action: &str,
        terrain: TerrainFlags,
    ) -> Result<&'static str> {
        if action == BASIC_ATTACK {
            return Ok(BASIC_ATTACK);
        }
        actor
            .behaviors()
            .iter()
            .find(|behavior| behavior.action() == action)
            .filter(|behavior| behavior.weight(actor, opponent, terrain).is_some())
            .map(|behavior| behavior.action())
            .ok_or_else(|| CombatError::ActionNotAvailable {
                action: action.to_string(),
                combatant: actor.label.name.clone(),
            })
    }

    /// Actions `actor` could request directly this turn, basic attack first.
    pub fn available(actor: &Combatant, opponent: &Combatant, terrain: TerrainFlags) -> Vec<&'static str> {
        std::iter::once(BASIC_ATTACK)
            .chain(
                actor
                    .behaviors()
                    .iter()
                    .filter(|behavior| behavior.weight(actor, opponent, terrain).is_some())
                    .map(|behavior| behavior.action()),
            )
            .collect()
    }
}
