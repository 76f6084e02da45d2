//! Attack resolution with ordered extension hooks.

use crate::combatant::{Combatant, Label};
use crate::env::CombatEnv;
use crate::error::Result;
use crate::status::{StatusStore, conditions};

use super::damage::scale;
use super::outcome::{AttackOutcome, HitResult};
use super::params::{ActionTags, AttackParams};

/// What a defender-side hook sees and may rewrite.
///
/// Hooks run in the defender's attachment order. A hook that consumes its own
/// toggle must clear it from `status` so it doesn't fire again.
pub struct IncomingHit<'a> {
    pub attacker: &'a Label,
    pub defender: &'a Label,
    /// The defender's store.
    pub status: &'a mut StatusStore,
    pub tags: ActionTags,
    /// Damage the defender is about to take.
    pub damage: u32,
    /// Damage to bounce back onto the attacker.
    pub reflected: u32,
    pub messages: &'a mut Vec<String>,
}

/// Resolves single attacks.
///
/// # Order
///
/// 1. Dodge roll (defender's effective dodge chance)
/// 2. Miss roll (blind attackers always miss)
/// 3. Base damage roll minus defence, then crit roll
/// 4. Hook A: attacker modules rewrite the parameters
/// 5. Final damage = ceil(base × multiplier [× crit] [× condition bonus])
/// 6. Hook B: defender modules mitigate or reflect
/// 7. HP changes, floored at 0
///
/// Unavoidable attacks skip both rolls of steps 1-2, but a blind attacker
/// still misses them. Step 3's crit roll is skipped when the attack cannot
/// crit.
pub struct AttackPipeline;

impl AttackPipeline {
    pub fn resolve(
        attacker: &mut Combatant,
        defender: &mut Combatant,
        mut params: AttackParams,
        env: &mut CombatEnv<'_>,
    ) -> Result<AttackOutcome> {
        if !params.unavoidable {
            let dodge = conditions::dodge_chance(
                defender.stats.dodge,
                &defender.status,
                env.terrain,
                env.tables,
            );
            if env.rng.chance(dodge)? {
                tracing::trace!(
                    target: "combat::pipeline",
                    attacker = attacker.name(),
                    defender = defender.name(),
                    dodge,
                    "attack dodged"
                );
                return Ok(AttackOutcome::avoided(HitResult::Dodged));
            }
        }

        // Blindness spoils unavoidable attacks too.
        let blind = conditions::is_blind(&attacker.status);
        if blind || (!params.unavoidable && env.rng.chance(env.tables.miss_chance)?) {
            tracing::trace!(
                target: "combat::pipeline",
                attacker = attacker.name(),
                blind,
                "attack missed"
            );
            return Ok(AttackOutcome::avoided(HitResult::Missed));
        }

        let rolled = env.rng.between(params.min_damage, params.max_damage)?;
        let base_damage = rolled.saturating_sub(defender.stats.defence);
        let did_crit = params.can_crit && env.rng.chance(attacker.stats.crit)?;

        // Hook A
        {
            let attacker: &Combatant = attacker;
            for behavior in attacker.behaviors.iter() {
                behavior.modify_attack(attacker, &mut params);
            }
        }

        let mut multipliers = vec![params.multiplier_pct];
        if did_crit {
            multipliers.push(env.tables.crit_multiplier);
        }
        if let Some(bonus) = conditions::incoming_bonus(params.tags, &defender.status, env.tables) {
            multipliers.push(bonus);
        }
        let pre_mitigation = scale(base_damage, &multipliers);

        // Hook B
        let mut extra_messages = Vec::new();
        let (damage, reflected) = {
            let Combatant {
                label,
                status,
                behaviors,
                ..
            } = &mut *defender;
            let mut hit = IncomingHit {
                attacker: &attacker.label,
                defender: label,
                status,
                tags: params.tags,
                damage: pre_mitigation,
                reflected: 0,
                messages: &mut extra_messages,
            };
            for behavior in behaviors.iter() {
                behavior.on_hit_taken(&mut hit);
            }
            (hit.damage, hit.reflected)
        };

        defender.hp.damage(damage);
        if reflected > 0 {
            attacker.hp.damage(reflected);
        }

        tracing::trace!(
            target: "combat::pipeline",
            attacker = attacker.name(),
            defender = defender.name(),
            base_damage,
            multiplier = params.multiplier_pct,
            did_crit,
            pre_mitigation,
            damage,
            reflected,
            "attack resolved"
        );

        Ok(AttackOutcome {
            result: HitResult::Hit,
            did_crit,
            base_damage,
            pre_mitigation,
            damage,
            reflected,
            extra_messages,
        })
    }
}
