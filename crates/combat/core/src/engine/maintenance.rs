//! End-of-round status upkeep.

use strum::IntoEnumIterator;

use crate::combatant::Combatant;
use crate::env::CombatEnv;
use crate::status::{StatusKey, StatusKind};
use crate::text::{Template, damage_text};

/// Poison tick line. Slots: name, damage.
const POISON_TICK: Template = Template::new("%s suffers %s from poison.");

/// Runs upkeep for one combatant and returns the lines it produced.
///
/// For every active duration key, in catalogue order: decrement once; at 0
/// the key and its linked magnitudes are cleared and the expiry line is
/// emitted, otherwise passive damage is applied and the reminder (if any) is
/// emitted. Cooldowns are decremented silently. Toggles and magnitudes are
/// left to their owners.
pub fn run_maintenance(combatant: &mut Combatant, env: &CombatEnv<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    for key in StatusKey::iter() {
        if !combatant.status.has(key) {
            continue;
        }
        match key.kind() {
            StatusKind::Cooldown => {
                combatant.status.decrement(key, 1);
            }
            StatusKind::Duration => {
                let remaining = combatant.status.decrement(key, 1);
                if remaining == 0 {
                    for linked in key.linked() {
                        combatant.status.clear(linked);
                    }
                    if let Some(expiry) = key.expiry() {
                        lines.push(expiry.fill(&[&combatant.label, &combatant.verb()]));
                    }
                    continue;
                }

                if key == StatusKey::Poisoned {
                    let damage = combatant.status.get(StatusKey::PoisonDamage);
                    let lost = combatant.hp.damage(damage);
                    lines.push(POISON_TICK.fill(&[&combatant.label, &damage_text(lost)]));
                }
                if let Some(reminder) = key.reminder() {
                    lines.push(reminder.fill(&[
                        &combatant.label,
                        &combatant.verb(),
                        &remaining,
                        &env.plural("turn", remaining),
                    ]));
                }
            }
            StatusKind::Toggle | StatusKind::Magnitude => {}
        }
    }

    tracing::trace!(
        target: "combat::maintenance",
        combatant = combatant.name(),
        active = combatant.status.len(),
        lines = lines.len(),
        "maintenance done"
    );
    lines
}
