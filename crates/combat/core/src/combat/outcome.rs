//! Attack outcome types.

/// Which way an attack went. Exactly one applies per resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    Dodged,
    Missed,
    Hit,
}

/// Result of one attack resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub result: HitResult,
    pub did_crit: bool,
    /// Rolled damage after the defender's defence, before any multiplier.
    pub base_damage: u32,
    /// Damage after multipliers, before defender hooks mitigate it.
    pub pre_mitigation: u32,
    /// Damage the defender actually takes.
    pub damage: u32,
    /// Damage bounced back onto the attacker by defender hooks.
    pub reflected: u32,
    /// Lines produced inside hooks, in the order they fired.
    pub extra_messages: Vec<String>,
}

impl AttackOutcome {
    pub fn avoided(result: HitResult) -> Self {
        Self {
            result,
            did_crit: false,
            base_damage: 0,
            pre_mitigation: 0,
            damage: 0,
            reflected: 0,
            extra_messages: Vec::new(),
        }
    }

    pub fn dodged(&self) -> bool {
        self.result == HitResult::Dodged
    }

    pub fn missed(&self) -> bool {
        self.result == HitResult::Missed
    }

    pub fn hit(&self) -> bool {
        self.result == HitResult::Hit
    }
}
