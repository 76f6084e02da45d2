//! Known status keys and how generic maintenance treats them.

use crate::text::Template;

/// How a key's counter is managed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Presence means active. Only the owning handler clears it.
    Toggle,
    /// "N more rounds", stored as N+1. Decremented once per round; expiry may
    /// emit a message.
    Duration,
    /// Decremented once per round, silently. Blocks its action while > 0.
    Cooldown,
    /// A number attached to another effect (e.g. poison damage per tick).
    /// Never decays on its own; cleared together with its parent duration.
    Magnitude,
}

/// Every key the engine's modules read or write.
///
/// Keys are plain snake_case strings in the [`super::StatusStore`]; this enum
/// names them at call sites and carries their maintenance metadata. Each key
/// is owned by exactly one module, so modules never step on each other.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum StatusKey {
    // ========================================================================
    // Afflictions applied to the opponent
    // ========================================================================
    Stunned,
    Blind,
    Burned,
    Chilled,
    Poisoned,
    PoisonDamage,

    // ========================================================================
    // Self states
    // ========================================================================
    IsFurious,
    Tired,
    Berserk,
    IsDefending,
    IsRiposting,
    IsConstricting,

    // ========================================================================
    // Cooldowns
    // ========================================================================
    StunCooldown,
    BlindCooldown,
    PoisonCooldown,
}

impl StatusKey {
    pub const fn kind(self) -> StatusKind {
        match self {
            Self::Stunned
            | Self::Blind
            | Self::Burned
            | Self::Chilled
            | Self::Poisoned
            | Self::Tired
            | Self::Berserk => StatusKind::Duration,
            Self::PoisonDamage => StatusKind::Magnitude,
            Self::IsFurious | Self::IsDefending | Self::IsRiposting | Self::IsConstricting => {
                StatusKind::Toggle
            }
            Self::StunCooldown | Self::BlindCooldown | Self::PoisonCooldown => StatusKind::Cooldown,
        }
    }

    /// Line emitted when a duration runs out. Slots: name, is/are.
    pub const fn expiry(self) -> Option<Template> {
        let text = match self {
            Self::Stunned => "%s %s no longer stunned.",
            Self::Blind => "%s can see again.",
            Self::Burned => "The flames on %s die out.",
            Self::Chilled => "%s %s no longer chilled.",
            Self::Poisoned => "The poison in %s wears off.",
            Self::Tired => "%s %s no longer tired.",
            Self::Berserk => "%s %s no longer berserk.",
            _ => return None,
        };
        Some(Template::new(text))
    }

    /// Line emitted while a duration is still running.
    /// Slots: name, is/are, remaining, "turn" pluralized.
    pub const fn reminder(self) -> Option<Template> {
        let text = match self {
            Self::Stunned => "%s %s stunned for %d more %s.",
            Self::Blind => "%s %s blinded for %d more %s.",
            _ => return None,
        };
        Some(Template::new(text))
    }

    /// Magnitude keys cleared together with this duration.
    pub const fn linked(self) -> &'static [StatusKey] {
        match self {
            Self::Poisoned => &[Self::PoisonDamage],
            _ => &[],
        }
    }
}
