//! Error infrastructure for combat-core.
//!
//! Round resolution has no partial-success path: every failure aborts the
//! round and is returned to the caller. Errors are classified by severity so
//! the runtime can decide whether to log, retry or tear the fight down.
//!
//! # Taxonomy
//!
//! - **Invariant violations** (unknown action, empty weight table) are
//!   programmer errors and surface as [`ErrorSeverity::Internal`].
//! - **Caller mistakes** (asking for an ineligible action, playing on after
//!   the fight ended) are [`ErrorSeverity::Validation`].
//! - **Collaborator failures** (the RNG port cannot produce a value, or
//!   produces one outside the requested range) are
//!   [`ErrorSeverity::Fatal`] and are always propagated.
//!
//! Expected edge cases such as zero damage or an ineligible module are not
//! errors at all; they produce message variants or are simply skipped.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: action not attached, fight already over
    Validation,

    /// Internal error - an engine invariant was violated.
    ///
    /// Examples: selector produced an unknown action, weight table empty
    Internal,

    /// Fatal error - a collaborator failed and the round cannot be resolved.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an engine bug or a dead collaborator.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Errors surfaced while resolving a combat round.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("action '{action}' is not handled by any module attached to {combatant}")]
    UnknownAction { action: String, combatant: String },

    #[error("weight table for {combatant} is empty and no action is forced")]
    EmptyWeightTable { combatant: String },

    #[error("action '{action}' is not currently available to {combatant}")]
    ActionNotAvailable { action: String, combatant: String },

    #[error("randomness source exhausted or unavailable")]
    RandomnessUnavailable,

    #[error("randomness source returned {roll}, outside the drawn range 1..={max}")]
    RollOutOfRange { roll: u32, max: u32 },

    #[error("the fight is already over")]
    FightOver,
}

impl CombatError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAction { .. } | Self::EmptyWeightTable { .. } => ErrorSeverity::Internal,
            Self::ActionNotAvailable { .. } | Self::FightOver => ErrorSeverity::Validation,
            Self::RandomnessUnavailable | Self::RollOutOfRange { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAction { .. } => "unknown_action",
            Self::EmptyWeightTable { .. } => "empty_weight_table",
            Self::ActionNotAvailable { .. } => "action_not_available",
            Self::RandomnessUnavailable => "randomness_unavailable",
            Self::RollOutOfRange { .. } => "roll_out_of_range",
            Self::FightOver => "fight_over",
        }
    }
}

pub type Result<T> = std::result::Result<T, CombatError>;
