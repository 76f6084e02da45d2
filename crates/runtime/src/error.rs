//! Errors surfaced by the session runtime.
//!
//! Wraps combat failures and content lookups so callers can bubble them up
//! with the character they concern.
use thiserror::Error;

use combat_core::{CombatError, ErrorSeverity};

use crate::session::CharacterId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("no fight in progress for {character}")]
    SessionNotFound { character: CharacterId },

    #[error("{character} is already in a fight")]
    SessionExists { character: CharacterId },

    #[error("no {side} named '{id}' in the roster")]
    UnknownCombatant { side: &'static str, id: String },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(error) => error.severity(),
            Self::SessionNotFound { .. }
            | Self::SessionExists { .. }
            | Self::UnknownCombatant { .. } => ErrorSeverity::Validation,
        }
    }
}
