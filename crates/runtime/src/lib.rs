//! Session runtime for arena fights.
//!
//! Wraps the round resolver from `combat_core` with the state a running
//! fight needs between calls:
//! - [`FightSession`]: both combatants, the seeded RNG, tables and terrain
//! - [`SessionRegistry`]: one session per character, each behind its own lock
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = SessionRegistry::new();
//! let rook = CharacterId::new("rook");
//! registry.open(rook.clone(), FightSession::from_roster(&roster, "rook", "cave_troll", tables, 7)?).await?;
//! let report = registry.exchange(&rook, Some("defend")).await?;
//! ```

pub mod error;
pub mod registry;
pub mod session;

pub use error::{Result, RuntimeError};
pub use registry::{SessionEvent, SessionRegistry};
pub use session::{CharacterId, ExchangeReport, FightSession, Verdict};
