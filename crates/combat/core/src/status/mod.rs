//! Status effects: the per-combatant store, the key catalogue and the
//! conditions the engine derives from active keys.
//!
//! # Durations
//!
//! A duration meant to last "N more turns" is written as N+1. The round that
//! applies it ends with generic maintenance, which decrements once; the
//! afflicted combatant then sees exactly N of its own turns affected.

mod catalog;
pub mod conditions;
mod store;

pub use catalog::{StatusKey, StatusKind};
pub use store::StatusStore;

/// Stored value for an effect lasting `turns` more turns.
pub const fn duration_value(turns: u32) -> u32 {
    turns.saturating_add(1)
}
