//! Round orchestration: action selection, resolution and upkeep.

mod maintenance;
mod resolver;
mod selector;

pub use maintenance::run_maintenance;
pub use resolver::{FightOutcome, RoundReport, RoundResolver};
pub use selector::{ActionSelector, WeightEntry};
