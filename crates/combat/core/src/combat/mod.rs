//! Single-attack resolution.
//!
//! [`AttackPipeline`] turns attack parameters into an [`AttackOutcome`],
//! giving attached modules two fixed points to intervene: the attacker's
//! parameter hook and the defender's post-attack hook.

mod damage;
mod outcome;
mod params;
mod pipeline;

pub use damage::{percent_of, scale};
pub use outcome::{AttackOutcome, HitResult};
pub use params::{ActionTags, AttackParams};
pub use pipeline::{AttackPipeline, IncomingHit};
