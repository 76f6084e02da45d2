//! Deterministic turn-based combat engine.
//!
//! Two combatants trade turns. Each turn picks one action from a weighted,
//! dynamically eligible menu contributed by attached [`Behavior`] modules,
//! resolves it through the [`AttackPipeline`] and records lingering effects
//! in each side's [`StatusStore`]. Upkeep after every round ticks durations
//! and cooldowns down and applies damage over time.
//!
//! The crate is pure computation: randomness, pluralisation and balance
//! numbers are injected through [`CombatEnv`], and every round either runs
//! to completion or returns a [`CombatError`] without a partial result.
//!
//! # Example
//!
//! ```
//! use combat_core::{
//!     Burn, CombatEnv, CombatStats, CombatTables, Combatant, EnglishGrammar, Label, PcgRng,
//!     RoundResolver,
//! };
//!
//! let mut hero = Combatant::player("Rook", 40, CombatStats::new(5, 3, 1, 10, 10));
//! let mut drake = Combatant::opponent(Label::new("The drake"), 30, CombatStats::new(4, 4, 0, 5, 5))
//!     .with(Burn::new(30));
//!
//! let tables = CombatTables::default();
//! let mut rng = PcgRng::seeded(7);
//! let mut env = CombatEnv::new(&tables, &EnglishGrammar, &mut rng);
//!
//! let resolver = RoundResolver::new();
//! let report = resolver.resolve_round(&mut drake, &mut hero, &mut env).unwrap();
//! assert!(!report.messages.is_empty());
//! ```

pub mod behavior;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod status;
pub mod text;

pub use behavior::{
    AvoidLines, BASIC_ATTACK, BasicAttack, Behavior, Berserk, BerserkOptions, Blind, BlindOptions,
    Burn, Chill, Constrict, Defend, DefendOptions, ElementOptions, Furious, FuriousOptions,
    HoldKind, HoldOptions, MultiAttack, MultiAttackOptions, Poison, PoisonOptions, Riposte,
    RiposteOptions, Stun, StunOptions,
};
pub use combat::{
    ActionTags, AttackOutcome, AttackParams, AttackPipeline, HitResult, IncomingHit,
};
pub use combatant::{CombatStats, Combatant, Health, Immunities, Label, Side};
pub use config::CombatTables;
pub use engine::{
    ActionSelector, FightOutcome, RoundReport, RoundResolver, WeightEntry, run_maintenance,
};
pub use env::{CombatEnv, CombatRng, EnglishGrammar, Grammar, PcgRng, ScriptedRng, TerrainFlags};
pub use error::{CombatError, ErrorSeverity, Result};
pub use status::{StatusKey, StatusKind, StatusStore, duration_value};
pub use text::{Template, damage_text};
