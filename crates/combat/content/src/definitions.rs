//! Serializable combatant definitions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use combat_core::{
    Behavior, Berserk, BerserkOptions, Blind, BlindOptions, Burn, Chill, CombatStats, Combatant,
    Constrict, Defend, DefendOptions, ElementOptions, Furious, FuriousOptions, HoldKind,
    HoldOptions, Immunities, Label, MultiAttack, MultiAttackOptions, Poison, PoisonOptions,
    Riposte, RiposteOptions, Side, Stun, StunOptions,
};

/// One attached module and its options, tagged by `kind`.
///
/// ```toml
/// [[opponents.behaviors]]
/// kind = "burn"
/// weight = 35
/// is_ranged = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BehaviorSpec {
    Stun(StunOptions),
    Blind(BlindOptions),
    Burn(ElementOptions),
    Chill(ElementOptions),
    Poison(PoisonOptions),
    Furious(FuriousOptions),
    Berserk(BerserkOptions),
    Defend(DefendOptions),
    Riposte(RiposteOptions),
    Constrict(HoldOptions),
    /// Constrict's machine with grab odds. Options left unset take the grab
    /// defaults rather than constrict's.
    Grab(HoldOptions),
    MultiAttack(MultiAttackOptions),
}

impl BehaviorSpec {
    /// Builds the described module.
    pub fn build(&self) -> Arc<dyn Behavior> {
        match self {
            Self::Stun(options) => Arc::new(Stun::with_options(options.clone())),
            Self::Blind(options) => Arc::new(Blind::with_options(options.clone())),
            Self::Burn(options) => Arc::new(Burn::with_options(options.clone())),
            Self::Chill(options) => Arc::new(Chill::with_options(options.clone())),
            Self::Poison(options) => Arc::new(Poison::with_options(options.clone())),
            Self::Furious(options) => Arc::new(Furious::with_options(options.clone())),
            Self::Berserk(options) => Arc::new(Berserk::with_options(options.clone())),
            Self::Defend(options) => Arc::new(Defend::with_options(options.clone())),
            Self::Riposte(options) => Arc::new(Riposte::with_options(options.clone())),
            Self::Constrict(options) => Arc::new(Constrict::with_options(options.clone())),
            Self::Grab(options) => Arc::new(Constrict::with_options(HoldOptions {
                kind: HoldKind::Grab,
                ..options.clone()
            })),
            Self::MultiAttack(options) => Arc::new(MultiAttack::with_options(options.clone())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stun(_) => "stun",
            Self::Blind(_) => "blind",
            Self::Burn(_) => "burn",
            Self::Chill(_) => "chill",
            Self::Poison(_) => "poison",
            Self::Furious(_) => "furious",
            Self::Berserk(_) => "berserk",
            Self::Defend(_) => "defend",
            Self::Riposte(_) => "riposte",
            Self::Constrict(_) => "constrict",
            Self::Grab(_) => "grab",
            Self::MultiAttack(_) => "multi_attack",
        }
    }
}

/// Static description of a combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantDefinition {
    pub id: String,
    /// Display name, e.g. "The ember drake".
    pub name: String,
    #[serde(default)]
    pub plural: bool,
    pub hp: u32,
    #[serde(default)]
    pub stats: CombatStats,
    /// e.g. `"BURN | POISON"`.
    #[serde(default)]
    pub immunities: Immunities,
    /// Attached in this order.
    #[serde(default)]
    pub behaviors: Vec<BehaviorSpec>,
}

impl CombatantDefinition {
    pub fn label(&self) -> Label {
        Label {
            name: self.name.clone(),
            plural: self.plural,
        }
    }

    /// A fresh combatant at full health with its modules attached.
    pub fn build(&self, side: Side) -> Combatant {
        let mut combatant =
            Combatant::new(side, self.label(), self.hp, self.stats).with_immunities(self.immunities);
        for spec in &self.behaviors {
            combatant.attach_shared(spec.build());
        }
        combatant
    }
}

/// Every combatant the arena knows about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<CombatantDefinition>,
    #[serde(default)]
    pub opponents: Vec<CombatantDefinition>,
}

impl Roster {
    pub fn player(&self, id: &str) -> Option<&CombatantDefinition> {
        self.players.iter().find(|def| def.id == id)
    }

    pub fn opponent(&self, id: &str) -> Option<&CombatantDefinition> {
        self.opponents.iter().find(|def| def.id == id)
    }

    pub fn opponent_ids(&self) -> impl Iterator<Item = &str> {
        self.opponents.iter().map(|def| def.id.as_str())
    }
}
