//! A single fight between one player and one opponent.
//!
//! An exchange is the player's turn followed by the opponent's. Each side's
//! upkeep runs just before its own next turn: the opponent's after the
//! player acts, the player's at the end of the exchange. Every status ticks
//! once per exchange, and a duration of `d` costs its holder exactly `d`
//! turns no matter which side applied it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use combat_content::Roster;
use combat_core::{
    ActionSelector, CombatEnv, CombatError, CombatTables, Combatant, EnglishGrammar, FightOutcome,
    PcgRng, RoundResolver, Side, TerrainFlags, run_maintenance,
};

use crate::error::{Result, RuntimeError};

/// Identifies the character whose fight a session tracks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// State of a fight from the player's side.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Verdict {
    #[default]
    InProgress,
    Victory,
    Defeat,
}

impl Verdict {
    /// Reads a report produced with the player acting.
    pub fn after_player_turn(outcome: FightOutcome) -> Self {
        match outcome {
            FightOutcome::Ongoing => Self::InProgress,
            FightOutcome::ActorWon => Self::Victory,
            FightOutcome::OpponentWon => Self::Defeat,
        }
    }

    /// Reads a report produced with the opponent acting.
    pub fn after_opponent_round(outcome: FightOutcome) -> Self {
        match outcome {
            FightOutcome::Ongoing => Self::InProgress,
            FightOutcome::ActorWon => Self::Defeat,
            FightOutcome::OpponentWon => Self::Victory,
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What one exchange produced, ready to show or serialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeReport {
    /// 1-based exchange counter.
    pub exchange: u32,
    /// `None` when the player lost the turn.
    pub player_action: Option<String>,
    /// `None` when the opponent lost the turn or never got one.
    pub opponent_action: Option<String>,
    pub messages: Vec<String>,
    pub verdict: Verdict,
    pub player_hp: u32,
    pub opponent_hp: u32,
}

/// Owns both combatants, the fight's RNG and its context.
///
/// A failed exchange leaves the session exactly as it was before the call.
#[derive(Clone, Debug)]
pub struct FightSession {
    player: Combatant,
    opponent: Combatant,
    tables: Arc<CombatTables>,
    terrain: TerrainFlags,
    resolver: RoundResolver,
    rng: PcgRng,
    seed: u64,
    exchanges: u32,
    verdict: Verdict,
}

impl FightSession {
    pub fn new(player: Combatant, opponent: Combatant, tables: Arc<CombatTables>, seed: u64) -> Self {
        Self {
            player,
            opponent,
            tables,
            terrain: TerrainFlags::empty(),
            resolver: RoundResolver::new(),
            rng: PcgRng::seeded(seed),
            seed,
            exchanges: 0,
            verdict: Verdict::InProgress,
        }
    }

    /// Builds both sides from roster definitions.
    pub fn from_roster(
        roster: &Roster,
        player_id: &str,
        opponent_id: &str,
        tables: Arc<CombatTables>,
        seed: u64,
    ) -> Result<Self> {
        let player = roster
            .player(player_id)
            .ok_or_else(|| RuntimeError::UnknownCombatant {
                side: "player",
                id: player_id.to_string(),
            })?
            .build(Side::Player);
        let opponent = roster
            .opponent(opponent_id)
            .ok_or_else(|| RuntimeError::UnknownCombatant {
                side: "opponent",
                id: opponent_id.to_string(),
            })?
            .build(Side::Opponent);
        Ok(Self::new(player, opponent, tables, seed))
    }

    pub fn with_terrain(mut self, terrain: TerrainFlags) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_over(&self) -> bool {
        self.verdict.is_over()
    }

    /// Actions the player may request right now.
    pub fn available_actions(&self) -> Vec<&'static str> {
        ActionSelector::available(&self.player, &self.opponent, self.terrain)
    }

    /// Plays one exchange. `action` of `None` lets the player's modules
    /// choose by weight, as for the opponent.
    ///
    /// Once the verdict is in, both sides' statuses are cleared and further
    /// calls fail with [`CombatError::FightOver`].
    pub fn exchange(&mut self, action: Option<&str>) -> Result<ExchangeReport> {
        if self.verdict.is_over() {
            return Err(CombatError::FightOver.into());
        }

        let snapshot = (self.player.clone(), self.opponent.clone(), self.rng.clone());
        match self.play(action) {
            Ok(report) => Ok(report),
            Err(error) => {
                (self.player, self.opponent, self.rng) = snapshot;
                tracing::warn!(
                    target: "runtime::session",
                    player = self.player.name(),
                    opponent = self.opponent.name(),
                    %error,
                    "exchange rolled back"
                );
                Err(error.into())
            }
        }
    }

    fn play(&mut self, action: Option<&str>) -> std::result::Result<ExchangeReport, CombatError> {
        let mut env = CombatEnv::new(&self.tables, &EnglishGrammar, &mut self.rng)
            .with_terrain(self.terrain);

        let turn = self
            .resolver
            .resolve_turn(&mut self.player, &mut self.opponent, action, &mut env)?;
        let mut messages = turn.messages;
        let mut verdict = Verdict::after_player_turn(turn.outcome);

        let mut opponent_action = None;
        if !verdict.is_over() {
            messages.extend(run_maintenance(&mut self.opponent, &env));
            verdict = Verdict::after_player_turn(FightOutcome::between(&self.player, &self.opponent));
        }
        if !verdict.is_over() {
            let reply =
                self.resolver
                    .resolve_turn(&mut self.opponent, &mut self.player, None, &mut env)?;
            messages.extend(reply.messages);
            opponent_action = reply.action;
            verdict = Verdict::after_opponent_round(reply.outcome);
        }
        if !verdict.is_over() {
            messages.extend(run_maintenance(&mut self.player, &env));
            verdict = Verdict::after_opponent_round(FightOutcome::between(&self.opponent, &self.player));
        }

        self.exchanges += 1;
        self.verdict = verdict;
        if verdict.is_over() {
            self.resolver.end_fight(&mut self.player, &mut self.opponent);
            tracing::info!(
                target: "runtime::session",
                player = self.player.name(),
                opponent = self.opponent.name(),
                %verdict,
                exchanges = self.exchanges,
                "fight finished"
            );
        }

        Ok(ExchangeReport {
            exchange: self.exchanges,
            player_action: turn.action,
            opponent_action,
            messages,
            verdict,
            player_hp: self.player.hp.current,
            opponent_hp: self.opponent.hp.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::BASIC_ATTACK as BASIC;
    use combat_core::{CombatStats, Label, StatusKey, Stun};

    fn session(player_hp: u32, opponent_hp: u32) -> FightSession {
        let player = Combatant::player("Rook", player_hp, CombatStats::new(10, 0, 0, 0, 0));
        let opponent =
            Combatant::opponent(Label::new("The rat"), opponent_hp, CombatStats::new(1, 0, 0, 0, 0));
        FightSession::new(
            player,
            opponent,
            Arc::new(CombatTables::without_misses()),
            11,
        )
    }

    #[test]
    fn verdict_reads_outcomes_from_the_right_side() {
        assert_eq!(Verdict::after_player_turn(FightOutcome::ActorWon), Verdict::Victory);
        assert_eq!(Verdict::after_opponent_round(FightOutcome::ActorWon), Verdict::Defeat);
        assert_eq!(Verdict::after_opponent_round(FightOutcome::OpponentWon), Verdict::Victory);
        assert_eq!(Verdict::Defeat.to_string(), "defeat");
    }

    #[test]
    fn knockout_on_the_player_turn_skips_the_opponent() {
        let mut fight = session(50, 10);
        let report = fight.exchange(Some("doAttack")).unwrap();

        assert_eq!(report.verdict, Verdict::Victory);
        assert_eq!(report.opponent_action, None);
        assert_eq!(report.opponent_hp, 0);
        assert!(fight.is_over());
        assert!(matches!(
            fight.exchange(None),
            Err(RuntimeError::Combat(CombatError::FightOver))
        ));
    }

    fn golem(opponent_weight: Option<u32>) -> Combatant {
        let golem =
            Combatant::opponent(Label::new("The golem"), 100, CombatStats::new(1, 0, 0, 0, 0));
        match opponent_weight {
            Some(weight) => golem.with(Stun::new(weight)),
            None => golem,
        }
    }

    fn duel(player: Combatant, opponent: Combatant) -> FightSession {
        FightSession::new(player, opponent, Arc::new(CombatTables::without_misses()), 5)
    }

    #[test]
    fn player_stun_costs_the_opponent_exactly_one_turn() {
        let player = Combatant::player("Rook", 100, CombatStats::new(5, 0, 0, 0, 0))
            .with(Stun::new(0));
        let mut fight = duel(player, golem(None));

        let first = fight.exchange(Some(Stun::ACTION)).unwrap();
        assert_eq!(first.player_action.as_deref(), Some(Stun::ACTION));
        assert_eq!(first.opponent_action, None);
        assert!(first.messages.contains(&"The golem is stunned for 1 more turn.".to_string()));
        assert!(first.messages.contains(&"The golem is stunned and cannot act.".to_string()));

        let second = fight.exchange(Some(BASIC)).unwrap();
        assert!(second.messages.contains(&"The golem is no longer stunned.".to_string()));
        assert_eq!(second.opponent_action.as_deref(), Some(BASIC));
        assert!(!fight.opponent().status.has(StatusKey::Stunned));
    }

    #[test]
    fn opponent_stun_costs_the_player_exactly_one_turn() {
        let player = Combatant::player("Rook", 100, CombatStats::new(5, 0, 0, 0, 0));
        // Stun claims the whole budget until its cooldown starts.
        let mut fight = duel(player, golem(Some(100)));

        let first = fight.exchange(Some(BASIC)).unwrap();
        assert_eq!(first.player_action.as_deref(), Some(BASIC));
        assert_eq!(first.opponent_action.as_deref(), Some(Stun::ACTION));

        let second = fight.exchange(Some(BASIC)).unwrap();
        assert_eq!(second.player_action, None);
        assert_eq!(second.opponent_action.as_deref(), Some(BASIC));
        assert!(second.messages.contains(&"Rook is no longer stunned.".to_string()));

        let third = fight.exchange(Some(BASIC)).unwrap();
        assert_eq!(third.player_action.as_deref(), Some(BASIC));
    }

    #[test]
    fn rejected_action_is_not_an_exchange() {
        let mut fight = session(50, 100);
        let err = fight.exchange(Some("fireball")).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Combat(CombatError::ActionNotAvailable { .. })
        ));
        assert_eq!(fight.exchanges(), 0);
    }

    #[test]
    fn failure_mid_exchange_rolls_back_the_player_turn() {
        let mut fight = session(50, 100);
        // Nothing left for the opponent to draw from.
        fight.tables = Arc::new(CombatTables {
            weight_budget: 0,
            ..CombatTables::without_misses()
        });
        let before = fight.rng.clone().next_u32();

        let err = fight.exchange(Some("doAttack")).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Combat(CombatError::EmptyWeightTable { .. })
        ));
        assert_eq!(fight.opponent().hp.current, 100);
        assert_eq!(fight.exchanges(), 0);
        assert_eq!(fight.rng.clone().next_u32(), before);
    }
}
