use std::path::PathBuf;
use std::sync::Arc;

use arena_runtime::{
    CharacterId, FightSession, RuntimeError, SessionEvent, SessionRegistry, Verdict,
};
use combat_content::{ContentFactory, Roster};
use combat_core::{CombatError, CombatStats, CombatTables, Combatant, Label};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn shipped() -> (Roster, Arc<CombatTables>) {
    let factory = ContentFactory::new(data_dir());
    let roster = factory.load_roster().unwrap();
    let tables = factory.load_tables().unwrap();
    (roster, Arc::new(tables))
}

/// Neither side can finish the other within a test's worth of exchanges.
fn endless(seed: u64) -> FightSession {
    FightSession::new(
        Combatant::player("Rook", 100_000, CombatStats::new(1, 0, 0, 0, 0)),
        Combatant::opponent(Label::new("The golem"), 100_000, CombatStats::new(1, 0, 0, 0, 0)),
        Arc::new(CombatTables::without_misses()),
        seed,
    )
}

#[tokio::test]
async fn one_fight_per_character() {
    let registry = SessionRegistry::new();
    let rook = CharacterId::new("rook");

    registry.open(rook.clone(), endless(1)).await.unwrap();
    let err = registry.open(rook.clone(), endless(2)).await.unwrap_err();
    assert!(matches!(err, RuntimeError::SessionExists { .. }));
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn unknown_character_has_no_fight() {
    let registry = SessionRegistry::new();
    let ghost = CharacterId::from("ghost");

    let err = registry.exchange(&ghost, None).await.unwrap_err();
    assert!(matches!(err, RuntimeError::SessionNotFound { .. }));
    assert!(registry.close(&ghost).await.is_err());
}

#[tokio::test]
async fn shipped_fight_runs_to_a_verdict() {
    let (roster, tables) = shipped();
    let registry = SessionRegistry::new();
    let mut events = registry.subscribe();
    let rook = CharacterId::new("rook");

    let session = FightSession::from_roster(&roster, "rook", "cave_troll", tables, 42).unwrap();
    registry.open(rook.clone(), session).await.unwrap();

    let mut last = None;
    for _ in 0..500 {
        let report = registry.exchange(&rook, None).await.unwrap();
        let over = report.verdict.is_over();
        last = Some(report);
        if over {
            break;
        }
    }
    let last = last.unwrap();
    assert!(last.verdict.is_over());
    assert!(last.player_hp == 0 || last.opponent_hp == 0);

    let err = registry.exchange(&rook, None).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Combat(CombatError::FightOver)));

    let closed = registry.close(&rook).await.unwrap();
    assert!(closed.player().status.is_empty());
    assert!(closed.opponent().status.is_empty());
    assert!(registry.is_empty().await);

    match events.recv().await.unwrap() {
        SessionEvent::Started { opponent, seed, .. } => {
            assert_eq!(opponent, "The cave troll");
            assert_eq!(seed, 42);
        }
        other => panic!("expected a start event, got {other:?}"),
    }
}

#[test]
fn same_seed_same_fight() {
    let (roster, tables) = shipped();
    let play = |seed| {
        let mut session =
            FightSession::from_roster(&roster, "rook", "kraken_spawn", tables.clone(), seed)
                .unwrap();
        (0..10)
            .map_while(|_| session.exchange(None).ok())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(9), play(9));
}

#[test]
fn unknown_roster_ids_are_rejected() {
    let (roster, tables) = shipped();
    let err = FightSession::from_roster(&roster, "rook", "dragon", tables, 1).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::UnknownCombatant { side: "opponent", .. }
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn exchanges_for_one_character_are_serialized() {
    let registry = Arc::new(SessionRegistry::new());
    let rook = CharacterId::new("rook");
    let wren = CharacterId::new("wren");
    registry.open(rook.clone(), endless(3)).await.unwrap();
    registry.open(wren.clone(), endless(4)).await.unwrap();

    let mut tasks = Vec::new();
    for character in [rook.clone(), rook.clone(), wren.clone()] {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            for _ in 0..25 {
                registry.exchange(&character, Some("doAttack")).await.unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let rook_fight = registry.close(&rook).await.unwrap();
    let wren_fight = registry.close(&wren).await.unwrap();
    assert_eq!(rook_fight.exchanges(), 50);
    assert_eq!(wren_fight.exchanges(), 25);
    assert_eq!(rook_fight.verdict(), Verdict::InProgress);
}

#[test]
fn events_serialize_with_a_tag() {
    let event = SessionEvent::Closed {
        character: CharacterId::new("rook"),
        verdict: Verdict::Victory,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["event"], "closed");
    assert_eq!(json["character"], "rook");
    assert_eq!(json["verdict"], "victory");
}
