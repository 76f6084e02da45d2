use std::fs;
use std::path::PathBuf;

use combat_content::{BehaviorSpec, ContentFactory, RosterLoader};
use combat_core::{CombatTables, Immunities, Side};

fn shipped_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn shipped_roster_builds_every_combatant() {
    let factory = ContentFactory::new(shipped_data());
    let roster = factory.load_roster().unwrap();
    assert!(!roster.opponents.is_empty());

    for id in roster.opponent_ids() {
        let opponent = ContentFactory::build_opponent(&roster, id).unwrap();
        assert_eq!(opponent.side, Side::Opponent);
        assert!(!opponent.behaviors().is_empty(), "{id} has no behaviors");
    }
    let rook = ContentFactory::build_player(&roster, "rook").unwrap();
    assert_eq!(rook.hp.current, rook.hp.max);
}

#[test]
fn shipped_tables_match_defaults() {
    let tables = ContentFactory::new(shipped_data()).load_tables().unwrap();
    assert_eq!(tables, CombatTables::default());
}

#[test]
fn ron_roster_round_trips_through_the_factory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("roster.ron"),
        r#"(
            players: [],
            opponents: [
                (
                    id: "bog_serpent",
                    name: "The bog serpent",
                    hp: 40,
                    immunities: "POISON",
                    stats: (force: 4, technique: 2),
                    behaviors: [
                        (kind: "grab", weight: 30, escape_chance: Some(10)),
                        (kind: "poison", weight: 20),
                    ],
                ),
            ],
        )"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let roster = factory.load_roster().unwrap();
    let serpent = roster.opponent("bog_serpent").unwrap();
    assert!(serpent.immunities.contains(Immunities::POISON));
    assert!(matches!(
        &serpent.behaviors[0],
        BehaviorSpec::Grab(options) if options.escape_chance == Some(10)
    ));

    let built = ContentFactory::build_opponent(&roster, "bog_serpent").unwrap();
    let actions: Vec<_> = built.behaviors().iter().map(|b| b.action()).collect();
    assert_eq!(actions, vec!["grab", "poison"]);

    // No tables.toml in the directory.
    assert_eq!(factory.load_tables().unwrap(), CombatTables::default());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, "{}").unwrap();
    let err = RosterLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported roster format"));
}
