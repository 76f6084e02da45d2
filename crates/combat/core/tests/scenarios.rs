use combat_core::{
    CombatEnv, CombatStats, CombatTables, Combatant, Constrict, Defend, EnglishGrammar,
    FightOutcome, Furious, Label, Poison, PoisonOptions, RoundResolver, ScriptedRng, StatusKey,
    Stun, run_maintenance,
};

const TABLES: CombatTables = CombatTables::without_misses();

/// Player with no dodge, so every avoidable attack against it lands.
fn rook(hp: u32) -> Combatant {
    Combatant::player("Rook", hp, CombatStats::new(4, 0, 0, 0, 0))
}

/// Opponent with a fixed 10-damage roll and no crit chance.
fn ogre() -> Combatant {
    Combatant::opponent(Label::new("The ogre"), 60, CombatStats::new(10, 0, 0, 0, 0))
}

#[test]
fn stun_sets_counters_and_decays_after_one_round() {
    let mut ogre = ogre().with(Stun::new(0));
    let mut rook = rook(50);
    // dodge, miss, crit
    let mut rng = ScriptedRng::new([100, 100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let report = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("stun"), &mut env)
        .unwrap();
    assert_eq!(
        report.messages,
        vec!["The ogre slams into Rook for *10* damage! Rook is stunned for 1 turn."]
    );
    assert_eq!(rook.status.get(StatusKey::Stunned), 2);
    assert_eq!(ogre.status.get(StatusKey::StunCooldown), 3);

    assert!(run_maintenance(&mut ogre, &env).is_empty());
    let lines = run_maintenance(&mut rook, &env);
    assert_eq!(lines, vec!["Rook is stunned for 1 more turn."]);
    assert_eq!(rook.status.get(StatusKey::Stunned), 1);
    assert_eq!(ogre.status.get(StatusKey::StunCooldown), 2);
}

#[test]
fn stunned_combatant_loses_its_turn() {
    let mut ogre = ogre();
    let mut rook = rook(50);
    rook.status.set(StatusKey::Stunned, 1);
    let mut rng = ScriptedRng::default();
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut rook, &mut ogre, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(report.action, None);
    assert_eq!(report.messages, vec!["Rook is stunned and cannot act."]);
    assert_eq!(ogre.hp.current, 60);
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn poison_ticks_once_per_round_for_its_duration() {
    let mut ogre = ogre().with(Poison::with_options(PoisonOptions {
        duration: 8,
        magnitude: 10,
        ..PoisonOptions::default()
    }));
    let mut rook = rook(200);
    // dodge, miss; poison never rolls crit
    let mut rng = ScriptedRng::new([100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, Some("poison"), &mut env)
        .unwrap();
    assert_eq!(rook.status.get(StatusKey::Poisoned), 9);
    assert_eq!(rook.status.get(StatusKey::PoisonDamage), 10);
    let after_bite = rook.hp.current;

    let mut ticks = 0;
    for _ in 0..8 {
        let lines = run_maintenance(&mut rook, &env);
        ticks += lines.iter().filter(|line| line.contains("damage from poison")).count();
    }
    assert_eq!(ticks, 8);
    assert_eq!(after_bite - rook.hp.current, 80);

    let lines = run_maintenance(&mut rook, &env);
    assert_eq!(lines, vec!["The poison in Rook wears off."]);
    assert!(!rook.status.has(StatusKey::Poisoned));
    assert!(!rook.status.has(StatusKey::PoisonDamage));
    assert_eq!(after_bite - rook.hp.current, 80);
}

#[test]
fn furious_prepares_then_forces_a_double_blow() {
    let mut ogre = ogre().with(Furious::new(100));
    let mut rook = rook(100);
    // selection draw, then dodge, miss, crit for the charge
    let mut rng = ScriptedRng::new([1, 100, 100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let prepare = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(prepare.action.as_deref(), Some("furious"));
    assert!(ogre.status.has(StatusKey::IsFurious));
    assert_eq!(rook.hp.current, 100);

    let charge = resolver.resolve_turn(&mut ogre, &mut rook, None, &mut env).unwrap();
    assert_eq!(charge.action.as_deref(), Some("furiousAttack"));
    assert_eq!(
        charge.messages,
        vec!["The ogre charges furiously into Rook for *20* damage!"]
    );
    assert_eq!(rook.hp.current, 80);
    assert!(!ogre.status.has(StatusKey::IsFurious));
    assert_eq!(ogre.status.get(StatusKey::Tired), 2);
}

#[test]
fn furious_charge_is_forced_over_a_requested_action() {
    let mut ogre = ogre().with(Furious::new(0));
    ogre.status.enable(StatusKey::IsFurious);
    let mut rook = rook(100);
    let mut rng = ScriptedRng::new([100, 100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(report.action.as_deref(), Some("furiousAttack"));
}

#[test]
fn constrict_escape_is_certain_at_one_remaining() {
    let mut ogre = ogre().with(Constrict::new(100));
    let mut rook = rook(100);
    // round 1: selection, dodge, miss, crit; round 2: failed escape roll
    let mut rng = ScriptedRng::new([1, 100, 100, 100, 51]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let seize = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(seize.action.as_deref(), Some("constrict"));
    // 10 × 75% rounds up to 8
    assert_eq!(rook.hp.current, 92);
    assert!(ogre.status.has(StatusKey::IsConstricting));
    assert_eq!(rook.status.get(StatusKey::Stunned), 2);
    assert!(seize.messages.contains(&"Rook is stunned for 2 more turns.".to_string()));

    let squeeze = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(squeeze.action.as_deref(), Some("beConstricting"));
    assert_eq!(rook.hp.current, 84);
    assert_eq!(rook.status.get(StatusKey::Stunned), 1);

    let last = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(
        &last.messages[..2],
        ["The ogre squeezes Rook for *8* damage.", "Rook breaks free from The ogre!"]
    );
    assert_eq!(rook.hp.current, 76);
    assert!(!rook.status.has(StatusKey::Stunned));
    assert!(!ogre.status.has(StatusKey::IsConstricting));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn constrict_escape_is_a_coin_flip_at_two_remaining() {
    let mut ogre = ogre().with(Constrict::new(0));
    ogre.status.enable(StatusKey::IsConstricting);
    let mut rook = rook(100);
    rook.status.set(StatusKey::Stunned, 2);
    let mut rng = ScriptedRng::new([50]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, None, &mut env)
        .unwrap();
    assert_eq!(report.messages, vec!["Rook breaks free from The ogre!"]);
    assert_eq!(rook.hp.current, 100);
    assert!(!ogre.status.has(StatusKey::IsConstricting));
}

#[test]
fn blind_holder_keeps_the_hold_but_its_squeeze_misses() {
    let mut ogre = ogre().with(Constrict::new(0));
    ogre.status.enable(StatusKey::IsConstricting);
    ogre.status.set(StatusKey::Blind, 2);
    let mut rook = rook(100);
    rook.status.set(StatusKey::Stunned, 2);
    // failed escape roll; the blind squeeze draws nothing
    let mut rng = ScriptedRng::new([51]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, None, &mut env)
        .unwrap();
    assert_eq!(report.action.as_deref(), Some("beConstricting"));
    assert_eq!(report.messages, vec!["The ogre misses Rook."]);
    assert_eq!(rook.hp.current, 100);
    assert!(ogre.status.has(StatusKey::IsConstricting));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn blind_holder_still_loses_the_hold_at_one_remaining() {
    let mut ogre = ogre().with(Constrict::new(0));
    ogre.status.enable(StatusKey::IsConstricting);
    ogre.status.set(StatusKey::Blind, 2);
    let mut rook = rook(100);
    rook.status.set(StatusKey::Stunned, 1);
    let mut rng = ScriptedRng::default();
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, None, &mut env)
        .unwrap();
    assert_eq!(
        report.messages,
        vec!["The ogre misses Rook.", "Rook breaks free from The ogre!"]
    );
    assert_eq!(rook.hp.current, 100);
    assert!(!rook.status.has(StatusKey::Stunned));
    assert!(!ogre.status.has(StatusKey::IsConstricting));
}

#[test]
fn grab_uses_its_own_odds_and_names() {
    let mut ogre = ogre().with(Constrict::grab(0));
    ogre.status.enable(StatusKey::IsConstricting);
    let mut rook = rook(100);
    rook.status.set(StatusKey::Stunned, 2);
    // 26 escapes a constrict but not a grab
    let mut rng = ScriptedRng::new([26]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, None, &mut env)
        .unwrap();
    assert_eq!(report.action.as_deref(), Some("struggle"));
    // 10 × 125% = 13 (12.5 rounded up)
    assert_eq!(rook.hp.current, 87);
    assert!(ogre.status.has(StatusKey::IsConstricting));
}

#[test]
fn defend_halves_only_the_next_hit() {
    let mut ogre = Combatant::opponent(Label::new("The ogre"), 60, CombatStats::new(9, 0, 0, 0, 0));
    let mut rook = rook(100).with(Defend::new(0));
    let mut rng = ScriptedRng::new([100, 100, 100, 100, 100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    resolver
        .resolve_turn(&mut rook, &mut ogre, Some("defend"), &mut env)
        .unwrap();
    assert!(rook.status.has(StatusKey::IsDefending));

    let first = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    // 9 - ceil(4.5) = 4
    assert_eq!(rook.hp.current, 96);
    assert_eq!(
        first.messages,
        vec![
            "The ogre hits Rook for *4* damage.",
            "Rook braces against the blow from The ogre.",
        ]
    );
    assert!(!rook.status.has(StatusKey::IsDefending));

    resolver
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(rook.hp.current, 87);
}

#[test]
fn fight_ends_on_the_knockout_and_rejects_further_rounds() {
    let mut ogre = ogre();
    let mut rook = rook(10);
    let mut rng = ScriptedRng::new([1, 100, 100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let report = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(report.outcome, FightOutcome::ActorWon);
    assert_eq!(rook.hp.current, 0);

    let err = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap_err();
    assert_eq!(err, combat_core::CombatError::FightOver);

    ogre.status.set(StatusKey::Tired, 2);
    resolver.end_fight(&mut ogre, &mut rook);
    assert!(ogre.status.is_empty());
}
