use combat_core::{
    Berserk, Blind, Burn, Chill, CombatEnv, CombatError, CombatStats, CombatTables, Combatant, ElementOptions,
    EnglishGrammar, Furious, Label, MultiAttack, RoundResolver, Riposte, ScriptedRng, StatusKey,
    TerrainFlags,
};

const TABLES: CombatTables = CombatTables::without_misses();

fn rook(hp: u32) -> Combatant {
    Combatant::player("Rook", hp, CombatStats::new(4, 0, 0, 0, 0))
}

fn ogre() -> Combatant {
    Combatant::opponent(Label::new("The ogre"), 60, CombatStats::new(10, 0, 0, 0, 0))
}

#[test]
fn riposte_turns_a_blow_back_and_clears_itself() {
    let mut ogre = ogre();
    let mut rook = rook(100).with(Riposte::new(0));
    let mut rng = ScriptedRng::new([100; 6]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    resolver
        .resolve_turn(&mut rook, &mut ogre, Some("riposte"), &mut env)
        .unwrap();
    let report = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(
        report.messages,
        vec![
            "The ogre hits Rook for no damage.",
            "Rook parries and ripostes, dealing *10* damage back to The ogre!",
        ]
    );
    assert_eq!(rook.hp.current, 100);
    assert_eq!(ogre.hp.current, 50);
    assert!(!rook.status.has(StatusKey::IsRiposting));

    resolver
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(rook.hp.current, 90);
    assert_eq!(ogre.hp.current, 50);
}

#[test]
fn riposte_only_half_parries_a_furious_charge() {
    let mut ogre = ogre().with(Furious::new(0));
    ogre.status.enable(StatusKey::IsFurious);
    let mut rook = rook(100).with(Riposte::new(0));
    rook.status.enable(StatusKey::IsRiposting);
    let mut rng = ScriptedRng::new([100; 3]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, None, &mut env)
        .unwrap();
    assert_eq!(rook.hp.current, 90);
    assert_eq!(ogre.hp.current, 50);
}

#[test]
fn berserk_rage_is_forced_amplified_and_decays() {
    let mut ogre = ogre().with(Berserk::new(100));
    let mut rook = rook(200);
    // round 1 draws the selection; rounds 2 and 3 are forced
    let mut script = vec![1];
    script.extend([100; 9]);
    script.push(1);
    let mut rng = ScriptedRng::new(script);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let first = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(first.messages[0], "The ogre is overcome by a berserk rage!");
    assert_eq!(rook.hp.current, 180);
    assert_eq!(ogre.status.get(StatusKey::Berserk), 2);

    let second = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert_eq!(second.messages[0], "The ogre savagely mauls Rook for *20* damage.");
    let third = resolver.resolve_round(&mut ogre, &mut rook, &mut env).unwrap();
    assert!(third.messages.contains(&"The ogre is no longer berserk.".to_string()));
    assert_eq!(rook.hp.current, 140);

    // Rage spent: the next round goes back to the weighted draw.
    assert_eq!(rng.remaining(), 1);
}

#[test]
fn multi_attack_prefixes_one_line_per_strike() {
    let mut ogre = ogre().with(MultiAttack::new(0));
    let mut rook = rook(100);
    let mut script = vec![3];
    script.extend([100; 9]);
    let mut rng = ScriptedRng::new(script);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, Some("multiAttack"), &mut env)
        .unwrap();
    assert_eq!(report.messages.len(), 4);
    assert_eq!(report.messages[0], "The ogre unleashes a flurry of 3 strikes!");
    assert_eq!(rook.hp.current, 70);
}

#[test]
fn multi_attack_stops_once_the_target_drops() {
    let mut ogre = ogre().with(MultiAttack::new(0));
    let mut rook = rook(15);
    let mut script = vec![3];
    script.extend([100; 9]);
    let mut rng = ScriptedRng::new(script);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, Some("multiAttack"), &mut env)
        .unwrap();
    assert_eq!(report.messages.len(), 3);
    assert!(report.outcome.is_over());
    assert_eq!(rng.remaining(), 3);
}

#[test]
fn blind_attacker_misses_without_a_miss_roll() {
    let mut ogre = ogre();
    let mut rook = rook(100);
    rook.status.set(StatusKey::Blind, 2);
    let mut rng = ScriptedRng::new([100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    let report = RoundResolver::new()
        .resolve_turn(&mut rook, &mut ogre, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(report.messages, vec!["Rook misses The ogre."]);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn blind_lands_for_its_duration_and_starts_a_cooldown() {
    let mut ogre = ogre().with(Blind::new(0));
    let mut rook = rook(100);
    // dodge, miss, crit; then Rook's dodge roll
    let mut rng = ScriptedRng::new([100, 100, 100, 100]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let report = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("blind"), &mut env)
        .unwrap();
    assert_eq!(
        report.messages,
        vec!["The ogre throws grit into the eyes of Rook for *10* damage! Rook is blinded for 2 turns."]
    );
    assert_eq!(rook.hp.current, 90);
    assert_eq!(rook.status.get(StatusKey::Blind), 3);
    assert_eq!(ogre.status.get(StatusKey::BlindCooldown), 4);

    let err = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("blind"), &mut env)
        .unwrap_err();
    assert!(matches!(err, CombatError::ActionNotAvailable { .. }));

    let swing = resolver
        .resolve_turn(&mut rook, &mut ogre, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(swing.messages, vec!["Rook misses The ogre."]);
    assert_eq!(ogre.hp.current, 60);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn chill_halves_the_target_dodge_until_it_thaws() {
    let mut ogre = ogre().with(Chill::new(0));
    let mut rook = rook(100);
    rook.stats.dodge = 40;
    // chill: dodge, miss, crit; chilled swing: dodge 21 of 20, miss, crit;
    // thawed swing: dodge 21 of 40
    let mut rng = ScriptedRng::new([100, 100, 100, 21, 100, 100, 21]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);
    let resolver = RoundResolver::new();

    let report = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("chill"), &mut env)
        .unwrap();
    assert_eq!(
        report.messages,
        vec!["The ogre freezes Rook for *11* damage! Rook is chilled to the bone."]
    );
    assert_eq!(rook.status.get(StatusKey::Chilled), 3);

    resolver
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(rook.hp.current, 79);

    rook.status.clear(StatusKey::Chilled);
    let thawed = resolver
        .resolve_turn(&mut ogre, &mut rook, Some("doAttack"), &mut env)
        .unwrap();
    assert_eq!(thawed.messages, vec!["Rook dodges the attack from The ogre."]);
    assert_eq!(rook.hp.current, 79);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn burn_hits_harder_against_a_burning_target() {
    let mut ogre = ogre().with(Burn::new(0));
    let mut rook = rook(100);
    rook.status.set(StatusKey::Burned, 2);
    let mut rng = ScriptedRng::new([100; 3]);
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng);

    RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, Some("burn"), &mut env)
        .unwrap();
    // 10 × 125% × 150% = 18.75
    assert_eq!(rook.hp.current, 81);
    // Refreshed, not stacked.
    assert_eq!(rook.status.get(StatusKey::Burned), 3);
}

#[test]
fn spells_are_unavailable_where_casting_is_impossible() {
    let mut ogre = ogre().with(Burn::with_options(ElementOptions {
        is_spell: true,
        ..ElementOptions::default()
    }));
    let mut rook = rook(100);
    let mut rng = ScriptedRng::default();
    let mut env = CombatEnv::new(&TABLES, &EnglishGrammar, &mut rng)
        .with_terrain(TerrainFlags::CANNOT_CAST);

    let err = RoundResolver::new()
        .resolve_turn(&mut ogre, &mut rook, Some("burn"), &mut env)
        .unwrap_err();
    assert!(matches!(err, CombatError::ActionNotAvailable { .. }));
}
