//! Tests for the match engine: determinism, command handling, turn flow,
//! and session behavior.

use barrage_core::commands::PlayerCommand;
use barrage_core::config::MatchConfig;
use barrage_core::constants::TERRAIN_POINTS;
use barrage_core::enums::*;
use barrage_core::events::MatchEvent;
use barrage_core::state::MatchSnapshot;

use crate::engine::MatchEngine;

fn make_engine(seed: u64) -> MatchEngine {
    MatchEngine::new(MatchConfig {
        seed,
        ..MatchConfig::default()
    })
    .unwrap()
}

fn make_busy_engine(seed: u64) -> MatchEngine {
    MatchEngine::new(MatchConfig {
        seed,
        wind_strength: WindStrength::Medium,
        wind_direction: WindDirection::Fixed,
        enable_targets: true,
        enable_fans: true,
        enable_pushers: true,
        enable_pullers: true,
        ..MatchConfig::default()
    })
    .unwrap()
}

/// Deterministic per-tick command script used by the determinism tests.
fn scripted_commands(tick: u64) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if tick % 40 == 0 {
        commands.push(PlayerCommand::SetAngle {
            degrees: 30.0 + (tick % 90) as f64,
        });
        commands.push(PlayerCommand::SetPower {
            power: 80.0 + (tick % 60) as f64,
        });
        commands.push(PlayerCommand::Fire);
    }
    commands
}

fn assert_settled(engine: &MatchEngine, snapshot: &MatchSnapshot) {
    for view in &snapshot.combatants {
        let surface = engine.terrain().height_at(view.position.x);
        assert!(
            (view.position.y - (surface + 10.0)).abs() < 1e-6,
            "combatant {} floating at {:?} over surface {surface}",
            view.player,
            view.position
        );
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = make_busy_engine(12345);
    let mut engine_b = make_busy_engine(12345);

    for tick in 0..600 {
        engine_a.queue_commands(scripted_commands(tick));
        engine_b.queue_commands(scripted_commands(tick));

        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at tick {tick}");

        let events_a = serde_json::to_string(&engine_a.drain_events()).unwrap();
        let events_b = serde_json::to_string(&engine_b.drain_events()).unwrap();
        assert_eq!(events_a, events_b, "events diverged at tick {tick}");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = make_engine(111);
    let mut engine_b = make_engine(222);

    let snap_a = engine_a.tick();
    let snap_b = engine_b.tick();
    assert_ne!(
        serde_json::to_string(&snap_a).unwrap(),
        serde_json::to_string(&snap_b).unwrap(),
        "different seeds should roll different matches"
    );
}

// ---- Match setup ----

#[test]
fn test_new_engine_is_ready_to_play() {
    let mut engine = make_engine(42);
    let events = engine.drain_events();
    assert!(events.contains(&MatchEvent::MatchStarted));
    assert!(events
        .iter()
        .any(|event| matches!(event, MatchEvent::TurnStarted { .. })));

    let snapshot = engine.tick();
    assert_eq!(snapshot.phase, TurnPhase::AwaitingShot);
    assert!(snapshot.in_progress);
    assert_eq!(snapshot.winner, None);
    assert!(snapshot.current_player < 2);
    assert_eq!(snapshot.scores, [0, 0]);
    assert_eq!(snapshot.terrain.len(), TERRAIN_POINTS + 2);
    assert!(snapshot.projectile.is_none());
    assert_settled(&engine, &snapshot);
}

#[test]
fn test_combatant_names_come_from_config_truncated() {
    let engine = MatchEngine::new(MatchConfig {
        seed: 42,
        player_names: ["Alexander".to_string(), "Jo".to_string()],
        ..MatchConfig::default()
    })
    .unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.combatants[0].name, "Ale");
    assert_eq!(snapshot.combatants[1].name, "Jo");
}

#[test]
fn test_busy_config_places_objects() {
    let engine = make_busy_engine(42);
    let snapshot = engine.snapshot();
    assert!(
        !snapshot.field_objects.is_empty(),
        "targets and obstacles were enabled"
    );
    for object in &snapshot.field_objects {
        assert!(object.position.x >= 100.0 && object.position.x <= 1820.0);
    }
}

// ---- Commands ----

#[test]
fn test_aim_commands_apply_with_clamps() {
    let mut engine = make_engine(42);

    engine.queue_command(PlayerCommand::SetAngle { degrees: 500.0 });
    engine.queue_command(PlayerCommand::SetPower { power: -20.0 });
    let snapshot = engine.tick();

    let active = &snapshot.combatants[snapshot.current_player];
    assert_eq!(active.angle, 150.0);
    assert_eq!(active.power, 0.0);

    engine.queue_command(PlayerCommand::AdjustAngle { delta: -300.0 });
    engine.queue_command(PlayerCommand::AdjustPower { delta: 19.5 });
    let snapshot = engine.tick();
    let active = &snapshot.combatants[snapshot.current_player];
    assert_eq!(active.angle, -90.0);
    assert_eq!(active.power, 19.5);
}

#[test]
fn test_aim_commands_dropped_mid_flight() {
    let mut engine = make_engine(42);
    engine.queue_command(PlayerCommand::Fire);
    let snapshot = engine.tick();
    assert_eq!(snapshot.phase, TurnPhase::ShotInFlight);
    let shooter = snapshot.current_player;
    let angle_before = snapshot.combatants[shooter].angle;

    engine.queue_command(PlayerCommand::SetAngle { degrees: 12.0 });
    engine.queue_command(PlayerCommand::Fire);
    let snapshot = engine.tick();
    assert_eq!(snapshot.combatants[shooter].angle, angle_before);
    assert!(snapshot.projectile.is_some(), "original shot still flying");
}

#[test]
fn test_move_command_respects_capability_flags() {
    let mut engine = make_engine(42);
    let snapshot = engine.tick();
    let player = snapshot.current_player;
    let before = snapshot.combatants[player].position;
    let movable = snapshot.combatants[player].can_move_right;

    engine.queue_command(PlayerCommand::Move {
        direction: MoveDirection::Right,
        distance: 5.0,
    });
    let snapshot = engine.tick();
    let after = snapshot.combatants[player].position;

    if movable {
        assert!((after.x - (before.x + 5.0)).abs() < 1e-9);
    } else {
        assert_eq!(after.x, before.x);
    }
    assert_settled(&engine, &snapshot);
}

#[test]
fn test_start_match_ignored_while_running() {
    let mut engine = make_engine(42);
    engine.drain_events();
    let terrain_before = engine.terrain().points().to_vec();

    engine.queue_command(PlayerCommand::StartMatch);
    let snapshot = engine.tick();

    assert!(snapshot.in_progress);
    assert_eq!(engine.terrain().points(), terrain_before.as_slice());
    assert!(
        !engine.drain_events().contains(&MatchEvent::MatchStarted),
        "no restart should have happened"
    );
}

// ---- Shots and turns ----

#[test]
fn test_fire_flies_and_resolves_a_turn() {
    let mut engine = make_engine(42);
    engine.drain_events();

    engine.queue_command(PlayerCommand::Fire);
    let snapshot = engine.tick();
    assert_eq!(snapshot.phase, TurnPhase::ShotInFlight);
    assert!(snapshot.projectile.is_some());

    let mut resolved = None;
    for _ in 0..20_000 {
        let snapshot = engine.tick();
        if snapshot.phase != TurnPhase::ShotInFlight {
            resolved = Some(snapshot);
            break;
        }
    }
    let snapshot = resolved.expect("shot never resolved");

    assert!(snapshot.projectile.is_none());
    let outcome = snapshot.last_shot.expect("outcome must be recorded");
    let events = engine.drain_events();
    match outcome.cause {
        TerminalCause::TerrainImpact | TerminalCause::DirectHit => {
            assert!(events.contains(&MatchEvent::TerrainChanged));
        }
        TerminalCause::OutOfBounds | TerminalCause::TargetHit => {
            assert!(!events.contains(&MatchEvent::TerrainChanged));
        }
    }
    if snapshot.in_progress {
        assert_eq!(snapshot.phase, TurnPhase::AwaitingShot);
        assert!(events
            .iter()
            .any(|event| matches!(event, MatchEvent::TurnStarted { .. })));
    } else {
        assert_eq!(snapshot.phase, TurnPhase::MatchOver);
    }
    assert_settled(&engine, &snapshot);
}

#[test]
fn test_missed_shot_passes_the_turn() {
    let mut engine = make_engine(42);
    let first = engine.tick();
    let first_player = first.current_player;

    // A dud straight into the ground at the shooter's feet.
    engine.queue_command(PlayerCommand::SetAngle { degrees: -90.0 });
    engine.queue_command(PlayerCommand::SetPower { power: 10.0 });
    engine.queue_command(PlayerCommand::Fire);

    let mut snapshot = engine.tick();
    for _ in 0..20_000 {
        if snapshot.phase != TurnPhase::ShotInFlight {
            break;
        }
        snapshot = engine.tick();
    }

    assert_eq!(snapshot.phase, TurnPhase::AwaitingShot);
    assert_eq!(snapshot.last_shot.map(|o| o.cause), Some(TerminalCause::TerrainImpact));
    assert_eq!(snapshot.current_player, 1 - first_player);
    assert_eq!(snapshot.scores, [0, 0]);
}

#[test]
fn test_full_duel_smoke() {
    let mut engine = make_busy_engine(7);
    let mut shots = 0u32;
    let mut angle_seed = 0u64;

    for _ in 0..60_000 {
        let snapshot = engine.tick();
        assert!(snapshot.current_player < 2);
        assert!(snapshot.environment.wind_display <= 9);
        assert_eq!(snapshot.terrain.len(), TERRAIN_POINTS + 2);
        assert_settled(&engine, &snapshot);

        if !snapshot.in_progress {
            assert_eq!(snapshot.phase, TurnPhase::MatchOver);
            let total: u32 = snapshot.scores.iter().sum();
            assert_eq!(total, 1, "exactly one player scores the win");
            assert!(snapshot.winner.is_some());
            break;
        }

        if snapshot.phase == TurnPhase::AwaitingShot {
            angle_seed = angle_seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let jitter = (angle_seed >> 33) % 60;
            let angle = if snapshot.current_player == 0 {
                20.0 + jitter as f64
            } else {
                100.0 + jitter as f64
            };
            engine.queue_command(PlayerCommand::SetAngle { degrees: angle });
            engine.queue_command(PlayerCommand::SetPower {
                power: 90.0 + (jitter as f64),
            });
            engine.queue_command(PlayerCommand::Fire);
            shots += 1;
        }
    }

    assert!(shots > 0, "the duel never fired a shot");
}

#[test]
fn test_quit_freezes_the_match() {
    let mut engine = make_engine(42);
    engine.queue_command(PlayerCommand::Fire);
    for _ in 0..10 {
        engine.tick();
    }
    assert!(engine.projectile_in_flight());
    let terrain_before = engine.terrain().points().to_vec();
    let scores_before = engine.scores();
    engine.drain_events();

    engine.queue_command(PlayerCommand::Quit);
    let snapshot = engine.tick();

    assert_eq!(snapshot.phase, TurnPhase::MatchOver);
    assert!(!snapshot.in_progress);
    assert_eq!(snapshot.winner, None);
    assert!(snapshot.projectile.is_none());
    assert_eq!(engine.terrain().points(), terrain_before.as_slice());
    assert_eq!(snapshot.scores, scores_before);

    let events = engine.drain_events();
    assert!(events.contains(&MatchEvent::MatchEnded));
    assert!(!events
        .iter()
        .any(|event| matches!(event, MatchEvent::PlayerWon { .. })));

    // Frozen: aim commands no longer land anywhere.
    let angle_before = snapshot.combatants[snapshot.current_player].angle;
    engine.queue_command(PlayerCommand::SetAngle { degrees: 0.0 });
    let snapshot = engine.tick();
    assert_eq!(
        snapshot.combatants[snapshot.current_player].angle,
        angle_before
    );
}

// ---- Session ----

#[test]
fn test_scores_persist_across_matches() {
    let mut engine = make_engine(42);
    engine.machine_mut().scores = [2, 1];

    engine.queue_command(PlayerCommand::Quit);
    engine.tick();
    engine.queue_command(PlayerCommand::StartMatch);
    let snapshot = engine.tick();

    assert!(snapshot.in_progress);
    assert_eq!(snapshot.phase, TurnPhase::AwaitingShot);
    assert_eq!(snapshot.scores, [2, 1], "session scores survive restarts");

    engine.reset_scores();
    assert_eq!(engine.scores(), [0, 0]);
}

#[test]
fn test_restart_rerolls_the_world() {
    let mut engine = make_engine(42);
    let terrain_before = engine.terrain().points().to_vec();

    engine.queue_command(PlayerCommand::Quit);
    engine.tick();
    engine.queue_command(PlayerCommand::StartMatch);
    let snapshot = engine.tick();

    assert_ne!(
        engine.terrain().points(),
        terrain_before.as_slice(),
        "fresh terrain expected after restart"
    );
    assert!(snapshot.projectile.is_none());
    assert_eq!(snapshot.winner, None);
    assert_settled(&engine, &snapshot);
}

#[test]
fn test_set_config_applies_on_restart() {
    let mut engine = make_engine(42);
    let mut config = engine.config().clone();
    config.player_names = ["Quentin".to_string(), "Bo".to_string()];
    engine.set_config(config);

    // Nothing changes until a new match starts.
    assert_eq!(engine.snapshot().combatants[0].name, "P1_");

    engine.queue_command(PlayerCommand::Quit);
    engine.tick();
    engine.queue_command(PlayerCommand::StartMatch);
    let snapshot = engine.tick();
    assert_eq!(snapshot.combatants[0].name, "Que");
    assert_eq!(snapshot.combatants[1].name, "Bo");
}

#[test]
fn test_fixed_wind_holds_for_the_whole_match() {
    let mut engine = make_busy_engine(42);
    let wind_before = engine.snapshot().environment.wind;
    assert_eq!(wind_before.x.abs(), 5.0);

    engine.queue_command(PlayerCommand::Fire);
    let snapshot = engine.tick();
    assert_eq!(snapshot.environment.wind, wind_before);
}

#[test]
fn test_per_turn_wind_stays_in_band() {
    let mut engine = MatchEngine::new(MatchConfig {
        seed: 42,
        wind_strength: WindStrength::Random,
        wind_direction: WindDirection::RandomPerTurn,
        ..MatchConfig::default()
    })
    .unwrap();

    for _ in 0..3 {
        engine.queue_command(PlayerCommand::Fire);
        let mut snapshot = engine.tick();
        let magnitude = snapshot.environment.wind.x.abs();
        assert!(
            [2.0, 5.0, 10.0].contains(&magnitude),
            "unexpected wind {magnitude}"
        );
        match magnitude {
            m if m == 2.0 => assert!((1..=3).contains(&snapshot.environment.wind_display)),
            m if m == 5.0 => assert!((4..=6).contains(&snapshot.environment.wind_display)),
            _ => assert!((7..=9).contains(&snapshot.environment.wind_display)),
        }

        for _ in 0..20_000 {
            if snapshot.phase != TurnPhase::ShotInFlight {
                break;
            }
            snapshot = engine.tick();
        }
        if !snapshot.in_progress {
            break;
        }
    }
}
