//! match-runner: headless BARRAGE match driver.
//!
//! Usage:
//!   match-runner run --seed 42 --objects --events
//!   match-runner run --config match.json --max-ticks 120000
//!   match-runner default-config > match.json

use std::path::PathBuf;
use std::process;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::config::MatchConfig;
use barrage_core::enums::TurnPhase;
use barrage_sim::MatchEngine;

fn main() {
    // Logs go to stderr; stdout carries event and summary JSON only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "default-config" => cmd_default_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "match-runner: headless BARRAGE match driver\n\
         \n\
         Commands:\n\
         \n\
         run       Drive a scripted match to its end\n\
         \n\
           --seed <N>        Override the config seed\n\
           --config <path>   Match configuration JSON (default: built-in)\n\
           --max-ticks <N>   Give up after N ticks (default: 120000)\n\
           --objects         Enable targets, fans, pushers, and pullers\n\
           --events          Print every match event as a JSON line\n\
           --snapshots <N>   Print every Nth snapshot as a JSON line\n\
         \n\
         default-config  Print the default match configuration JSON\n\
         \n\
         Examples:\n\
         \n\
           match-runner run --seed 7 --objects --events\n\
           match-runner default-config > match.json\n\
           match-runner run --config match.json\n"
    );
}

fn parse_u64(args: &[String], flag: &str) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return Some(n);
            }
        }
    }
    None
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn cmd_default_config() {
    match serde_json::to_string_pretty(&MatchConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    }
}

fn cmd_run(args: &[String]) {
    let mut config = match parse_path(args, "--config") {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => MatchConfig::default(),
    };

    if let Some(seed) = parse_u64(args, "--seed") {
        config.seed = seed;
    }
    if has_flag(args, "--objects") {
        config.enable_targets = true;
        config.enable_fans = true;
        config.enable_pushers = true;
        config.enable_pullers = true;
    }

    let max_ticks = parse_u64(args, "--max-ticks").unwrap_or(120_000);
    let print_events = has_flag(args, "--events");
    let snapshot_every = parse_u64(args, "--snapshots").filter(|n| *n > 0);

    eprintln!("Seed: {}", config.seed);
    let seed = config.seed;

    let mut engine = match MatchEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error assembling match: {e}");
            process::exit(1);
        }
    };

    // The driver aims with its own stream so the match seed stays in
    // charge of the world.
    let mut aim_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut shots = 0u64;
    let mut ticks = 0u64;

    for _ in 0..max_ticks {
        let snapshot = engine.tick();
        ticks += 1;

        if print_events {
            for event in engine.drain_events() {
                match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("Error serializing event: {e}"),
                }
            }
        }

        if let Some(every) = snapshot_every {
            if ticks % every == 0 {
                match serde_json::to_string(&snapshot) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("Error serializing snapshot: {e}"),
                }
            }
        }

        if !snapshot.in_progress {
            break;
        }

        if snapshot.phase == TurnPhase::AwaitingShot {
            let angle = if snapshot.current_player == 0 {
                aim_rng.gen_range(20.0..80.0)
            } else {
                aim_rng.gen_range(100.0..160.0)
            };
            let power = aim_rng.gen_range(80.0..160.0);
            engine.queue_command(PlayerCommand::SetAngle { degrees: angle });
            engine.queue_command(PlayerCommand::SetPower { power });
            engine.queue_command(PlayerCommand::Fire);
            shots += 1;
        }
    }

    let snapshot = engine.snapshot();
    eprintln!(
        "Finished after {ticks} ticks, {shots} shots, scores {}:{}",
        snapshot.scores[0], snapshot.scores[1]
    );
    match snapshot.winner {
        Some(player) => eprintln!("Winner: {}", snapshot.combatants[player].name),
        None => eprintln!("No winner inside the tick budget"),
    }

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": ticks,
        "shots": shots,
        "scores": snapshot.scores,
        "winner": snapshot.winner,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing summary: {e}");
            process::exit(1);
        }
    }
}

fn load_config(path: &std::path::Path) -> Result<MatchConfig, barrage_core::error::BarrageError> {
    let raw = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}
