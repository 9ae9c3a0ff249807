//! The match engine.
//!
//! Owns every piece of live state (terrain, combatants, field objects,
//! turn machine, RNG) and advances it one fixed tick at a time. Commands
//! queue up between ticks and drain in arrival order at the start of the
//! next one, so the same seed and command script always replay the same
//! match.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use barrage_core::commands::PlayerCommand;
use barrage_core::config::MatchConfig;
use barrage_core::constants::DT;
use barrage_core::enums::{TerminalCause, TurnPhase, WindDirection, WindStrength};
use barrage_core::error::Result;
use barrage_core::events::MatchEvent;
use barrage_core::state::{Environment, MatchSnapshot, ShotOutcome};
use barrage_core::types::SimTime;
use barrage_terrain::TerrainProfile;

use crate::ballistics::Projectile;
use crate::combatant::Combatant;
use crate::field_object::FieldObjectSet;
use crate::machine::TurnMachine;
use crate::setup;
use crate::snapshot;

/// Headless artillery match engine. Nothing is global; drop the engine and
/// the match is gone.
pub struct MatchEngine {
    config: MatchConfig,
    rng: ChaCha8Rng,
    time: SimTime,
    terrain: TerrainProfile,
    combatants: [Combatant; 2],
    objects: FieldObjectSet,
    machine: TurnMachine,
    environment: Environment,
    /// Wind sign rolled at match setup. Fixed-direction matches keep it for
    /// every shot.
    wind_sign: f64,
    projectile: Option<Projectile>,
    last_shot: Option<ShotOutcome>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Build an engine and assemble its first match. Fails only when the
    /// terrain parameters cannot produce a usable profile.
    pub fn new(config: MatchConfig) -> Result<Self> {
        let mut config = config;
        config.normalize();

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let assembled = setup::assemble(&config, &mut rng)?;
        let mut machine = TurnMachine::default();
        let mut events = Vec::new();
        machine.reset_for_match(assembled.starting_player, &mut events);

        Ok(Self {
            config,
            rng,
            time: SimTime::default(),
            terrain: assembled.terrain,
            combatants: assembled.combatants,
            objects: assembled.objects,
            machine,
            environment: assembled.environment,
            wind_sign: assembled.wind_sign,
            projectile: None,
            last_shot: None,
            command_queue: VecDeque::new(),
            events,
        })
    }

    /// Tear the current match down and assemble a fresh one in place.
    /// Session scores carry over; everything else re-rolls.
    pub fn start_match(&mut self) -> Result<()> {
        let assembled = setup::assemble(&self.config, &mut self.rng)?;
        self.terrain = assembled.terrain;
        self.combatants = assembled.combatants;
        self.objects = assembled.objects;
        self.environment = assembled.environment;
        self.wind_sign = assembled.wind_sign;
        self.projectile = None;
        self.last_shot = None;
        self.time = SimTime::default();
        self.machine
            .reset_for_match(assembled.starting_player, &mut self.events);
        Ok(())
    }

    /// Replace the configuration. Takes effect on the next match start.
    pub fn set_config(&mut self, config: MatchConfig) {
        let mut config = config;
        config.normalize();
        self.config = config;
    }

    /// Zero the session scores.
    pub fn reset_scores(&mut self) {
        self.machine.scores = [0, 0];
    }

    /// Queue a command for the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue a batch of commands in order.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one fixed tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.machine.phase == TurnPhase::ShotInFlight {
            self.step_projectile();
        }

        // The surface under a combatant may have moved this tick.
        for combatant in &mut self.combatants {
            combatant.stick_to_terrain(&self.terrain);
        }

        self.time.advance();
        self.snapshot()
    }

    /// Take every event raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Assemble the complete visible state.
    pub fn snapshot(&self) -> MatchSnapshot {
        snapshot::build(
            self.time,
            &self.machine,
            self.environment,
            &self.combatants,
            &self.objects,
            self.projectile.as_ref(),
            self.last_shot,
            &self.terrain,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn phase(&self) -> TurnPhase {
        self.machine.phase
    }

    pub fn current_player(&self) -> usize {
        self.machine.current_player
    }

    pub fn scores(&self) -> [u32; 2] {
        self.machine.scores
    }

    pub fn in_progress(&self) -> bool {
        self.machine.in_progress
    }

    pub fn terrain(&self) -> &TerrainProfile {
        &self.terrain
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Apply one command. Anything invalid for the current phase is
    /// dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        let aiming = self.machine.in_progress && self.machine.phase == TurnPhase::AwaitingShot;
        match command {
            PlayerCommand::SetAngle { degrees } if aiming => {
                self.combatants[self.machine.current_player].set_angle(degrees);
            }
            PlayerCommand::SetPower { power } if aiming => {
                self.combatants[self.machine.current_player].set_power(power);
            }
            PlayerCommand::AdjustAngle { delta } if aiming => {
                self.combatants[self.machine.current_player].adjust_angle(delta);
            }
            PlayerCommand::AdjustPower { delta } if aiming => {
                self.combatants[self.machine.current_player].adjust_power(delta);
            }
            PlayerCommand::Move {
                direction,
                distance,
            } if aiming => {
                self.combatants[self.machine.current_player].move_by(
                    direction,
                    distance,
                    &self.terrain,
                );
            }
            PlayerCommand::Fire if aiming => self.fire(),
            PlayerCommand::Quit => {
                self.projectile = None;
                self.machine.quit(&mut self.events);
            }
            PlayerCommand::StartMatch if !self.machine.in_progress => {
                if let Err(err) = self.start_match() {
                    warn!(%err, "match restart failed");
                }
            }
            other => debug!(command = ?other, "command dropped in current phase"),
        }
    }

    /// Launch the active combatant's shot, re-rolling the wind first when
    /// the configuration calls for it.
    fn fire(&mut self) {
        if !self.machine.try_fire() {
            return;
        }

        if self.config.wind_strength == WindStrength::Random
            || self.config.wind_direction == WindDirection::RandomPerTurn
        {
            let (wind, wind_display) = setup::roll_wind(
                self.config.wind_strength,
                self.config.wind_direction,
                self.wind_sign,
                &mut self.rng,
            );
            self.environment.wind = wind;
            self.environment.wind_display = wind_display;
        }

        let shooter = &self.combatants[self.machine.current_player];
        let (origin, angle, power, owner) =
            (shooter.position, shooter.angle(), shooter.power(), shooter.player);

        self.projectile = Some(Projectile::launch(
            origin,
            angle,
            power,
            self.environment.gravity,
            self.environment.wind,
            owner,
        ));
        self.last_shot = None;
        debug!(player = owner, angle, power, "shot fired");
    }

    /// Advance the in-flight projectile one step and resolve its outcome
    /// if it terminated.
    fn step_projectile(&mut self) {
        let mut projectile = match self.projectile.take() {
            Some(projectile) => projectile,
            None => return,
        };

        let positions = [self.combatants[0].position, self.combatants[1].position];
        match projectile.step(DT, &mut self.terrain, &self.objects, positions) {
            Some(outcome) => {
                if matches!(
                    outcome.cause,
                    TerminalCause::TerrainImpact | TerminalCause::DirectHit
                ) {
                    self.events.push(MatchEvent::TerrainChanged);
                    // Craters change both the surface and the walkable
                    // spans around it.
                    for combatant in &mut self.combatants {
                        combatant.stick_to_terrain(&self.terrain);
                        combatant.find_movement_boundaries(&self.terrain);
                    }
                }
                self.machine
                    .resolve(&outcome, &mut self.objects, &mut self.events);
                self.last_shot = Some(outcome);
            }
            None => self.projectile = Some(projectile),
        }
    }

    #[cfg(test)]
    pub fn combatant(&self, player: usize) -> &Combatant {
        &self.combatants[player]
    }

    #[cfg(test)]
    pub fn machine_mut(&mut self) -> &mut TurnMachine {
        &mut self.machine
    }

    #[cfg(test)]
    pub fn projectile_in_flight(&self) -> bool {
        self.projectile.is_some()
    }
}
