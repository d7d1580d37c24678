//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::components::Ship;
use starfall_core::constants::*;
use starfall_core::enums::{Difficulty, EndReason, GameMode, GamePhase, TurnDir};
use starfall_core::events::AudioEvent;
use starfall_core::state::{GameStateSnapshot, RunSummaryView};
use starfall_core::tuning::{MetaMods, Tuning};
use starfall_core::types::{Position, SimTime};

use starfall_meta::rewards::{self, RunStats};

use crate::run::RunState;
use crate::systems;
use crate::systems::ship::ShipOutcome;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Folded meta modifiers, applied at every run reset.
    pub mods: MetaMods,
    /// All-time best score for this mode/difficulty, shown on the HUD.
    pub best_score: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            mods: MetaMods::default(),
            best_score: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    difficulty: Difficulty,
    mods: MetaMods,
    rng: ChaCha8Rng,
    run: RunState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl GameEngine {
    /// Create a new engine in the menu phase.
    pub fn new(config: SimConfig) -> Self {
        let tuning = Tuning::compose(config.mode, config.difficulty, &config.mods);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: config.mode,
            difficulty: config.difficulty,
            mods: config.mods,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            run: RunState::new(config.mode, tuning, config.best_score),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Hold phases only tick their timer; menu, pause, and
    /// game over are frozen entirely.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Playing => {
                self.run_systems();
                self.time.advance();
            }
            GamePhase::Countdown => {
                if self.run.hold.tick(DT) {
                    self.phase = GamePhase::Playing;
                }
            }
            GamePhase::WaveClear => {
                if self.run.hold.tick(DT) {
                    self.advance_wave();
                }
            }
            GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => {}
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.mode,
            self.difficulty,
            &self.run,
            audio_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Menu selections only apply in
    /// the menu; intent flags apply whenever a ship exists.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectMode { mode } => {
                if self.phase == GamePhase::Menu {
                    self.mode = mode;
                }
            }
            PlayerCommand::SelectDifficulty { difficulty } => {
                if self.phase == GamePhase::Menu {
                    self.difficulty = difficulty;
                }
            }
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
                    self.reset_run();
                    self.phase = GamePhase::Countdown;
                    self.run.hold.reset(COUNTDOWN_SECS);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::FocusLost => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::GameOver) {
                    self.phase = GamePhase::Menu;
                }
            }
            PlayerCommand::SetThrust { active } => {
                for (_, ship) in self.world.query_mut::<&mut Ship>() {
                    ship.thrusting = active;
                }
            }
            PlayerCommand::SetTurn { dir } => {
                let target = turn_rate(dir);
                for (_, ship) in self.world.query_mut::<&mut Ship>() {
                    ship.rot_target = target;
                }
            }
            PlayerCommand::SetShoot { active } => {
                for (_, ship) in self.world.query_mut::<&mut Ship>() {
                    ship.shooting = active;
                }
            }
        }
    }

    /// Run all systems in order. Game over aborts the tick; a wave
    /// clear flips the phase but lets the remaining systems finish.
    fn run_systems(&mut self) {
        let ts = self.run.powers.time_scale();

        // 1. Run clocks (time-attack expiry ends the run)
        if systems::timers::run(&mut self.run) {
            self.end_game(EndReason::Time);
            return;
        }
        // 2. Ship steering, cooldowns, thrust/friction
        systems::ship::steer(&mut self.world, &self.run);
        // 3. Shooting
        systems::weapons::run(&mut self.world, &mut self.run, &mut self.audio_events);
        // 4. Ship integration, explosion resolution, blink
        if systems::ship::integrate(&mut self.world, &mut self.run, ts) == ShipOutcome::OutOfLives
        {
            self.end_game(EndReason::Dead);
            return;
        }
        // 5. Laser lifecycle
        systems::lasers::run(&mut self.world, &mut self.run, &mut self.despawn_buffer, ts);
        // 6. Asteroid drift
        systems::asteroids::run(&mut self.world, ts);
        // 7. Particles and floaters
        systems::effects::run(&mut self.world, &mut self.despawn_buffer, ts);
        // 8. Power drops and pickup
        systems::power_drops::run(
            &mut self.world,
            &mut self.run,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            ts,
        );
        // 9. UFO clock, flight, bullets
        systems::ufo::run(
            &mut self.world,
            &mut self.run,
            &mut self.rng,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            ts,
        );
        // 10. Collisions (may enter the wave-clear hold)
        systems::collisions::run(
            &mut self.world,
            &mut self.run,
            &mut self.rng,
            &mut self.phase,
            &mut self.audio_events,
        );
    }

    /// Full run reset: clear the world, recompose tuning from the meta
    /// mods, spawn the ship, and build the first wave.
    fn reset_run(&mut self) {
        self.world.clear();
        self.time = SimTime::default();

        let tuning = Tuning::compose(self.mode, self.difficulty, &self.mods);
        let best = self.run.best;
        self.run = RunState::new(self.mode, tuning, best);

        world_setup::spawn_ship(&mut self.world, &self.run.tuning);
        systems::wave_spawner::create_wave(&mut self.world, &mut self.rng, &self.run);
    }

    /// Leave the wave-clear hold: next wave, fresh field, countdown.
    fn advance_wave(&mut self) {
        self.run.wave += 1;
        systems::wave_spawner::create_wave(&mut self.world, &mut self.rng, &self.run);
        self.phase = GamePhase::Countdown;
        self.run.hold.reset(COUNTDOWN_SECS);
        world_setup::spawn_floater(
            &mut self.world,
            Position::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT * 0.58),
            format!("WAVE {}", self.run.wave + 1),
            1.2,
        );
    }

    /// End the run: mark the ship dead, compute the reward summary, and
    /// enter the terminal phase.
    fn end_game(&mut self, reason: EndReason) {
        self.phase = GamePhase::GameOver;
        for (_, ship) in self.world.query_mut::<&mut Ship>() {
            ship.dead = true;
        }

        self.run.best = self.run.best.max(self.run.score);

        let stats = RunStats {
            score: self.run.score,
            wave_index: self.run.wave,
            shots_fired: self.run.shots_fired,
            shots_hit: self.run.shots_hit,
            deaths: self.run.deaths,
            ufo_kills: self.run.ufo_kills,
        };
        let (cores, breakdown) = rewards::calc_cores_earned(
            &stats,
            self.mode,
            self.difficulty,
            self.run.tuning.yield_bonus,
        );

        let accuracy_pct = if self.run.shots_fired > 0 {
            (self.run.shots_hit as f64 / self.run.shots_fired as f64 * 100.0).round() as u32
        } else {
            0
        };

        self.run.summary = Some(RunSummaryView {
            score: self.run.score,
            best: self.run.best,
            accuracy_pct,
            mode: self.mode,
            difficulty: self.difficulty,
            reason,
            cores_earned: cores,
            breakdown,
        });

        self.audio_events.push(AudioEvent::GameOver { reason });
    }
}

/// Angular velocity target per turn intent (radians per tick).
fn turn_rate(dir: TurnDir) -> f64 {
    let step = (TURN_SPEED_DEG / 180.0 * std::f64::consts::PI) / TICK_RATE as f64;
    match dir {
        TurnDir::Left => step,
        TurnDir::None => 0.0,
        TurnDir::Right => -step,
    }
}
