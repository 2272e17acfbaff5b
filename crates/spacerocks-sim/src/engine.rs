//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering, audio or input dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};

use spacerocks_core::commands::PlayerCommand;
use spacerocks_core::components::{Asteroid, Projectile, Ship};
use spacerocks_core::enums::{GamePhase, SoundId};
use spacerocks_core::events::{AudioEvent, SpawnIntent};
use spacerocks_core::state::{GameStateSnapshot, ObjectView};
use spacerocks_core::types::{Bounds, SimTime};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::random::{RandomSource, SeededRandom};
use crate::systems;
use crate::systems::collision::ShipImpact;
use crate::systems::spawner::FieldSpec;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    bounds: Bounds,
    time: SimTime,
    phase: GamePhase,
    ship: Option<Entity>,
    rng: Box<dyn RandomSource>,
    next_spawn_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    spawn_queue: Vec<SpawnIntent>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new engine seeded from `config.seed` and start the first round.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let rng = Box::new(SeededRandom::new(config.seed));
        Self::with_random(config, rng)
    }

    /// Create a new engine drawing from a caller-supplied random source.
    pub fn with_random(config: SimConfig, rng: Box<dyn RandomSource>) -> Result<Self, SimError> {
        config.validate()?;

        let mut engine = Self {
            world: World::new(),
            bounds: config.bounds(),
            config,
            time: SimTime::default(),
            phase: GamePhase::Active,
            ship: None,
            rng,
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            spawn_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        };
        engine.reset()?;

        log::info!(
            "simulation ready: {}x{} field, {} asteroids, seed {}",
            engine.bounds.width,
            engine.bounds.height,
            engine.config.asteroid_count,
            engine.config.seed
        );
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.bounds,
            audio_events,
        )
    }

    /// Start a fresh round: one ship at the start point with its shield up,
    /// a new asteroid field, no projectiles.
    ///
    /// The field is planned before anything is torn down, so on error the
    /// current round is left untouched.
    pub fn reset(&mut self) -> Result<(), SimError> {
        let field = systems::spawner::plan_asteroid_field(
            self.rng.as_mut(),
            &self.bounds,
            &self.config.ship_start,
            FieldSpec {
                count: self.config.asteroid_count,
                min_distance: self.config.min_asteroid_distance,
                max_attempts: self.config.max_spawn_attempts,
            },
        )?;

        self.world.clear();
        self.spawn_queue.clear();
        self.next_spawn_order = 0;
        self.time = SimTime::default();

        let ship = world_setup::spawn_ship(&mut self.world, &mut self.next_spawn_order, &self.config);
        self.ship = Some(ship);
        for intent in field {
            world_setup::apply_intent(&mut self.world, &mut self.next_spawn_order, &self.config, intent);
        }

        self.phase = GamePhase::Active;
        self.audio_events.push(AudioEvent::Play(SoundId::ThemeLoop));
        log::info!("round started with {} asteroids", self.config.asteroid_count);
        Ok(())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Banner text for the current phase.
    pub fn message(&self) -> &'static str {
        self.phase.message()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The ship entity, while it exists.
    pub fn ship_entity(&self) -> Option<Entity> {
        self.ship
    }

    /// Copy of the ship component, while the ship exists.
    pub fn ship(&self) -> Option<Ship> {
        let entity = self.ship?;
        self.world.get::<&Ship>(entity).ok().map(|ship| *ship)
    }

    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&Asteroid>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Read-only draw list between ticks (same order as the snapshot).
    pub fn objects(&self) -> Vec<ObjectView> {
        systems::snapshot::build_objects(&self.world)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
        // Shots fired this frame move in the same tick.
        self.apply_spawn_queue();
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Reset => {
                if let Err(err) = self.reset() {
                    log::error!("reset rejected, keeping current round: {err}");
                }
            }
            _ => {
                let Some(ship) = self.ship else {
                    return;
                };
                if let Some(intent) = systems::ship_control::apply(&mut self.world, ship, command) {
                    self.spawn_queue.push(intent);
                    self.audio_events.push(AudioEvent::Play(SoundId::Fire));
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Movement integration
        systems::movement::run(&mut self.world, &self.bounds);

        // 2. Ship vs asteroids (first hit only)
        if let Some(ship) = self.ship {
            let impact = systems::collision::resolve_ship(
                &mut self.world,
                ship,
                self.rng.as_mut(),
                &mut self.spawn_queue,
            );
            match impact {
                Some(ShipImpact::ShieldLost) => log::info!("shield down"),
                Some(ShipImpact::Destroyed) => {
                    self.ship = None;
                    self.phase = GamePhase::Defeat;
                    self.audio_events.push(AudioEvent::Stop(SoundId::ThemeLoop));
                    log::info!("ship destroyed at tick {}: game over", self.time.tick);
                }
                None => {}
            }
        }

        // 3. Projectiles vs asteroids
        let destroyed = systems::collision::resolve_projectiles(
            &mut self.world,
            self.rng.as_mut(),
            &mut self.spawn_queue,
            &mut self.despawn_buffer,
        );

        // 4. Off-field projectiles
        let culled = systems::cleanup::run(&mut self.world, &self.bounds, &mut self.despawn_buffer);

        // 5. Children of this tick's splits
        self.apply_spawn_queue();

        // 6. Terminal check
        if self.ship.is_some() && self.phase == GamePhase::Active && self.asteroid_count() == 0 {
            self.phase = GamePhase::Victory;
            log::info!("field cleared at tick {}: victory", self.time.tick);
        }

        log::trace!(
            "tick {}: {} asteroids destroyed, {} projectiles culled",
            self.time.tick,
            destroyed,
            culled
        );
    }

    fn apply_spawn_queue(&mut self) {
        for intent in self.spawn_queue.drain(..) {
            world_setup::apply_intent(&mut self.world, &mut self.next_spawn_order, &self.config, intent);
        }
    }
}

#[cfg(test)]
use spacerocks_core::{enums::AsteroidSize, types::Vector2D};

/// Hand-built fields for tests. These bypass the round rules, so the
/// phase is only brought up to date by the next `tick`.
#[cfg(test)]
impl SimulationEngine {
    /// Place an asteroid directly, bypassing the spawner.
    pub(crate) fn spawn_asteroid(
        &mut self,
        position: Vector2D,
        velocity: Vector2D,
        size: AsteroidSize,
    ) -> Entity {
        world_setup::spawn_asteroid(
            &mut self.world,
            &mut self.next_spawn_order,
            &self.config,
            position,
            velocity,
            size,
        )
    }

    /// Place a projectile directly.
    pub(crate) fn spawn_projectile(&mut self, position: Vector2D, velocity: Vector2D) -> Entity {
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_spawn_order,
            &self.config,
            position,
            velocity,
        )
    }

    /// Remove every asteroid. The phase is only re-evaluated by the next tick.
    pub(crate) fn clear_asteroids(&mut self) {
        self.despawn_buffer.clear();
        self.despawn_buffer
            .extend(self.world.query::<&Asteroid>().iter().map(|(entity, _)| entity));
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }
}
