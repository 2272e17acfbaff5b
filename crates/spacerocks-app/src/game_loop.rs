//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built by the caller so configuration errors surface before
//! the thread starts. Commands arrive via `mpsc` channel. Each snapshot's
//! audio cues go to the `SoundPlayer`, the snapshot itself to the
//! `FrameSink`, and a copy is kept in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use spacerocks_core::constants::TICK_RATE;
use spacerocks_core::state::GameStateSnapshot;
use spacerocks_sim::SimulationEngine;

use crate::input::InputSource;
use crate::services::{dispatch_audio, Services};
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// `None` runs ticks back to back.
    pub tick_duration: Option<Duration>,
    pub max_ticks: Option<u64>,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            tick_duration: Some(TICK_DURATION),
            max_ticks: None,
        }
    }
}

/// Everything the loop thread takes ownership of.
pub struct GameLoop {
    pub engine: SimulationEngine,
    pub input: Box<dyn InputSource>,
    pub services: Services,
    pub settings: LoopSettings,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    game_loop: GameLoop,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("spacerocks-game-loop".into())
        .spawn(move || {
            run_game_loop(game_loop, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, or `max_ticks`.
fn run_game_loop(
    game_loop: GameLoop,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let GameLoop {
        mut engine,
        mut input,
        mut services,
        settings,
    } = game_loop;

    let mut previous: Option<GameStateSnapshot> = None;
    // Counts every tick this loop ran; the engine's clock restarts on reset.
    let mut frames: u64 = 0;
    let mut next_tick_time = Instant::now();
    log::info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopping at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Local input sees the frame the player is looking at
        engine.queue_commands(input.poll(previous.as_ref()));

        // 3. Advance one tick
        let snapshot = engine.tick();
        frames += 1;

        // 4. Outputs
        dispatch_audio(services.sound.as_mut(), &snapshot.audio_events);
        services.frames.present(&snapshot);

        // 5. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        previous = Some(snapshot);
        if settings.max_ticks.is_some_and(|max| frames >= max) {
            log::info!("game loop reached {} ticks", frames);
            return;
        }

        // 6. Sleep until next tick
        if let Some(tick_duration) = settings.tick_duration {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind: reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
