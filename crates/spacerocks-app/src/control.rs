//! Control surface over the running game loop: start it, feed it commands,
//! poll its latest frame, and stop it.

use thiserror::Error;

use spacerocks_core::commands::PlayerCommand;
use spacerocks_core::state::GameStateSnapshot;
use spacerocks_sim::{SimError, SimulationEngine};

use crate::config::AppConfig;
use crate::game_loop::{self, GameLoop, LoopSettings, TICK_DURATION};
use crate::input::InputSource;
use crate::services::Services;
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("game loop has stopped")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,

    #[error("could not start simulation: {0}")]
    Sim(#[from] SimError),

    #[error("could not spawn game loop thread: {0}")]
    Thread(#[from] std::io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for ControlError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ControlError::Poisoned
    }
}

/// Build the engine from `config` and start the game loop thread.
pub fn start_simulation(
    state: &AppState,
    config: &AppConfig,
    input: Box<dyn InputSource>,
    services: Services,
) -> Result<(), ControlError> {
    let mut tx_lock = state.command_tx.lock()?;
    if tx_lock.is_some() {
        return Err(ControlError::AlreadyRunning);
    }

    let engine = SimulationEngine::new(config.sim.clone())?;
    let settings = LoopSettings {
        tick_duration: config.paced.then_some(TICK_DURATION),
        max_ticks: config.max_ticks,
    };
    let (cmd_tx, handle) = game_loop::spawn_game_loop(
        GameLoop {
            engine,
            input,
            services,
            settings,
        },
        state.latest_snapshot.clone(),
    )?;

    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock()? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), ControlError> {
    let tx_lock = state.command_tx.lock()?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| ControlError::Disconnected),
        None => Err(ControlError::NotStarted),
    }
}

/// Latest snapshot, if the loop has ticked at least once.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, ControlError> {
    Ok(state.latest_snapshot.lock()?.clone())
}

/// Block until the loop thread finishes on its own (tick limit reached).
pub fn wait_for_finish(state: &AppState) -> Result<(), ControlError> {
    let handle = state.loop_handle.lock()?.take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
    *state.command_tx.lock()? = None;
    Ok(())
}

/// Ask the loop to stop and wait for it.
pub fn stop_simulation(state: &AppState) -> Result<(), ControlError> {
    {
        let tx_lock = state.command_tx.lock()?;
        let tx = tx_lock.as_ref().ok_or(ControlError::NotStarted)?;
        // A loop that already hit its tick limit has dropped the receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    wait_for_finish(state)
}
