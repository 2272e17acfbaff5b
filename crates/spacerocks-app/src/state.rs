//! Application state shared between the control surface and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use spacerocks_core::commands::PlayerCommand;
use spacerocks_core::state::GameStateSnapshot;

/// Commands sent from the control surface to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` for anything that only exists once the loop runs
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for polling. Updated by the loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.loop_handle.lock().unwrap().is_none());
    }
}
