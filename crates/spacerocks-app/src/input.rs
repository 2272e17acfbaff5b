//! Player input: held keys, discrete key presses, and input sources the
//! game loop polls once per tick.

use spacerocks_core::commands::PlayerCommand;
use spacerocks_core::enums::Rotation;
use spacerocks_core::state::GameStateSnapshot;

/// Arrow keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Continuous commands for this frame. Right wins over left and up
    /// wins over down.
    pub fn commands(&self) -> Vec<PlayerCommand> {
        let mut commands = Vec::with_capacity(2);
        if self.right {
            commands.push(PlayerCommand::Rotate {
                direction: Rotation::Clockwise,
            });
        } else if self.left {
            commands.push(PlayerCommand::Rotate {
                direction: Rotation::CounterClockwise,
            });
        }
        if self.up {
            commands.push(PlayerCommand::Accelerate);
        } else if self.down {
            commands.push(PlayerCommand::SlowDown);
        }
        commands
    }
}

/// Edge-triggered keys: one command per press, not per held frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Fire,
    Reset,
}

impl From<KeyPress> for PlayerCommand {
    fn from(press: KeyPress) -> Self {
        match press {
            KeyPress::Fire => PlayerCommand::Fire,
            KeyPress::Reset => PlayerCommand::Reset,
        }
    }
}

/// Commands for one frame: presses first, in arrival order, then the held
/// keys.
pub fn frame_commands(presses: &[KeyPress], keys: &KeyState) -> Vec<PlayerCommand> {
    let mut commands: Vec<PlayerCommand> = presses.iter().map(|&p| p.into()).collect();
    commands.extend(keys.commands());
    commands
}

/// Something the game loop polls for commands before every tick.
pub trait InputSource: Send {
    /// `latest` is the snapshot produced by the previous tick.
    fn poll(&mut self, latest: Option<&GameStateSnapshot>) -> Vec<PlayerCommand>;
}

/// No local input; commands only arrive over the loop's channel.
#[derive(Debug, Default)]
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _latest: Option<&GameStateSnapshot>) -> Vec<PlayerCommand> {
        Vec::new()
    }
}

/// Scripted pilot for unattended runs: sweeps the ship around, taps the
/// thrust and brake, fires at a steady rate, and restarts finished rounds.
#[derive(Debug, Clone)]
pub struct Autopilot {
    frame: u64,
    pub fire_every: u64,
    /// Frames to linger on a finished round before pressing reset.
    pub reset_delay: u64,
    terminal_frames: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(12, 120)
    }
}

impl Autopilot {
    pub fn new(fire_every: u64, reset_delay: u64) -> Self {
        Self {
            frame: 0,
            fire_every,
            reset_delay,
            terminal_frames: 0,
        }
    }

    fn keys(&self) -> KeyState {
        let phase = self.frame % 240;
        KeyState {
            right: phase < 150,
            left: phase >= 180,
            up: phase % 60 < 4,
            down: phase % 60 >= 30 && phase % 60 < 34,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, latest: Option<&GameStateSnapshot>) -> Vec<PlayerCommand> {
        let mut presses = Vec::new();

        if latest.is_some_and(|s| s.terminal) {
            self.terminal_frames += 1;
            if self.terminal_frames >= self.reset_delay {
                self.terminal_frames = 0;
                presses.push(KeyPress::Reset);
                log::info!("autopilot: restarting round");
            }
        } else {
            self.terminal_frames = 0;
        }

        if self.fire_every > 0 && self.frame % self.fire_every == 0 {
            presses.push(KeyPress::Fire);
        }

        let commands = frame_commands(&presses, &self.keys());
        self.frame += 1;
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_beats_left() {
        let keys = KeyState {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(
            keys.commands(),
            vec![PlayerCommand::Rotate {
                direction: Rotation::Clockwise
            }]
        );
    }

    #[test]
    fn test_up_beats_down() {
        let keys = KeyState {
            up: true,
            down: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(
            keys.commands(),
            vec![
                PlayerCommand::Rotate {
                    direction: Rotation::CounterClockwise
                },
                PlayerCommand::Accelerate,
            ]
        );
        let brake = KeyState {
            down: true,
            ..Default::default()
        };
        assert_eq!(brake.commands(), vec![PlayerCommand::SlowDown]);
    }

    #[test]
    fn test_no_keys_no_commands() {
        assert!(KeyState::default().commands().is_empty());
        assert!(frame_commands(&[], &KeyState::default()).is_empty());
    }

    #[test]
    fn test_presses_come_before_held_keys() {
        let keys = KeyState {
            up: true,
            ..Default::default()
        };
        assert_eq!(
            frame_commands(&[KeyPress::Reset, KeyPress::Fire], &keys),
            vec![
                PlayerCommand::Reset,
                PlayerCommand::Fire,
                PlayerCommand::Accelerate
            ]
        );
    }

    #[test]
    fn test_autopilot_fires_on_schedule() {
        let mut pilot = Autopilot::default();
        let fired: Vec<bool> = (0..24)
            .map(|_| pilot.poll(None).contains(&PlayerCommand::Fire))
            .collect();
        assert!(fired[0]);
        assert!(fired[12]);
        assert_eq!(fired.iter().filter(|f| **f).count(), 2);
    }

    #[test]
    fn test_autopilot_resets_after_delay() {
        let mut pilot = Autopilot {
            reset_delay: 3,
            ..Default::default()
        };
        let finished = GameStateSnapshot {
            terminal: true,
            ..Default::default()
        };

        let resets: Vec<bool> = (0..6)
            .map(|_| pilot.poll(Some(&finished)).contains(&PlayerCommand::Reset))
            .collect();
        assert_eq!(resets, vec![false, false, true, false, false, true]);

        let running = GameStateSnapshot::default();
        assert!(!pilot.poll(Some(&running)).contains(&PlayerCommand::Reset));
    }
}
