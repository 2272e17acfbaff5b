//! Output sinks fed by the game loop: sound playback and frame presentation.
//!
//! The runner ships log-backed implementations; a windowed front end would
//! plug real audio and rendering in behind the same traits.

use spacerocks_core::enums::{GamePhase, SoundId};
use spacerocks_core::events::AudioEvent;
use spacerocks_core::state::GameStateSnapshot;

/// Fire-and-forget sound playback.
pub trait SoundPlayer: Send {
    fn play(&mut self, sound: SoundId);
    fn stop(&mut self, sound: SoundId);
}

/// Receives every snapshot the loop produces.
pub trait FrameSink: Send {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

/// Forward a snapshot's audio cues to the player, in emission order.
pub fn dispatch_audio(player: &mut dyn SoundPlayer, events: &[AudioEvent]) {
    for event in events {
        match *event {
            AudioEvent::Play(sound) => player.play(sound),
            AudioEvent::Stop(sound) => player.stop(sound),
        }
    }
}

/// Sound player that only logs.
#[derive(Debug, Default)]
pub struct LogSoundPlayer;

impl SoundPlayer for LogSoundPlayer {
    fn play(&mut self, sound: SoundId) {
        log::debug!("sound: play {:?}", sound);
    }

    fn stop(&mut self, sound: SoundId) {
        log::debug!("sound: stop {:?}", sound);
    }
}

/// Frame sink that logs a status line every `report_every` ticks and
/// whenever the phase changes.
#[derive(Debug)]
pub struct LogFrameSink {
    report_every: u64,
    last_phase: Option<GamePhase>,
}

impl LogFrameSink {
    pub fn new(report_every: u64) -> Self {
        Self {
            report_every: report_every.max(1),
            last_phase: None,
        }
    }
}

impl FrameSink for LogFrameSink {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        let phase_changed = self.last_phase != Some(snapshot.phase);
        self.last_phase = Some(snapshot.phase);

        if phase_changed && snapshot.terminal {
            log::info!("tick {}: {}", snapshot.time.tick, snapshot.message);
        }
        if phase_changed || snapshot.time.tick % self.report_every == 0 {
            let shield = snapshot.ship().map(|ship| ship.shield);
            log::info!(
                "tick {} ({:.1}s): {:?}, {} asteroids, {} projectiles, shield {:?}",
                snapshot.time.tick,
                snapshot.time.elapsed_secs,
                snapshot.phase,
                snapshot.asteroid_count(),
                snapshot.projectile_count(),
                shield
            );
        }
    }
}

/// The output side of the runner.
pub struct Services {
    pub sound: Box<dyn SoundPlayer>,
    pub frames: Box<dyn FrameSink>,
}

impl Services {
    /// Log-backed sound and frame output.
    pub fn logging(report_every: u64) -> Self {
        Self {
            sound: Box::new(LogSoundPlayer),
            frames: Box::new(LogFrameSink::new(report_every)),
        }
    }
}
