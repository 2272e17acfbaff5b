//! Errors surfaced by the simulation. All of them are configuration-level;
//! tick processing itself cannot fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid playfield bounds {width}x{height}: both sides must be finite and positive")]
    InvalidBounds { width: f64, height: f64 },

    #[error(
        "no point in the playfield is farther than {min_distance} from the ship \
         (farthest corner is {max_reachable:.1} away)"
    )]
    UnsatisfiableSpawn {
        min_distance: f64,
        max_reachable: f64,
    },

    #[error("gave up placing an asteroid after {attempts} attempts (min distance {min_distance})")]
    SpawnExhausted { attempts: u32, min_distance: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
