use crate::commands::PlayerCommand;
use crate::constants::*;
use crate::enums::*;
use crate::events::{AudioEvent, SpawnIntent};
use crate::state::GameStateSnapshot;
use crate::types::{Bounds, SimTime, Vector2D, UP};

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "expected {b}, got {a}");
}

// ---- Vector2D ----

#[test]
fn test_vector_arithmetic() {
    let a = Vector2D::new(1.0, 2.0);
    let b = Vector2D::new(3.0, -4.0);
    assert_eq!(a + b, Vector2D::new(4.0, -2.0));
    assert_eq!(a - b, Vector2D::new(-2.0, 6.0));
    assert_eq!(b * 0.5, Vector2D::new(1.5, -2.0));
    assert_eq!(-a, Vector2D::new(-1.0, -2.0));

    let mut c = a;
    c += b;
    c *= 2.0;
    assert_eq!(c, Vector2D::new(8.0, -4.0));
}

#[test]
fn test_rotate_is_clockwise_on_screen() {
    // Up rotated 90° clockwise on a y-down screen points right.
    let right = UP.rotate(90.0);
    assert_close(right.x, 1.0);
    assert_close(right.y, 0.0);

    let left = UP.rotate(-90.0);
    assert_close(left.x, -1.0);
    assert_close(left.y, 0.0);
}

#[test]
fn test_rotate_preserves_length() {
    let v = Vector2D::new(3.0, 4.0);
    for step in 0..120 {
        let rotated = v.rotate(step as f64 * 3.0);
        assert_close(rotated.length(), 5.0);
    }
}

#[test]
fn test_distance_to() {
    let a = Vector2D::new(0.0, 0.0);
    let b = Vector2D::new(3.0, 4.0);
    assert_close(a.distance_to(&b), 5.0);
    assert_close(b.distance_to(&a), 5.0);
}

#[test]
fn test_angle_to_up() {
    assert_close(UP.angle_to(&UP), 0.0);
    // Facing right: sprite must be turned 90° back toward up.
    let right = Vector2D::new(1.0, 0.0);
    assert_close(right.angle_to(&UP), -90.0);
}

#[test]
fn test_wrap_stays_in_bounds() {
    let bounds = Bounds::new(800.0, 600.0);
    let samples = [
        -1e-18, -0.5, -1.0, -799.9, -800.0, -1601.0, 0.0, 0.25, 599.999, 600.0, 799.999, 800.0,
        12_345.6,
    ];
    for &x in &samples {
        for &y in &samples {
            let w = Vector2D::new(x, y).wrap(&bounds);
            assert!(w.x >= 0.0 && w.x < bounds.width, "x={x} wrapped to {}", w.x);
            assert!(w.y >= 0.0 && w.y < bounds.height, "y={y} wrapped to {}", w.y);
        }
    }
}

#[test]
fn test_wrap_opposite_edge() {
    let bounds = Bounds::new(800.0, 600.0);
    let w = Vector2D::new(-5.0, 605.0).wrap(&bounds);
    assert_close(w.x, 795.0);
    assert_close(w.y, 5.0);
}

#[test]
fn test_bounds_contains_half_open() {
    let bounds = Bounds::new(800.0, 600.0);
    assert!(bounds.contains(&Vector2D::new(0.0, 0.0)));
    assert!(bounds.contains(&Vector2D::new(799.9, 599.9)));
    assert!(!bounds.contains(&Vector2D::new(800.0, 10.0)));
    assert!(!bounds.contains(&Vector2D::new(10.0, 600.0)));
    assert!(!bounds.contains(&Vector2D::new(-0.1, 10.0)));
}

#[test]
fn test_farthest_corner_distance() {
    let bounds = Bounds::new(800.0, 600.0);
    assert_close(bounds.farthest_corner_distance(&bounds.center()), 500.0);
    assert_close(
        bounds.farthest_corner_distance(&Vector2D::new(0.0, 0.0)),
        1000.0,
    );
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-6);
}

// ---- Enums ----

#[test]
fn test_asteroid_size_tiers() {
    for tier in 1..=3 {
        let size = AsteroidSize::from_tier(tier).unwrap();
        assert_eq!(size.tier(), tier);
    }
    assert_eq!(AsteroidSize::from_tier(0), None);
    assert_eq!(AsteroidSize::from_tier(4), None);

    assert_eq!(AsteroidSize::Large.smaller(), Some(AsteroidSize::Medium));
    assert_eq!(AsteroidSize::Medium.smaller(), Some(AsteroidSize::Small));
    assert_eq!(AsteroidSize::Small.smaller(), None);

    assert_close(AsteroidSize::Large.scale(), 1.0);
    assert_close(AsteroidSize::Medium.scale(), 0.5);
    assert_close(AsteroidSize::Small.scale(), 0.25);
}

#[test]
fn test_phase_message_matches_terminal() {
    for phase in [GamePhase::Active, GamePhase::Victory, GamePhase::Defeat] {
        assert_eq!(!phase.message().is_empty(), phase.is_terminal());
    }
    assert_eq!(GamePhase::Defeat.message(), "Game Over");
    assert_eq!(GamePhase::Victory.message(), "You Win!");
}

// ---- Serde ----

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::Rotate {
            direction: Rotation::Clockwise,
        },
        PlayerCommand::Rotate {
            direction: Rotation::CounterClockwise,
        },
        PlayerCommand::Accelerate,
        PlayerCommand::SlowDown,
        PlayerCommand::Fire,
        PlayerCommand::Reset,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(*cmd, back);
    }
}

#[test]
fn test_event_serde() {
    let audio = [
        AudioEvent::Play(SoundId::Fire),
        AudioEvent::Stop(SoundId::ThemeLoop),
    ];
    for event in &audio {
        let json = serde_json::to_string(event).unwrap();
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(*event, back);
    }

    let intent = SpawnIntent::Asteroid {
        position: Vector2D::new(1.0, 2.0),
        velocity: Vector2D::new(-1.0, 0.5),
        size: AsteroidSize::Medium,
    };
    let json = serde_json::to_string(&intent).unwrap();
    let back: SpawnIntent = serde_json::from_str(&json).unwrap();
    assert_eq!(intent, back);
}

#[test]
fn test_default_snapshot_is_empty_and_active() {
    let snapshot = GameStateSnapshot::default();
    assert_eq!(snapshot.phase, GamePhase::Active);
    assert!(snapshot.message.is_empty());
    assert!(!snapshot.terminal);
    assert!(snapshot.ship().is_none());
    assert_eq!(snapshot.asteroid_count(), 0);
    assert_eq!(snapshot.bounds, Bounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.objects.len(), 0);
}
