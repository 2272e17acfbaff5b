//! Fundamental geometric and simulation types.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D vector in screen space (pixels). x = right, y = down.
///
/// Used for positions, velocities and facing directions alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

/// Facing of a freshly spawned ship: straight up the screen.
pub const UP: Vector2D = Vector2D { x: 0.0, y: -1.0 };

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        DVec2::from(*self).length()
    }

    /// Rotate about the origin by `degrees`.
    ///
    /// Positive angles turn clockwise on screen (y grows downward).
    /// Rotation preserves magnitude.
    pub fn rotate(&self, degrees: f64) -> Self {
        DVec2::from_angle(degrees.to_radians())
            .rotate(DVec2::from(*self))
            .into()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Signed angle in degrees from this vector to `other`.
    ///
    /// Only used for sprite orientation; not normalized.
    pub fn angle_to(&self, other: &Vector2D) -> f64 {
        (other.y.atan2(other.x) - self.y.atan2(self.x)).to_degrees()
    }

    /// Wrap into `[0, width) x [0, height)` using a non-negative modulo.
    pub fn wrap(&self, bounds: &Bounds) -> Self {
        Self {
            x: wrap_component(self.x, bounds.width),
            y: wrap_component(self.y, bounds.height),
        }
    }
}

/// `rem_euclid` can round up to exactly `extent` for tiny negative inputs.
fn wrap_component(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Playfield rectangle, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half-open containment: `0 <= x < width && 0 <= y < height`.
    pub fn contains(&self, point: &Vector2D) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width * 0.5, self.height * 0.5)
    }

    /// Largest distance from `point` to any corner of the rectangle.
    pub fn farthest_corner_distance(&self, point: &Vector2D) -> f64 {
        [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(self.width, 0.0),
            Vector2D::new(0.0, self.height),
            Vector2D::new(self.width, self.height),
        ]
        .iter()
        .map(|corner| point.distance_to(corner))
        .fold(0.0, f64::max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_WIDTH,
            crate::constants::DEFAULT_HEIGHT,
        )
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds at the nominal frame rate.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the nominal tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
