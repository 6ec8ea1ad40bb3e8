//! 2-D vector type and periodic unit-torus geometry.
//!
//! The simulation space is the unit square `[0, 1) × [0, 1)` with periodic
//! boundaries in both axes: leaving through one edge re-enters through the
//! opposite edge.  Every position stored in an agent must satisfy
//! `0.0 <= x < 1.0 && 0.0 <= y < 1.0`; [`wrap_point`] restores that after a
//! move.
//!
//! Distances are taken on the torus: the true separation of two points is the
//! minimum over the nine toroidal images of one of them.  For a unit torus
//! this equals the per-axis minimum-image displacement, which is what
//! [`torus_delta`] computes without enumerating the images.

use std::ops::{Add, AddAssign, Mul, Sub};

/// Side length of the periodic square.
pub const EXTENT: f64 = 1.0;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector of `f64` used for positions and velocities.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from the +x axis, scaled by
    /// `magnitude`.
    #[inline]
    pub fn from_angle(angle: f64, magnitude: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos * magnitude, y: sin * magnitude }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

// ── Torus helpers ─────────────────────────────────────────────────────────────

/// Wrap one coordinate into `[0, EXTENT)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `EXTENT`; that
/// case is folded back to `0.0` so the half-open bound always holds.
#[inline]
pub fn wrap_coord(v: f64) -> f64 {
    let w = v.rem_euclid(EXTENT);
    if w >= EXTENT { 0.0 } else { w }
}

/// Wrap both coordinates of `p` into the unit square.
#[inline]
pub fn wrap_point(p: Vec2) -> Vec2 {
    Vec2::new(wrap_coord(p.x), wrap_coord(p.y))
}

/// Shortest displacement from `from` to `to` on the torus.
///
/// Each component lies in `[-EXTENT/2, EXTENT/2]`.
#[inline]
pub fn torus_delta(from: Vec2, to: Vec2) -> Vec2 {
    Vec2::new(min_image(to.x - from.x), min_image(to.y - from.y))
}

/// Euclidean distance between `a` and `b` on the torus.
#[inline]
pub fn torus_distance(a: Vec2, b: Vec2) -> f64 {
    torus_delta(a, b).norm()
}

#[inline]
fn min_image(d: f64) -> f64 {
    d - EXTENT * (d / EXTENT).round()
}
