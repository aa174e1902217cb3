//! 3D vector math and lattice-snapped points.
//!
//! `Vec3` uses `f32` throughout — the simulation operates at world scales of
//! tens of units where single precision is ample, and it halves the memory
//! footprint of the per-boid candidate buffers vs. `f64`.
//!
//! `CellPoint` is a 3D integer lattice coordinate.  Occupancy queries operate
//! on whole cells; `cell_center()` maps a cell back into continuous space.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Squared lengths below this are treated as zero when normalizing.
const EPSILON_SQ: f32 = 1e-12;

// ── Vec3 ──────────────────────────────────────────────────────────────────────

/// A 3D vector / point in continuous world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    #[inline(always)]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline(always)]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline(always)]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    #[inline(always)]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    #[inline(always)]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Normalize, returning the zero vector when the length is (near) zero.
    ///
    /// Zero-length inputs are a normal state here (e.g. the seek term when no
    /// target exists), so there is no panicking `normalize`.
    pub fn normalize_or_zero(self) -> Vec3 {
        let len_sq = self.length_squared();
        if len_sq > EPSILON_SQ {
            self * (1.0 / len_sq.sqrt())
        } else {
            Vec3::ZERO
        }
    }

    /// Round each component to the nearest integer, snapping to the lattice.
    #[inline]
    pub fn round_to_cell(self) -> CellPoint {
        CellPoint::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.z.round() as i32,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── CellPoint ─────────────────────────────────────────────────────────────────

/// A lattice-snapped 3D point: integer cell coordinates in world space.
///
/// Occupancy batches are expressed in cells so the evaluator can hash them
/// exactly; `Hash`/`Eq` make `CellPoint` usable as a set key directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPoint {
    pub const ORIGIN: CellPoint = CellPoint { x: 0, y: 0, z: 0 };

    #[inline(always)]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The continuous-space center of this cell: each axis offset by +0.5.
    #[inline]
    pub fn cell_center(self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}

impl fmt::Display for CellPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
