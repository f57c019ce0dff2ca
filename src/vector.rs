//! `f64` vectors in two and three dimensions.
//!
//! Both types are plain `Copy` values. Binary operators return new values and
//! never touch their operands; the `*Assign` operators and the `*_self`
//! methods mutate the receiver in place.
//!
//! Scaling and the dot product are kept apart: `v * s` (or [`Vector3::scale`])
//! scales by a scalar, while [`Vector3::dot`] is the only way to take a dot
//! product.
//!
//! Normalizing a zero vector is not guarded: [`Vector3::normalize`] divides by
//! a zero magnitude and the components come out as `NaN`, following IEEE-754.
//! Use [`Vector3::try_normalize`] to get [`Error::DegenerateOperation`]
//! instead.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{DVec2, DVec3};
use rand::Rng;

use crate::error::{Error, Result};

/// A 2D vector of `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Samples a vector whose components are uniform in
    /// `[-half_range, half_range]`.
    ///
    /// ### Panics
    /// Panics if `half_range` is negative or not finite.
    pub fn random_in_square(half_range: f64, rng: &mut impl Rng) -> Self {
        let x = rng.random_range(-half_range..=half_range);
        let y = rng.random_range(-half_range..=half_range);
        Self::new(x, y)
    }

    /// Euclidean length. Exactly `0.0` for the zero vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        (self.x * self.x) + (self.y * self.y)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// The zero vector yields `NaN` components.
    pub fn normalize(self) -> Self {
        let m = 1.0 / self.magnitude();
        Self::new(self.x * m, self.y * m)
    }

    /// In-place [`Vector2::normalize`].
    pub fn normalize_self(&mut self) {
        let m = 1.0 / self.magnitude();
        self.x *= m;
        self.y *= m;
    }

    /// Like [`Vector2::normalize`], but fails with
    /// [`Error::DegenerateOperation`] when the magnitude is zero or not finite.
    pub fn try_normalize(self) -> Result<Self> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return Err(Error::DegenerateOperation);
        }
        Ok(self * (1.0 / mag))
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn scale_self(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
    }

    /// Sum of per-axis products.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Returns `true` if every component differs by at most `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_self(rhs);
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

/// A 3D vector of `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Samples a vector whose components are uniform in
    /// `[-half_range, half_range]`.
    ///
    /// ### Panics
    /// Panics if `half_range` is negative or not finite.
    pub fn random_in_cube(half_range: f64, rng: &mut impl Rng) -> Self {
        let x = rng.random_range(-half_range..=half_range);
        let y = rng.random_range(-half_range..=half_range);
        let z = rng.random_range(-half_range..=half_range);
        Self::new(x, y, z)
    }

    /// Euclidean length. Exactly `0.0` for the zero vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// The zero vector yields `NaN` components.
    pub fn normalize(self) -> Self {
        let m = 1.0 / self.magnitude();
        Self::new(self.x * m, self.y * m, self.z * m)
    }

    /// In-place [`Vector3::normalize`].
    pub fn normalize_self(&mut self) {
        let m = 1.0 / self.magnitude();
        self.x *= m;
        self.y *= m;
        self.z *= m;
    }

    /// Like [`Vector3::normalize`], but fails with
    /// [`Error::DegenerateOperation`] when the magnitude is zero or not finite.
    pub fn try_normalize(self) -> Result<Self> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return Err(Error::DegenerateOperation);
        }
        Ok(self * (1.0 / mag))
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn scale_self(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }

    /// Sum of per-axis products.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            (self.y * other.z) - (self.z * other.y),
            (self.z * other.x) - (self.x * other.z),
            (self.x * other.y) - (self.y * other.x),
        )
    }

    /// Replaces `self` with `self × other`.
    pub fn cross_self(&mut self, other: Self) {
        *self = self.cross(other);
    }

    /// Returns `true` if every component differs by at most `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_self(rhs);
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}
