//! Three-component double-precision vector.
//!
//! `Vec3` is used both for displacements and, through the [`Point3`] alias,
//! for positions. Binary operators return new values; the compound
//! assignment operators (and their chaining `*_in_place` forms) mutate the
//! receiver. The arithmetic itself is carried out by `glam::DVec3`.
//!
//! # Contract violations
//!
//! Dividing by zero and normalizing a zero-length vector are caller errors.
//! The operator forms check them with `debug_assert!`, so debug builds panic
//! and release builds produce the raw IEEE result (`inf`/`NaN`). Indexing
//! with anything other than 0, 1 or 2 panics in every build. For a
//! recoverable error use [`Vec3::checked_div`], [`Vec3::try_unit_vector`],
//! [`Vec3::get`] or [`Vec3::get_mut`].

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{MathError, MathResult};

/// Absolute per-component tolerance used by [`Vec3::approx_eq`].
pub const EPSILON: f64 = 1e-10;

/// A 3D vector with `f64` components laid out as `[x, y, z]`.
///
/// `PartialEq` is exact. Geometry code should compare with
/// [`Vec3::approx_eq`], which is not transitive near the tolerance boundary:
/// `a ≈ b` and `b ≈ c` does not imply `a ≈ c`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3(DVec3);

/// A position in space. Same representation and operations as [`Vec3`].
pub type Point3 = Vec3;

impl Vec3 {
    /// The zero vector (also the origin when used as a [`Point3`]).
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// Unit vector along +X.
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Create a new vector from its three components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Get the x component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Get the y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Get the z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Returns component `i`, or `IndexOutOfRange` for `i > 2`.
    pub fn get(&self, i: usize) -> MathResult<f64> {
        match i {
            0 => Ok(self.0.x),
            1 => Ok(self.0.y),
            2 => Ok(self.0.z),
            _ => Err(MathError::IndexOutOfRange(i)),
        }
    }

    /// Mutable access to component `i`, or `IndexOutOfRange` for `i > 2`.
    pub fn get_mut(&mut self, i: usize) -> MathResult<&mut f64> {
        match i {
            0 => Ok(&mut self.0.x),
            1 => Ok(&mut self.0.y),
            2 => Ok(&mut self.0.z),
            _ => Err(MathError::IndexOutOfRange(i)),
        }
    }

    /// Sum of the squared components. Never negative.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    /// Euclidean length, `sqrt(length_squared())`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Scalar dot product.
    #[inline]
    pub fn dot(&self, other: Vec3) -> f64 {
        self.0.dot(other.0)
    }

    /// Right-handed cross product. `a.cross(b) == -b.cross(a)`.
    #[inline]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Self(self.0.cross(other.0))
    }

    /// Divide by the largest absolute component so the squared length
    /// neither overflows nor underflows. `None` for the zero vector.
    fn rescaled(&self) -> Option<DVec3> {
        let largest = self.0.abs().max_element();
        if largest == 0.0 {
            return None;
        }
        Some(self.0 / largest)
    }

    /// Returns `self / self.length()`.
    ///
    /// Accurate across the whole finite range, including components near
    /// `f64::MAX` or in the subnormal range. A zero-length vector is a
    /// contract violation: panics in debug builds, yields `NaN` components
    /// in release builds.
    pub fn unit_vector(&self) -> Vec3 {
        let scaled = self.rescaled();
        debug_assert!(scaled.is_some(), "cannot normalize a zero-length vector");
        let scaled = scaled.unwrap_or(DVec3::splat(f64::NAN));
        Self(scaled * (1.0 / scaled.length()))
    }

    /// Like [`Vec3::unit_vector`] but reports a zero length as an error.
    pub fn try_unit_vector(&self) -> MathResult<Vec3> {
        let scaled = self.rescaled().ok_or(MathError::ZeroLength)?;
        Ok(Self(scaled * (1.0 / scaled.length())))
    }

    /// Like `self / t` but reports a zero divisor as an error.
    pub fn checked_div(&self, t: f64) -> MathResult<Vec3> {
        if t == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(*self * (1.0 / t))
    }

    /// True when every component differs from `other`'s by strictly less
    /// than [`EPSILON`].
    pub fn approx_eq(&self, other: &Vec3) -> bool {
        (self.0 - other.0)
            .abs()
            .cmplt(DVec3::splat(EPSILON))
            .all()
    }

    /// True when no component is infinite or `NaN`.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Component-wise `self += v`, returning `self` for chaining.
    pub fn add_in_place(&mut self, v: Vec3) -> &mut Self {
        self.0 += v.0;
        self
    }

    /// Component-wise `self -= v`, returning `self` for chaining.
    pub fn sub_in_place(&mut self, v: Vec3) -> &mut Self {
        self.0 -= v.0;
        self
    }

    /// Uniform `self *= t`, returning `self` for chaining.
    pub fn scale_in_place(&mut self, t: f64) -> &mut Self {
        self.0 *= t;
        self
    }

    /// Multiplies by `1 / t`, returning `self` for chaining.
    /// `t == 0` panics in debug builds.
    pub fn div_in_place(&mut self, t: f64) -> &mut Self {
        debug_assert!(t != 0.0, "Vec3 division by zero");
        self.scale_in_place(1.0 / t)
    }
}

/// Scalar dot product `u · v`.
#[inline]
pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.dot(v)
}

/// Right-handed cross product `u × v`.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

/// `v` scaled to unit length. See [`Vec3::unit_vector`].
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.unit_vector()
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Self(-self.0)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(mut self, rhs: Vec3) -> Vec3 {
        self.add_in_place(rhs);
        self
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(mut self, rhs: Vec3) -> Vec3 {
        self.sub_in_place(rhs);
        self
    }
}

/// Component-wise (Hadamard) product, not the dot product.
impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(mut self, t: f64) -> Vec3 {
        self.scale_in_place(t);
        self
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(mut self, t: f64) -> Vec3 {
        self.div_in_place(t);
        self
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.sub_in_place(rhs);
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, t: f64) {
        self.scale_in_place(t);
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, t: f64) {
        self.div_in_place(t);
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.0.x,
            1 => &self.0.y,
            2 => &self.0.z,
            _ => panic!("{}", MathError::IndexOutOfRange(i)),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match self.get_mut(i) {
            Ok(c) => c,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Vec3 {
        iter.fold(Vec3::ZERO, |acc, v| acc + v)
    }
}

/// Renders as `"x y z"`.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0.x, self.0.y, self.0.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(e: [f64; 3]) -> Self {
        Self(DVec3::from_array(e))
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.0.to_array()
    }
}

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        v.0
    }
}
