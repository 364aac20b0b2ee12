use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Point3, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// Rays represent the half-line starting at `origin` and traveling along
/// `direction`. The direction is not required to be normalized. A ray is
/// immutable once built; construct a new one to change either part.
///
/// `PartialEq` is exact. Use [`Ray::approx_eq`] for the tolerance-based
/// comparison. Neither treats rays along the same line with rescaled or
/// flipped directions as equal.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction. Any `t` is accepted, including
    /// negative values behind the origin.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// True when both origins and both directions are
    /// [`Vec3::approx_eq`].
    pub fn approx_eq(&self, other: &Ray) -> bool {
        self.origin.approx_eq(&other.origin) && self.direction.approx_eq(&other.direction)
    }
}
