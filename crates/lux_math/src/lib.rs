//! Lux Math - geometric primitives for the Lux renderer.
//!
//! Provides the double-precision [`Vec3`] (with its [`Point3`] alias) and
//! the parametric [`Ray`] that intersection, shading and camera code are
//! built on.
//!
//! # Example
//!
//! ```
//! use lux_math::{Point3, Ray, Vec3};
//!
//! let ray = Ray::new(Point3::ZERO, Vec3::new(1.0, 2.0, 3.0));
//! assert!(ray.at(2.0).approx_eq(&Point3::new(2.0, 4.0, 6.0)));
//! ```

mod error;
mod ray;
mod vec3;

pub use error::{MathError, MathResult};
pub use ray::Ray;
pub use vec3::{cross, dot, unit_vector, Point3, Vec3, EPSILON};
