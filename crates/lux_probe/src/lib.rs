//! Lux Probe - evaluate rays described in a JSON probe file.
//!
//! A probe file lists rays and the parameters to evaluate them at:
//!
//! ```json
//! {
//!   "normalize_directions": false,
//!   "rays": [
//!     { "name": "primary", "origin": [0, 0, 0], "direction": [1, 2, 3], "t": [0, 2] }
//!   ]
//! }
//! ```
//!
//! Every `(ray, t)` pair produces one [`ProbeSample`] whose position is
//! `ray.at(t)`.

use std::fs;
use std::io::Read;
use std::path::Path;

use lux_math::{MathError, Point3, Ray, Vec3};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading or evaluating a probe file.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid probe file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ray '{name}' has a degenerate direction: {source}")]
    DegenerateRay {
        name: String,
        #[source]
        source: MathError,
    },
}

pub type ProbeResult<T> = Result<T, ProbeError>;

fn default_params() -> Vec<f64> {
    vec![0.0, 1.0]
}

/// One ray entry in a probe file.
#[derive(Debug, Clone, Deserialize)]
pub struct RayProbe {
    /// Label used in output (defaults to the entry's index)
    #[serde(default)]
    pub name: Option<String>,

    pub origin: Point3,

    pub direction: Vec3,

    /// Parameters to evaluate at
    #[serde(default = "default_params")]
    pub t: Vec<f64>,
}

/// Top-level probe file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeConfig {
    /// Normalize each direction before evaluating
    #[serde(default)]
    pub normalize_directions: bool,

    #[serde(default)]
    pub rays: Vec<RayProbe>,
}

impl ProbeConfig {
    /// Parse a probe config from JSON text.
    pub fn from_json(text: &str) -> ProbeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a probe config from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> ProbeResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded {} rays from {}", config.rays.len(), path.display());
        Ok(config)
    }

    /// Read a probe config from any reader (stdin for the CLI).
    pub fn from_reader(mut reader: impl Read) -> ProbeResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json(&text)
    }
}

/// A single evaluated position.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSample {
    pub name: String,
    pub t: f64,
    pub position: Point3,
}

/// Build the rays described by `config`, in file order.
pub fn build_rays(config: &ProbeConfig) -> ProbeResult<Vec<(String, Ray)>> {
    config
        .rays
        .iter()
        .enumerate()
        .map(|(i, probe)| -> ProbeResult<(String, Ray)> {
            let name = probe.name.clone().unwrap_or_else(|| i.to_string());
            let direction = if config.normalize_directions {
                probe
                    .direction
                    .try_unit_vector()
                    .map_err(|source| ProbeError::DegenerateRay {
                        name: name.clone(),
                        source,
                    })?
            } else {
                if probe.direction == Vec3::ZERO {
                    log::warn!("Ray '{}' has a zero direction; every sample is its origin", name);
                }
                probe.direction
            };
            Ok((name, Ray::new(probe.origin, direction)))
        })
        .collect()
}

/// Evaluate every ray at each of its parameters.
pub fn evaluate(config: &ProbeConfig) -> ProbeResult<Vec<ProbeSample>> {
    let rays = build_rays(config)?;
    let mut samples = Vec::new();

    for ((name, ray), probe) in rays.into_iter().zip(&config.rays) {
        log::debug!(
            "Evaluating ray '{}' origin=({}) direction=({}) at {} parameters",
            name,
            ray.origin(),
            ray.direction(),
            probe.t.len()
        );
        for &t in &probe.t {
            samples.push(ProbeSample {
                name: name.clone(),
                t,
                position: ray.at(t),
            });
        }
    }

    Ok(samples)
}
