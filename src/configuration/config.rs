//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which presentation front-end to run
//! - [`ParametersConfig`] – optional overrides for the numerical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   view: "orbits"          # or "plain"
//!
//! parameters:
//!   timestep: 86400.0       # seconds advanced per frame (default: one day)
//!   trail_limit: 5000       # cap on stored trail points; omit for unbounded
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]       # position, meters
//!     v: [ 0.0, 0.0 ]       # velocity, meters/second
//!     m: 1.98892e30         # mass, kilograms
//!     radius: 30.0          # display radius, pixels
//!     color: [ 255, 255, 0 ]
//!     anchor: true
//!   - x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 100, 149, 237 ]
//! ```
//!
//! `engine`, `parameters`, and the per-body `color`/`anchor` fields may all
//! be omitted; missing numeric parameters fall back to the compiled-in
//! constants in `simulation::params`.

use serde::Deserialize;

/// Which presentation front-end consumes the simulation.
/// `view: "orbits"` or `view: "plain"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewConfig {
    #[serde(rename = "orbits")] // start menu, orbit trails, distance labels
    Orbits,

    #[serde(rename = "plain")] // circles only, simulation starts immediately
    Plain,
}

/// High-level engine configuration.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub view: ViewConfig, // presentation front-end for this scenario
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::Orbits,
        }
    }
}

/// Optional overrides for the numerical constants of a scenario.
/// Every field missing from the YAML keeps its compiled-in default.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ParametersConfig {
    pub timestep: Option<f64>, // step size, seconds
    pub g: Option<f64>, // gravitational constant
    pub min_separation: Option<f64>, // zero-distance clamp floor, meters
    pub trail_limit: Option<usize>, // trail cap; absent means unbounded
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y] in meters
    pub v: Vec<f64>, // initial velocity [vx, vy] in meters/second
    pub m: f64, // mass in kilograms
    pub radius: f64, // display radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3], // display color, RGB
    #[serde(default)]
    pub anchor: bool, // marks the gravitational anchor ("sun")
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // front-end selection
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical overrides
    pub bodies: Vec<BodyConfig>, // initial state of the system
}
