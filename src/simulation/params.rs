//! Physical constants and runtime parameters.
//!
//! The constants are the startup literals of the simulation; `Parameters`
//! carries the runtime copies so a scenario file can override them for toy
//! systems. The built-in presets always use the literals.

/// Astronomical unit in meters.
pub const AU: f64 = 1.496e11;

/// Gravitational constant, m^3 kg^-1 s^-2.
pub const G: f64 = 6.67428e-11;

/// Simulated seconds advanced per rendered frame (one day). Physics time is
/// decoupled from wall-clock time: perceived speed follows the frame rate.
pub const TIMESTEP: f64 = 86_400.0;

/// Floor for the separation used in the force law, meters. Two coincident
/// bodies attract as if this far apart instead of dividing by zero.
pub const MIN_SEPARATION: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub timestep: f64, // step size, seconds
    pub g: f64, // gravitational constant
    pub min_separation: f64, // zero-distance clamp floor, meters
    pub trail_limit: Option<usize>, // max trail entries; None keeps everything
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            g: G,
            min_separation: MIN_SEPARATION,
            trail_limit: None,
        }
    }
}
