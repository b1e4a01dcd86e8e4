//! Core state types for the orbit simulation.
//!
//! Defines the body/system structs:
//! - `Body`   one celestial body: position/velocity/mass in SI units plus
//!   its display attributes and orbit trail
//! - `System` the list of bodies and the current simulation time `t`
//!
//! These are plain data. The force law lives in `forces`, the update step
//! in `integrator`.

use nalgebra::Vector2;
use std::collections::VecDeque;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, meters/second
    pub m: f64, // mass, kilograms
    pub radius: f64, // display radius, pixels (never enters the physics)
    pub color: [u8; 3], // display color, RGB
    pub anchor: bool, // gravitational anchor ("sun") for the distance readout
    pub distance_to_anchor: f64, // meters; refreshed while summing forces
    pub trail: VecDeque<NVec2>, // past positions, oldest first
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, updated in index order
    pub t: f64, // simulated time, seconds
}
