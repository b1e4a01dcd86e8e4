//! Build fully-initialized simulation scenarios.
//!
//! A `Scenario` is the runtime bundle consumed by the front-ends:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//!
//! Scenarios come from two places: the built-in presets holding the
//! original solar-system literals, or a YAML `ScenarioConfig`. Either way
//! the bundle is inserted into Bevy as a `Resource` and consumed by the
//! integration and rendering systems.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig, ViewConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::{Parameters, AU, G, MIN_SEPARATION, TIMESTEP};
use crate::simulation::states::{Body, NVec2, System};

use std::collections::VecDeque;

// Display palette, RGB.
pub const YELLOW: [u8; 3] = [255, 255, 0];
pub const BLUE: [u8; 3] = [100, 149, 237];
pub const RED: [u8; 3] = [188, 39, 50];
pub const DARK_GREY: [u8; 3] = [100, 98, 101];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const DARK_RED: [u8; 3] = [128, 0, 0];
pub const BROWN: [u8; 3] = [210, 105, 30];
pub const LIGHT_BLUE: [u8; 3] = [0, 191, 255];
pub const DARK_BLUE: [u8; 3] = [72, 61, 139];

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// This is the main "runtime bundle": engine settings, parameters, the
/// current system state, and the force law acting on it.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

/// Body starting on the x-axis with a purely tangential velocity, the way
/// every preset body is laid out.
fn planet(x_au: f64, y_vel: f64, radius: f64, color: [u8; 3], m: f64) -> Body {
    Body {
        x: NVec2::new(x_au * AU, 0.0),
        v: NVec2::new(0.0, y_vel),
        m,
        radius,
        color,
        anchor: false,
        distance_to_anchor: 0.0,
        trail: VecDeque::new(),
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                x: NVec2::new(bc.x[0], bc.x[1]),
                v: NVec2::new(bc.v[0], bc.v[1]),
                m: bc.m,
                radius: bc.radius,
                color: bc.color,
                anchor: bc.anchor,
                distance_to_anchor: 0.0,
                trail: VecDeque::new(),
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Parameters (runtime) from ParametersConfig, missing fields falling
        // back to the compiled-in constants
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            timestep: p_cfg.timestep.unwrap_or(TIMESTEP),
            g: p_cfg.g.unwrap_or(G),
            min_separation: p_cfg.min_separation.unwrap_or(MIN_SEPARATION),
            trail_limit: p_cfg.trail_limit,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            view: cfg.engine.view,
        };

        let gravity = NewtonianGravity {
            g: parameters.g,
            min_separation: parameters.min_separation,
        };

        Self {
            engine,
            parameters,
            system,
            gravity,
        }
    }

    /// Sun plus the four inner planets, the set the original demo animates.
    pub fn inner_planets() -> Self {
        let mut sun = planet(0.0, 0.0, 30.0, YELLOW, 1.98892e30);
        sun.anchor = true;

        let mercury = planet(0.387, -47_400.0, 8.0, DARK_GREY, 3.30e23);
        let venus = planet(0.723, -35_020.0, 14.0, WHITE, 4.8685e24);
        let earth = planet(-1.0, 29_783.0, 16.0, BLUE, 5.9742e24);
        let mars = planet(-1.524, 24_077.0, 12.0, RED, 6.39e23);

        Self::from_bodies(vec![sun, mercury, venus, earth, mars])
    }

    /// The inner set plus the four outer planets. With the default scale the
    /// outer orbits lie beyond the window edge; the physics does not care.
    pub fn solar_system() -> Self {
        let mut scenario = Self::inner_planets();

        let jupiter = planet(5.203, 13_100.0, 88.0, DARK_RED, 1.90e27);
        let saturn = planet(9.539, 9_700.0, 74.0, BROWN, 5.69e26);
        let uranus = planet(19.18, 6_800.0, 32.0, LIGHT_BLUE, 8.68e25);
        let neptune = planet(30.06, 5_400.0, 30.0, DARK_BLUE, 1.02e26);

        scenario
            .system
            .bodies
            .extend([jupiter, saturn, uranus, neptune]);
        scenario
    }

    fn from_bodies(bodies: Vec<Body>) -> Self {
        let parameters = Parameters::default();
        let gravity = NewtonianGravity {
            g: parameters.g,
            min_separation: parameters.min_separation,
        };
        Self {
            engine: Engine {
                view: ViewConfig::Orbits,
            },
            parameters,
            system: System { bodies, t: 0.0 },
            gravity,
        }
    }
}
