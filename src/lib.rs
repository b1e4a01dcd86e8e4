pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, AU, G, TIMESTEP, MIN_SEPARATION};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{euler_step, update_position};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ViewConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::{orbit_view::run_orbits, plain_view::run_plain};

pub use benchmark::benchmark::{bench_attraction, bench_euler, bench_euler_curve};
