//! High-level runtime engine settings.
//!
//! Selects which presentation front-end consumes the simulation when a
//! `Scenario` is run.

use crate::configuration::config::ViewConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub view: ViewConfig, // orbits (menu/trails/labels) or plain (circles only)
}
