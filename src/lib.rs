use std::time::Duration;

use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod solver;
pub mod view;

// Public re-exports for clean API
pub use crate::config::SimParams;
pub use crate::core::{ForceRule, Grid, Particle, ParticleKind, Simulation};
pub use crate::error::{Error, Result};
pub use crate::solver::TickStats;

/// Runs one simulation tick per `FixedUpdate`, at `tick_period`.
///
/// Expects a `Simulation` resource to be inserted before the app runs.
pub struct SimulationPlugin {
    pub tick_period: Duration,
}

impl SimulationPlugin {
    pub fn new(tick_period: Duration) -> Self {
        Self { tick_period }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_duration(self.tick_period))
            .add_systems(FixedUpdate, tick_simulation);
    }
}

pub fn tick_simulation(mut sim: ResMut<Simulation>) {
    sim.tick();
}
