pub mod force_rule;
pub mod grid;
pub mod particle;
pub mod simulation;

pub use force_rule::ForceRule;
pub use grid::Grid;
pub use particle::{KIND_COUNT, Particle, ParticleKind};
pub use simulation::Simulation;
