use std::time::Instant;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimParams;
use crate::error::Result;
use crate::math::{Real, Vector};
use crate::solver::{TickStats, step};

use super::force_rule::ForceRule;
use super::grid::Grid;
use super::particle::{Particle, ParticleKind};

/// Aggregate simulation state: particle grid, parameters and interaction table.
///
/// Owned by the bevy world as a resource; the tick system is its only writer.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    params: SimParams,
    rule: ForceRule,
    ticks: u64,
}

impl Simulation {
    /// Validate `params` and build a grid with no particles.
    pub fn empty(params: SimParams) -> Result<Self> {
        params.validate()?;
        let grid = Grid::new(
            UVec2::new(params.area_width, params.area_height),
            params.bucket_size,
        )?;
        Ok(Self {
            grid,
            params,
            rule: ForceRule::default(),
            ticks: 0,
        })
    }

    /// Build the grid and scatter `params.particle_count` particles over the area.
    ///
    /// Positions are whole units in `[0, width) x [0, height)`, kinds are
    /// uniform, and each velocity component is 0 or 1. All draws come from one
    /// generator seeded with `seed`, so equal seeds give equal runs.
    ///
    /// Errors:
    /// - `Error::InvalidConfig` if `params` fails validation.
    pub fn initialize(params: SimParams, seed: u64) -> Result<Self> {
        let mut sim = Self::empty(params)?;
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..sim.params.particle_count {
            let particle = random_particle(&mut rng, &sim.params);
            sim.grid.insert(particle);
        }

        info!(
            "initialized {} particles in {}x{} buckets of size {}",
            sim.grid.len(),
            sim.grid.dims().x,
            sim.grid.dims().y,
            sim.params.bucket_size
        );
        Ok(sim)
    }

    pub fn with_rule(mut self, rule: ForceRule) -> Self {
        self.rule = rule;
        self
    }

    /// Add a particle at an explicit position and velocity; returns its index.
    pub fn spawn(&mut self, kind: ParticleKind, position: Vector, velocity: Vector) -> usize {
        self.grid
            .insert(Particle::new(kind, position).with_velocity(velocity))
    }

    /// Advance the whole field by one step.
    pub fn tick(&mut self) -> TickStats {
        let start = Instant::now();
        self.ticks += 1;
        let stats = step(&mut self.grid, &self.rule, &self.params, self.ticks);
        debug_assert!(self.grid.membership_is_consistent());

        let elapsed = start.elapsed().as_secs_f32() * 1000.0;
        debug!(
            "tick {}: {:.3}ms, advanced={} relocated={}",
            self.ticks, elapsed, stats.advanced, stats.relocated
        );
        stats
    }

    /// Visit every particle's kind and position, in index order.
    pub fn for_each_particle<F>(&self, mut visitor: F)
    where
        F: FnMut(ParticleKind, Vector),
    {
        for particle in self.grid.particles() {
            visitor(particle.kind(), particle.position);
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn particles(&self) -> &[Particle] {
        self.grid.particles()
    }

    pub fn particle_count(&self) -> usize {
        self.grid.len()
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn rule(&self) -> &ForceRule {
        &self.rule
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

fn random_particle<R: Rng + ?Sized>(rng: &mut R, params: &SimParams) -> Particle {
    let kind = ParticleKind::random(rng);
    let position = Vec2::new(
        rng.random_range(0..params.area_width) as Real,
        rng.random_range(0..params.area_height) as Real,
    );
    let velocity = Vec2::new(
        rng.random_range(0..2u8) as Real,
        rng.random_range(0..2u8) as Real,
    );
    Particle::new(kind, position).with_velocity(velocity)
}
