use std::time::Duration;

use bevy::prelude::*;

use super::constants;
use crate::error::{Error, Result};
use crate::math::Real;

/// Startup parameters for a particle-life run.
///
/// Every value is fixed once the simulation is initialized; the solver reads
/// them on every tick but never writes them.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimParams {
    /// Width of the simulation area. Particles are reflected back past `x > area_width`.
    pub area_width: u32,
    /// Height of the simulation area.
    pub area_height: u32,
    /// Side length of a square bucket. Bucket counts are `area / bucket_size`, floored.
    pub bucket_size: u32,
    /// Number of particles placed by `Simulation::initialize`.
    pub particle_count: usize,

    /// Numerator of the inverse-square force law.
    pub gravity_constant: Real,
    /// Hard cap on the magnitude of a single pair force.
    pub max_force: Real,
    /// Pairs at or below this distance exert no force on each other.
    pub ignore_radius: Real,
    /// Visual radius; also shrinks the bottom wall by one diameter.
    pub particle_radius: Real,
    /// Velocity multiplier applied once per tick.
    pub velocity_damping: Real,

    /// Period of the fixed-rate driver.
    pub tick_period: Duration,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            area_width: constants::AREA_WIDTH,
            area_height: constants::AREA_HEIGHT,
            bucket_size: constants::BUCKET_SIZE,
            particle_count: constants::PARTICLE_START_COUNT,
            gravity_constant: constants::GRAVITY_CONSTANT,
            max_force: constants::MAX_FORCE,
            ignore_radius: constants::IGNORE_RADIUS,
            particle_radius: constants::PARTICLE_RADIUS,
            velocity_damping: constants::VELOCITY_DAMPING,
            tick_period: constants::TICK_PERIOD,
        }
    }
}

impl SimParams {
    /// Set the area size
    pub fn with_area(mut self, width: u32, height: u32) -> Self {
        self.area_width = width;
        self.area_height = height;
        self
    }

    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_gravity_constant(mut self, gravity_constant: Real) -> Self {
        self.gravity_constant = gravity_constant;
        self
    }

    pub fn with_max_force(mut self, max_force: Real) -> Self {
        self.max_force = max_force;
        self
    }

    pub fn with_ignore_radius(mut self, ignore_radius: Real) -> Self {
        self.ignore_radius = ignore_radius;
        self
    }

    pub fn with_particle_radius(mut self, particle_radius: Real) -> Self {
        self.particle_radius = particle_radius;
        self
    }

    pub fn with_velocity_damping(mut self, velocity_damping: Real) -> Self {
        self.velocity_damping = velocity_damping;
        self
    }

    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Area size as a vector, in simulation units.
    #[inline]
    pub fn area(&self) -> Vec2 {
        Vec2::new(self.area_width as Real, self.area_height as Real)
    }

    /// Lowest y a particle may reach before bouncing off the bottom wall.
    #[inline]
    pub fn floor_y(&self) -> Real {
        self.area_height as Real - 2.0 * self.particle_radius
    }

    /// Reject parameters that would produce an empty or inconsistent grid.
    ///
    /// Errors:
    /// - `Error::InvalidConfig` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_size == 0 {
            return Err(Error::config("bucket_size must be > 0"));
        }
        if self.area_width == 0 || self.area_height == 0 {
            return Err(Error::config(format!(
                "area must be positive, got {}x{}",
                self.area_width, self.area_height
            )));
        }
        if self.area_width < self.bucket_size || self.area_height < self.bucket_size {
            return Err(Error::config(format!(
                "area {}x{} is smaller than one bucket of size {}",
                self.area_width, self.area_height, self.bucket_size
            )));
        }
        if !self.gravity_constant.is_finite() {
            return Err(Error::config("gravity_constant must be finite"));
        }
        if !self.max_force.is_finite() || self.max_force < 0.0 {
            return Err(Error::config("max_force must be finite and >= 0"));
        }
        if !self.ignore_radius.is_finite() || self.ignore_radius < 0.0 {
            return Err(Error::config("ignore_radius must be finite and >= 0"));
        }
        if !self.particle_radius.is_finite() || self.particle_radius < 0.0 {
            return Err(Error::config("particle_radius must be finite and >= 0"));
        }
        if !(0.0..=1.0).contains(&self.velocity_damping) {
            return Err(Error::config("velocity_damping must be within [0, 1]"));
        }
        if self.tick_period.is_zero() {
            return Err(Error::config("tick_period must be > 0"));
        }
        Ok(())
    }
}
