//! One simulation step over the whole grid.

use super::forces::accumulate_force;
use super::integrate::{integrate, reflect_at_bounds};
use crate::config::SimParams;
use crate::core::{ForceRule, Grid};

/// Counters from a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles advanced (each particle exactly once per step).
    pub advanced: usize,
    /// Particles that changed bucket.
    pub relocated: usize,
}

/// Advance every particle once, bucket by bucket in linear bucket order.
///
/// Forces only come from members of the same bucket. Membership is updated
/// right after each particle moves: a particle leaving the bucket stops being
/// a neighbor for the members processed after it, and one entering a later
/// bucket becomes a neighbor there. `tick` stamps advanced particles so a
/// particle that moves into a not-yet-processed bucket is not advanced twice.
pub fn step(grid: &mut Grid, rule: &ForceRule, params: &SimParams, tick: u64) -> TickStats {
    let mut stats = TickStats::default();

    for slot in 0..grid.bucket_count() {
        let mut cursor = 0;
        loop {
            let Some(&index) = grid.bucket_at(slot).get(cursor) else {
                break;
            };
            if grid.particles()[index].stepped_at == tick {
                cursor += 1;
                continue;
            }

            let force = accumulate_force(grid, grid.bucket_at(slot), index, rule, params);

            let particle = grid.particle_mut(index);
            particle.velocity += force;
            integrate(particle, params.velocity_damping);
            reflect_at_bounds(particle, params);
            particle.stepped_at = tick;
            let old_bucket = particle.bucket;
            stats.advanced += 1;

            // A departing particle is removed in place, so the next member
            // slides into `cursor`.
            if grid.relocate(index, old_bucket) {
                stats.relocated += 1;
            } else {
                cursor += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Particle, ParticleKind};
    use crate::error::Result;
    use bevy::math::{UVec2, Vec2};

    fn setup(params: &SimParams) -> Result<Grid> {
        Grid::new(
            UVec2::new(params.area_width, params.area_height),
            params.bucket_size,
        )
    }

    #[test]
    fn every_particle_advances_once() -> Result<()> {
        let params = SimParams::default().with_area(128, 128);
        let mut grid = setup(&params)?;
        for i in 0..10 {
            let position = Vec2::new(60.0 + i as f32 * 0.3, 10.0 + i as f32 * 11.0);
            grid.insert(Particle::new(ParticleKind::Red, position).with_velocity(Vec2::new(5.0, 0.0)));
        }

        let stats = step(&mut grid, &ForceRule::default(), &params, 1);
        assert_eq!(stats.advanced, 10);
        assert!(stats.relocated > 0);
        assert!(grid.membership_is_consistent());
        Ok(())
    }

    #[test]
    fn departure_does_not_skip_next_member() -> Result<()> {
        let params = SimParams::default().with_area(128, 128);
        let mut grid = setup(&params)?;
        // First member leaves bucket (0, 0) to the right; second stays.
        let leaving = grid.insert(
            Particle::new(ParticleKind::Red, Vec2::new(62.0, 10.0)).with_velocity(Vec2::new(4.0, 0.0)),
        );
        let staying = grid.insert(
            Particle::new(ParticleKind::Red, Vec2::new(10.0, 60.0)).with_velocity(Vec2::new(1.0, 0.0)),
        );

        let stats = step(&mut grid, &ForceRule::attract_all(), &params, 1);
        assert_eq!(stats.advanced, 2);
        assert_eq!(stats.relocated, 1);
        assert_eq!(grid.particles()[leaving].bucket(), UVec2::new(1, 0));
        assert!(grid.particles()[staying].position.x > 10.0);
        Ok(())
    }

    #[test]
    fn crossing_into_later_bucket_is_not_advanced_twice() -> Result<()> {
        let params = SimParams::default().with_area(128, 128);
        let mut grid = setup(&params)?;
        let index = grid.insert(
            Particle::new(ParticleKind::Green, Vec2::new(63.5, 10.0)).with_velocity(Vec2::new(1.0, 0.0)),
        );

        step(&mut grid, &ForceRule::default(), &params, 1);
        let particle = &grid.particles()[index];
        assert_eq!(particle.position, Vec2::new(64.5, 10.0));
        assert!((particle.velocity.x - 0.99).abs() < 1e-6);
        assert_eq!(particle.bucket(), UVec2::new(1, 0));
        Ok(())
    }
}
