use crate::config::SimParams;
use crate::core::Particle;
use crate::math::Real;

/// Move by the current velocity, then damp it.
#[inline(always)]
pub fn integrate(particle: &mut Particle, damping: Real) {
    particle.position += particle.velocity;
    particle.velocity *= damping;
}

// Velocity is flipped once the particle is already past a wall, so it may
// overshoot by one tick.
#[inline(always)]
pub fn reflect_at_bounds(particle: &mut Particle, params: &SimParams) {
    let width = params.area_width as Real;
    if particle.position.x > width || particle.position.x < 0.0 {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y > params.floor_y() || particle.position.y < 0.0 {
        particle.velocity.y = -particle.velocity.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParticleKind;
    use bevy::math::Vec2;

    fn params() -> SimParams {
        SimParams::default().with_area(128, 128)
    }

    #[test]
    fn integrate_moves_then_damps() {
        let mut p = Particle::new(ParticleKind::Green, Vec2::new(10.0, 10.0))
            .with_velocity(Vec2::new(1.0, -2.0));
        integrate(&mut p, 0.99);
        assert_eq!(p.position, Vec2::new(11.0, 8.0));
        assert!((p.velocity - Vec2::new(0.99, -1.98)).length() < 1e-6);
    }

    #[test]
    fn reflects_past_right_wall() {
        let mut p = Particle::new(ParticleKind::Red, Vec2::new(129.0, 50.0))
            .with_velocity(Vec2::new(1.0, 0.5));
        reflect_at_bounds(&mut p, &params());
        assert_eq!(p.velocity, Vec2::new(-1.0, 0.5));
    }

    #[test]
    fn reflects_past_left_and_top_walls() {
        let mut p = Particle::new(ParticleKind::Red, Vec2::new(-0.5, -0.5))
            .with_velocity(Vec2::new(-1.0, -1.0));
        reflect_at_bounds(&mut p, &params());
        assert_eq!(p.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn bottom_wall_sits_one_diameter_above_area_edge() {
        let mut inside = Particle::new(ParticleKind::Blue, Vec2::new(50.0, 120.0))
            .with_velocity(Vec2::new(0.0, 1.0));
        reflect_at_bounds(&mut inside, &params());
        assert_eq!(inside.velocity.y, 1.0);

        let mut past = Particle::new(ParticleKind::Blue, Vec2::new(50.0, 120.5))
            .with_velocity(Vec2::new(0.0, 1.0));
        reflect_at_bounds(&mut past, &params());
        assert_eq!(past.velocity.y, -1.0);
    }

    #[test]
    fn inside_area_is_untouched() {
        let mut p = Particle::new(ParticleKind::Green, Vec2::new(64.0, 64.0))
            .with_velocity(Vec2::new(3.0, -3.0));
        reflect_at_bounds(&mut p, &params());
        assert_eq!(p.velocity, Vec2::new(3.0, -3.0));
    }
}
