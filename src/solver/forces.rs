//! Pairwise force law
//!
//! Inverse-square attraction/repulsion with a dead zone around each particle
//! and a hard cap on the magnitude.

use crate::config::SimParams;
use crate::core::{ForceRule, Grid};
use crate::math::{Real, Vector, zero_vector};

/// `gravity_constant / distance²`, clamped to `[0, max_force]`.
#[inline(always)]
pub fn force_magnitude(distance: Real, params: &SimParams) -> Real {
    // max/min instead of clamp: never panics on odd parameters.
    (params.gravity_constant / (distance * distance))
        .max(0.0)
        .min(params.max_force)
}

/// Force exerted on a particle at `from` by one at `to`.
///
/// Zero inside the dead zone (`distance <= ignore_radius`), otherwise directed
/// towards `to` for attracting pairs and away from it for repelling ones.
#[inline(always)]
pub fn pair_force(from: Vector, to: Vector, repel: bool, params: &SimParams) -> Vector {
    let offset = to - from;
    let distance = offset.length();
    if distance <= params.ignore_radius {
        return zero_vector();
    }

    let force = offset / distance * force_magnitude(distance, params);
    if repel { -force } else { force }
}

/// Net force on particle `index` from the other members of its bucket.
pub fn accumulate_force(
    grid: &Grid,
    members: &[usize],
    index: usize,
    rule: &ForceRule,
    params: &SimParams,
) -> Vector {
    let particles = grid.particles();
    let particle = &particles[index];

    members
        .iter()
        .filter(|&&other| other != index)
        .map(|&other| {
            let neighbor = &particles[other];
            let repel = rule.should_repel(particle.kind(), neighbor.kind());
            pair_force(particle.position, neighbor.position, repel, params)
        })
        .fold(zero_vector(), |acc, force| acc + force)
}
