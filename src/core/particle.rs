//! Particles and particle kinds
//!
//! A particle carries its kind, position, velocity and the bucket it is
//! currently filed under.

use bevy::color::Color;
use rand::Rng;

use crate::math::{BucketCoord, Vector, zero_vector};

/// Number of particle kinds.
pub const KIND_COUNT: usize = 3;

/// Particle kind: decides the display color and, through `ForceRule`, whether
/// a pair attracts or repels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Green,
    Red,
    Blue,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; KIND_COUNT] =
        [ParticleKind::Green, ParticleKind::Red, ParticleKind::Blue];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn color(self) -> Color {
        match self {
            ParticleKind::Green => Color::srgb_u8(128, 255, 128),
            ParticleKind::Red => Color::srgb_u8(255, 128, 128),
            ParticleKind::Blue => Color::srgb_u8(128, 128, 255),
        }
    }

    /// Uniformly random kind.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..KIND_COUNT)]
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    kind: ParticleKind,
    pub position: Vector,
    pub velocity: Vector,
    // Owned by the grid: only `Grid::insert` and `Grid::relocate` write it.
    pub(crate) bucket: BucketCoord,
    // Last tick that advanced this particle.
    pub(crate) stepped_at: u64,
}

impl Particle {
    pub fn new(kind: ParticleKind, position: Vector) -> Self {
        Self {
            kind,
            position,
            velocity: zero_vector(),
            bucket: BucketCoord::ZERO,
            stepped_at: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline(always)]
    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    /// Bucket the particle is currently filed under.
    #[inline(always)]
    pub fn bucket(&self) -> BucketCoord {
        self.bucket
    }

    #[inline(always)]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
