//! Interaction sign per pair of particle kinds.

use super::particle::{KIND_COUNT, ParticleKind};

/// Symmetric attract/repel table over unordered kind pairs.
///
/// Pairs that were never marked repel, same-kind pairs included, attract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForceRule {
    repel: [[bool; KIND_COUNT]; KIND_COUNT],
}

impl Default for ForceRule {
    /// Green and blue repel each other; everything else attracts.
    fn default() -> Self {
        Self::attract_all().with_repel(ParticleKind::Green, ParticleKind::Blue)
    }
}

impl ForceRule {
    pub const fn attract_all() -> Self {
        Self {
            repel: [[false; KIND_COUNT]; KIND_COUNT],
        }
    }

    /// Mark the unordered pair `{a, b}` as repelling.
    pub fn with_repel(mut self, a: ParticleKind, b: ParticleKind) -> Self {
        self.repel[a.index()][b.index()] = true;
        self.repel[b.index()][a.index()] = true;
        self
    }

    #[inline(always)]
    pub fn should_repel(&self, a: ParticleKind, b: ParticleKind) -> bool {
        self.repel[a.index()][b.index()]
    }
}
