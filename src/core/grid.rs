//! Bucket grid over the simulation area
//!
//! The grid owns every particle in a flat arena. Buckets only hold arena
//! indices, so moving a particle between buckets never moves the particle.

use bevy::prelude::*;

use super::particle::Particle;
use crate::error::{Error, Result};
use crate::math::{BucketCoord, Real, Vector, bucket_address_to_index, bucket_index_to_address};

#[derive(Clone, Debug)]
pub struct Grid {
    bucket_size: Real,
    dims: BucketCoord,
    particles: Vec<Particle>,
    buckets: Vec<Vec<usize>>,
}

impl Grid {
    /// Build an empty grid of `area / bucket_size` buckets per axis (floored).
    ///
    /// Errors:
    /// - `Error::InvalidConfig` if the bucket size is zero or either axis holds no whole bucket.
    pub fn new(area: UVec2, bucket_size: u32) -> Result<Self> {
        if bucket_size == 0 {
            return Err(Error::config("bucket_size must be > 0"));
        }
        let dims = area / bucket_size;
        if dims.x == 0 || dims.y == 0 {
            return Err(Error::config(format!(
                "area {}x{} holds no whole bucket of size {}",
                area.x, area.y, bucket_size
            )));
        }
        let bucket_count = dims.x as usize * dims.y as usize;
        Ok(Self {
            bucket_size: bucket_size as Real,
            dims,
            particles: Vec::new(),
            buckets: vec![Vec::new(); bucket_count],
        })
    }

    /// Bucket containing `position`, clamped into the grid.
    ///
    /// Positions outside the area land in the nearest boundary bucket; NaN
    /// components land in column/row 0.
    #[inline]
    pub fn cell_of(&self, position: Vector) -> BucketCoord {
        let max = (self.dims - UVec2::ONE).as_vec2();
        let scaled = (position / self.bucket_size).floor();
        // `max`/`min` rather than `clamp`: they pass NaN through instead of panicking,
        // and the saturating cast turns NaN into 0.
        UVec2::new(
            scaled.x.max(0.0).min(max.x) as u32,
            scaled.y.max(0.0).min(max.y) as u32,
        )
    }

    /// File a new particle under the bucket of its position and return its index.
    pub fn insert(&mut self, mut particle: Particle) -> usize {
        let bucket = self.cell_of(particle.position);
        particle.bucket = bucket;
        let index = self.particles.len();
        self.particles.push(particle);
        let slot = self.slot(bucket);
        self.buckets[slot].push(index);
        index
    }

    /// Move particle `index` out of `old_bucket` if its position now maps elsewhere.
    ///
    /// Returns `true` when membership changed. Removal is a linear scan of the
    /// old bucket that keeps the order of the remaining members.
    pub fn relocate(&mut self, index: usize, old_bucket: BucketCoord) -> bool {
        let new_bucket = self.cell_of(self.particles[index].position);
        if new_bucket == old_bucket {
            return false;
        }

        let old_slot = self.slot(old_bucket);
        if let Some(pos) = self.buckets[old_slot].iter().position(|&i| i == index) {
            self.buckets[old_slot].remove(pos);
        }
        let new_slot = self.slot(new_bucket);
        self.buckets[new_slot].push(index);
        self.particles[index].bucket = new_bucket;
        true
    }

    #[inline(always)]
    fn slot(&self, bucket: BucketCoord) -> usize {
        bucket_address_to_index(bucket, self.dims.x)
    }

    /// Bucket counts per axis.
    #[inline(always)]
    pub fn dims(&self) -> BucketCoord {
        self.dims
    }

    #[inline(always)]
    pub fn bucket_size(&self) -> Real {
        self.bucket_size
    }

    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Members of the bucket at `coord`; empty for coordinates outside the grid.
    pub fn bucket(&self, coord: BucketCoord) -> &[usize] {
        if coord.x >= self.dims.x || coord.y >= self.dims.y {
            return &[];
        }
        &self.buckets[self.slot(coord)]
    }

    /// Members of the bucket at linear index `slot`.
    #[inline(always)]
    pub(crate) fn bucket_at(&self, slot: usize) -> &[usize] {
        &self.buckets[slot]
    }

    /// Iterator over (bucket coordinate, members)
    pub fn iter_buckets(&self) -> impl Iterator<Item = (BucketCoord, &[usize])> {
        let count_x = self.dims.x;
        self.buckets
            .iter()
            .enumerate()
            .map(move |(slot, members)| (bucket_index_to_address(slot, count_x), members.as_slice()))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub(crate) fn particle_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Every particle is listed in exactly one bucket, the one its stored
    /// bucket coordinate names, and that coordinate matches its position.
    pub fn membership_is_consistent(&self) -> bool {
        let mut seen = vec![0u32; self.particles.len()];
        for (coord, members) in self.iter_buckets() {
            for &index in members {
                let Some(particle) = self.particles.get(index) else {
                    return false;
                };
                if particle.bucket != coord {
                    return false;
                }
                seen[index] += 1;
            }
        }

        seen.iter().all(|&count| count == 1)
            && self
                .particles
                .iter()
                .all(|p| self.cell_of(p.position) == p.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particle::ParticleKind;

    fn grid_128() -> Grid {
        match Grid::new(UVec2::new(128, 128), 64) {
            Ok(grid) => grid,
            Err(e) => panic!("grid setup failed: {e}"),
        }
    }

    #[test]
    fn dims_are_floored() -> Result<()> {
        let grid = Grid::new(UVec2::new(1280, 720), 64)?;
        assert_eq!(grid.dims(), UVec2::new(20, 11));
        assert_eq!(grid.bucket_count(), 220);
        Ok(())
    }

    #[test]
    fn zero_bucket_size_rejected() {
        assert!(Grid::new(UVec2::new(128, 128), 0).is_err());
    }

    #[test]
    fn area_smaller_than_bucket_rejected() {
        let err = Grid::new(UVec2::new(32, 128), 64).unwrap_err();
        assert!(err.to_string().contains("no whole bucket"));
    }

    #[test]
    fn cell_of_clamps_out_of_range_positions() {
        let grid = grid_128();
        assert_eq!(grid.cell_of(Vec2::new(10.0, 70.0)), UVec2::new(0, 1));
        assert_eq!(grid.cell_of(Vec2::new(-5.0, -0.5)), UVec2::new(0, 0));
        assert_eq!(grid.cell_of(Vec2::new(129.0, 500.0)), UVec2::new(1, 1));
        assert_eq!(grid.cell_of(Vec2::new(128.0, 63.999)), UVec2::new(1, 0));
        assert_eq!(grid.cell_of(Vec2::new(f32::NAN, f32::INFINITY)), UVec2::new(0, 1));
    }

    #[test]
    fn insert_files_particle_under_its_bucket() {
        let mut grid = grid_128();
        let index = grid.insert(Particle::new(ParticleKind::Green, Vec2::new(100.0, 10.0)));
        assert_eq!(index, 0);
        assert_eq!(grid.particles()[0].bucket(), UVec2::new(1, 0));
        assert_eq!(grid.bucket(UVec2::new(1, 0)), &[0]);
        assert!(grid.membership_is_consistent());
    }

    #[test]
    fn relocate_is_noop_within_bucket() {
        let mut grid = grid_128();
        let index = grid.insert(Particle::new(ParticleKind::Red, Vec2::new(10.0, 10.0)));
        grid.particle_mut(index).position = Vec2::new(50.0, 50.0);
        assert!(!grid.relocate(index, UVec2::ZERO));
        assert_eq!(grid.bucket(UVec2::ZERO), &[0]);
    }

    #[test]
    fn relocate_moves_between_buckets_and_keeps_order() {
        let mut grid = grid_128();
        for x in [10.0, 20.0, 30.0] {
            grid.insert(Particle::new(ParticleKind::Blue, Vec2::new(x, 10.0)));
        }
        grid.particle_mut(1).position = Vec2::new(10.0, 100.0);
        assert!(grid.relocate(1, UVec2::ZERO));

        assert_eq!(grid.bucket(UVec2::ZERO), &[0, 2]);
        assert_eq!(grid.bucket(UVec2::new(0, 1)), &[1]);
        assert_eq!(grid.particles()[1].bucket(), UVec2::new(0, 1));
        assert!(grid.membership_is_consistent());
    }

    #[test]
    fn stale_bucket_breaks_consistency() {
        let mut grid = grid_128();
        let index = grid.insert(Particle::new(ParticleKind::Red, Vec2::new(10.0, 10.0)));
        grid.particle_mut(index).position = Vec2::new(100.0, 100.0);
        assert!(!grid.membership_is_consistent());
        grid.relocate(index, UVec2::ZERO);
        assert!(grid.membership_is_consistent());
    }

    #[test]
    fn bucket_outside_grid_is_empty() {
        let grid = grid_128();
        assert!(grid.bucket(UVec2::new(5, 0)).is_empty());
    }
}
