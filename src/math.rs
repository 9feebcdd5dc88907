use bevy::math::{UVec2, Vec2};

pub type Real = f32;

pub type Vector = Vec2;
pub type BucketCoord = UVec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec2::ZERO
}

/// Linear bucket address, row-major: `y * count_x + x`.
#[inline(always)]
pub fn bucket_address_to_index(address: BucketCoord, count_x: u32) -> usize {
    address.y as usize * count_x as usize + address.x as usize
}

#[inline(always)]
pub fn bucket_index_to_address(index: usize, count_x: u32) -> BucketCoord {
    let count_x = count_x as usize;
    UVec2::new((index % count_x) as u32, (index / count_x) as u32)
}
