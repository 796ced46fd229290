//! Collision handling: wall containment and the three pairwise resolvers.

pub mod block_pair;
pub mod particle_block;
pub mod particle_pair;
pub mod response;
pub mod walls;

pub use block_pair::{collide_blocks, resolve_block_pairs, Axis};
pub use particle_block::{collide_particle_block, resolve_particle_blocks, BlockContact};
pub use particle_pair::{collide_particles, resolve_particle_pairs};
pub use walls::contain;

/// Two distinct mutable elements of a slice, `i < j`.
#[inline]
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
