use crate::{
    collision::pair_mut,
    core::{Block, Body},
};

/// Axis a block-block contact was resolved along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Separates two overlapping blocks along their shallowest axis.
///
/// Each block moves half the penetration depth away from the other and both
/// reflect their velocity on that axis. Only one axis is resolved per call;
/// ties go to `Y`. Returns the resolved axis, or `None` when the boxes do not
/// touch.
pub fn collide_blocks(a: &mut Block, b: &mut Block) -> Option<Axis> {
    let box_a = a.aabb();
    let box_b = b.aabb();
    if !box_a.intersects(&box_b) {
        return None;
    }

    let depth = box_a.penetration(&box_b);
    let axis = if depth.x < depth.y { Axis::X } else { Axis::Y };
    let k = axis.index();
    let half = depth[k] * 0.5;

    if box_a.center()[k] < box_b.center()[k] {
        a.position[k] -= half;
        b.position[k] += half;
    } else {
        a.position[k] += half;
        b.position[k] -= half;
    }
    a.velocity[k] = -a.velocity[k];
    b.velocity[k] = -b.velocity[k];
    Some(axis)
}

/// Visits every block pair `i < j` in index order.
pub fn resolve_block_pairs(blocks: &mut [Block]) -> usize {
    let mut resolved = 0;
    for i in 0..blocks.len() {
        for j in (i + 1)..blocks.len() {
            let (a, b) = pair_mut(blocks, i, j);
            if collide_blocks(a, b).is_some() {
                resolved += 1;
            }
        }
    }
    resolved
}
