//! Scene layout and per-frame animation.
//!
//! DESIGN
//! ======
//! Block tilt and scene yaw are pure functions of the clock, so any frame can
//! be reproduced from a timestamp. Node drift accumulates per frame and is the
//! only history-dependent state.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    BLOCK_BASE_Y, BLOCK_COLORS, BLOCK_COUNT, BLOCK_SIZE, BLOCK_SPACING, BLOCK_SWAY, BLOCK_SWAY_STEP, NODE_BOX,
    NODE_COUNT, NODE_DRIFT, PHASE_RATE, WOBBLE_AMPLITUDE, WOBBLE_STEP_X, WOBBLE_STEP_Y, YAW_RATE,
};
use crate::geometry::Vec3;

/// Corner indices for the six faces of a box, as produced by [`Block::corners`].
pub const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [4, 5, 7, 6],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 2, 6, 4],
    [1, 3, 7, 5],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub center: Vec3,
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub color_index: usize,
}

impl Block {
    /// Resting position of block `index` in the stack.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn at_rest(index: usize) -> Self {
        let i = index as f64;
        Self {
            center: Vec3::new(
                (i * BLOCK_SWAY_STEP).sin() * BLOCK_SWAY,
                i * BLOCK_SPACING + BLOCK_BASE_Y,
                (i * BLOCK_SWAY_STEP).cos() * BLOCK_SWAY,
            ),
            tilt_x: 0.0,
            tilt_y: 0.0,
            color_index: index % BLOCK_COLORS.len(),
        }
    }

    /// The eight corners in scene space (before the whole-scene yaw).
    ///
    /// Bit 0 of the index selects +x, bit 1 +y, bit 2 +z.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (hx, hy, hz) = (BLOCK_SIZE.0 * 0.5, BLOCK_SIZE.1 * 0.5, BLOCK_SIZE.2 * 0.5);
        std::array::from_fn(|i| {
            let local = Vec3::new(
                if i & 1 == 0 { -hx } else { hx },
                if i & 2 == 0 { -hy } else { hy },
                if i & 4 == 0 { -hz } else { hz },
            );
            local.rotate_y(self.tilt_y).rotate_x(self.tilt_x).add(self.center)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneModel {
    pub blocks: Vec<Block>,
    pub nodes: Vec<Vec3>,
    /// Whole-scene rotation about the vertical axis, in radians.
    pub yaw: f64,
}

impl SceneModel {
    /// Build the fixed block stack and scatter the data nodes using `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (bx, by, bz) = (NODE_BOX.0 * 0.5, NODE_BOX.1 * 0.5, NODE_BOX.2 * 0.5);
        let nodes = (0..NODE_COUNT)
            .map(|_| Vec3::new(rng.random_range(-bx..bx), rng.random_range(-by..by), rng.random_range(-bz..bz)))
            .collect();
        Self { blocks: (0..BLOCK_COUNT).map(Block::at_rest).collect(), nodes, yaw: 0.0 }
    }

    /// Advance to wall-clock time `t_ms`.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, t_ms: f64) {
        let phase = t_ms * PHASE_RATE;
        for (index, block) in self.blocks.iter_mut().enumerate() {
            let i = index as f64;
            block.tilt_x = (phase + i * WOBBLE_STEP_X).sin() * WOBBLE_AMPLITUDE;
            block.tilt_y = (phase + i * WOBBLE_STEP_Y).sin() * WOBBLE_AMPLITUDE;
        }
        for (index, node) in self.nodes.iter_mut().enumerate() {
            let (sin, cos) = (phase + index as f64).sin_cos();
            node.x += sin * NODE_DRIFT;
            node.y += cos * NODE_DRIFT;
        }
        self.yaw = t_ms * YAW_RATE;
    }

    /// Centre-to-centre links between consecutive blocks.
    pub fn links(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.blocks.windows(2).map(|pair| (pair[0].center, pair[1].center))
    }

    /// Apply the whole-scene yaw to a scene-space point.
    #[must_use]
    pub fn to_world(&self, point: Vec3) -> Vec3 {
        point.rotate_y(self.yaw)
    }
}
