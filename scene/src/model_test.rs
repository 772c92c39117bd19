#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Layout
// =============================================================

#[test]
fn seven_blocks_follow_stack_formula() {
    let model = SceneModel::new(1);
    assert_eq!(model.blocks.len(), 7);
    for (i, block) in model.blocks.iter().enumerate() {
        let f = i as f64;
        assert!(approx_eq(block.center.y, f * 0.7 - 2.0), "block {i}");
        assert!(approx_eq(block.center.x, (f * 0.4).sin() * 0.3), "block {i}");
        assert!(approx_eq(block.center.z, (f * 0.4).cos() * 0.3), "block {i}");
    }
}

#[test]
fn block_colours_cycle_through_palette() {
    let model = SceneModel::new(1);
    let indices = model.blocks.iter().map(|b| b.color_index).collect::<Vec<_>>();
    assert_eq!(indices, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn links_join_consecutive_blocks() {
    let model = SceneModel::new(1);
    let links = model.links().collect::<Vec<_>>();
    assert_eq!(links.len(), 6);
    assert_eq!(links[0], (model.blocks[0].center, model.blocks[1].center));
    assert_eq!(links[5], (model.blocks[5].center, model.blocks[6].center));
}

#[test]
fn nodes_are_seeded_inside_box() {
    let model = SceneModel::new(42);
    assert_eq!(model.nodes.len(), 15);
    for node in &model.nodes {
        assert!(node.x.abs() <= 1.5 && node.y.abs() <= 2.0 && node.z.abs() <= 1.0, "{node:?}");
    }
    assert_eq!(SceneModel::new(42), model);
}

#[test]
fn resting_corners_span_block_size() {
    let block = Block::at_rest(0);
    let corners = block.corners();
    let min_x = corners.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = corners.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
    assert!(approx_eq(max_x - min_x, 1.0));
    assert!(approx_eq(max_y - min_y, 0.5));
}

// =============================================================
// Animation
// =============================================================

#[test]
fn advance_sets_wobble_and_yaw_from_clock() {
    let mut model = SceneModel::new(1);
    let t = 1_234.0;
    model.advance(t);
    for (i, block) in model.blocks.iter().enumerate() {
        let f = i as f64;
        assert!(approx_eq(block.tilt_x, (t * 0.001 + f * 0.2).sin() * 0.1));
        assert!(approx_eq(block.tilt_y, (t * 0.001 + f * 0.3).sin() * 0.1));
    }
    assert!(approx_eq(model.yaw, t * 0.0001));
}

#[test]
fn wobble_is_bounded() {
    let mut model = SceneModel::new(1);
    for step in 0..200 {
        model.advance(f64::from(step) * 97.0);
        assert!(model.blocks.iter().all(|b| b.tilt_x.abs() <= 0.1 && b.tilt_y.abs() <= 0.1));
    }
}

#[test]
fn nodes_drift_by_small_steps() {
    let mut model = SceneModel::new(3);
    let before = model.nodes.clone();
    model.advance(500.0);
    for (i, (a, b)) in before.iter().zip(&model.nodes).enumerate() {
        let phase = 500.0 * 0.001 + i as f64;
        assert!(approx_eq(b.x - a.x, phase.sin() * 0.002));
        assert!(approx_eq(b.y - a.y, phase.cos() * 0.002));
        assert_eq!(a.z, b.z);
    }
}

#[test]
fn to_world_applies_yaw() {
    let mut model = SceneModel::new(1);
    model.yaw = std::f64::consts::PI;
    let p = model.to_world(Vec3::new(1.0, 2.0, 0.0));
    assert!(approx_eq(p.x, -1.0) && approx_eq(p.y, 2.0));
}
