use super::*;
use crate::geometry::Vec3;
use crate::model::Block;

fn single_block_model(center: Vec3) -> SceneModel {
    let mut block = Block::at_rest(0);
    block.center = center;
    SceneModel { blocks: vec![block], nodes: Vec::new(), yaw: 0.0 }
}

#[test]
fn faces_are_sorted_far_to_near() {
    let model = SceneModel::new(7);
    let faces = project_faces(&model, &Projection::new(800.0, 600.0));
    assert_eq!(faces.len(), 7 * 6);
    assert!(faces.windows(2).all(|w| w[0].depth >= w[1].depth));
}

#[test]
fn faces_behind_near_plane_are_dropped() {
    let model = single_block_model(Vec3::new(0.0, 0.0, 5.0));
    assert!(project_faces(&model, &Projection::new(800.0, 600.0)).is_empty());
}

#[test]
fn empty_viewport_projects_nothing() {
    let model = SceneModel::new(7);
    assert!(project_faces(&model, &Projection::new(0.0, 0.0)).is_empty());
}

#[test]
fn faces_keep_block_colour() {
    let mut model = SceneModel::new(7);
    model.blocks.truncate(3);
    let faces = project_faces(&model, &Projection::new(800.0, 600.0));
    let mut colours = faces.iter().map(|f| f.color_index).collect::<Vec<_>>();
    colours.sort_unstable();
    colours.dedup();
    assert_eq!(colours, vec![0, 1, 2]);
}
