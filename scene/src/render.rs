//! Rendering: draws one frame of the scene to a 2D context.
//!
//! Everything that draws to [`web_sys::CanvasRenderingContext2d`] lives here. It
//! reads the model and projection and produces pixels; it never mutates them.
//!
//! Blocks are drawn with the painter's algorithm: every visible face is
//! projected, sorted far to near by mean depth and filled in that order.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BLOCK_ALPHA, BLOCK_COLORS, EDGE_COLOR, LINK_COLOR, NODE_COLOR, NODE_RADIUS};
use crate::geometry::{Projection, ScreenPoint};
use crate::model::{BOX_FACES, SceneModel};

/// Link line width in CSS pixels.
const LINK_WIDTH_PX: f64 = 1.0;

/// A block face ready to fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFace {
    pub corners: [ScreenPoint; 4],
    pub depth: f64,
    pub color_index: usize,
}

/// Project every block face whose corners are all in front of the camera,
/// ordered far to near.
#[must_use]
pub fn project_faces(model: &SceneModel, projection: &Projection) -> Vec<ProjectedFace> {
    let mut faces = Vec::with_capacity(model.blocks.len() * BOX_FACES.len());
    for block in &model.blocks {
        let world = block.corners().map(|c| model.to_world(c));
        for face in BOX_FACES {
            let projected = face.map(|i| projection.project(world[i]));
            let [Some(a), Some(b), Some(c), Some(d)] = projected else {
                continue;
            };
            let depth = (a.depth + b.depth + c.depth + d.depth) * 0.25;
            faces.push(ProjectedFace { corners: [a, b, c, d], depth, color_index: block.color_index });
        }
    }
    faces.sort_by(|l, r| r.depth.total_cmp(&l.depth));
    faces
}

/// Draw one frame. `projection` is in CSS pixels; `dpr` is the device pixel
/// ratio of the backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    model: &SceneModel,
    projection: &Projection,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, projection.width, projection.height);

    draw_links(ctx, model, projection);
    draw_blocks(ctx, model, projection);
    draw_nodes(ctx, model, projection)?;
    Ok(())
}

fn draw_links(ctx: &CanvasRenderingContext2d, model: &SceneModel, projection: &Projection) {
    ctx.set_stroke_style_str(LINK_COLOR);
    ctx.set_line_width(LINK_WIDTH_PX);
    ctx.begin_path();
    for (from, to) in model.links() {
        let (Some(a), Some(b)) = (projection.project(model.to_world(from)), projection.project(model.to_world(to)))
        else {
            continue;
        };
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
    }
    ctx.stroke();
}

fn draw_blocks(ctx: &CanvasRenderingContext2d, model: &SceneModel, projection: &Projection) {
    ctx.set_stroke_style_str(EDGE_COLOR);
    ctx.set_global_alpha(BLOCK_ALPHA);
    for face in project_faces(model, projection) {
        let [first, rest @ ..] = face.corners;
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
        ctx.set_fill_style_str(BLOCK_COLORS[face.color_index % BLOCK_COLORS.len()]);
        ctx.fill();
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);
}

fn draw_nodes(ctx: &CanvasRenderingContext2d, model: &SceneModel, projection: &Projection) -> Result<(), JsValue> {
    ctx.set_fill_style_str(NODE_COLOR);
    for node in &model.nodes {
        let Some(p) = projection.project(model.to_world(*node)) else {
            continue;
        };
        ctx.begin_path();
        ctx.arc(p.x, p.y, NODE_RADIUS * p.scale, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}
