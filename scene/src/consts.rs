//! Shared numeric constants for the scene crate.

// ── Layout ──────────────────────────────────────────────────────

/// Blocks in the chain, stacked bottom to top.
pub const BLOCK_COUNT: usize = 7;

/// Block extents along x, y and z.
pub const BLOCK_SIZE: (f64, f64, f64) = (1.0, 0.5, 0.2);

/// Vertical distance between consecutive block centres.
pub const BLOCK_SPACING: f64 = 0.7;

/// Y of the lowest block centre.
pub const BLOCK_BASE_Y: f64 = -2.0;

/// Radius of the sideways sway of the stack, and its per-block phase step.
pub const BLOCK_SWAY: f64 = 0.3;
pub const BLOCK_SWAY_STEP: f64 = 0.4;

/// Floating data nodes.
pub const NODE_COUNT: usize = 15;
pub const NODE_RADIUS: f64 = 0.05;

/// Nodes are scattered uniformly in a box of this size centred on the origin.
pub const NODE_BOX: (f64, f64, f64) = (3.0, 4.0, 2.0);

// ── Animation ───────────────────────────────────────────────────

/// Converts the millisecond clock into wobble/drift phase.
pub const PHASE_RATE: f64 = 0.001;

/// Peak block tilt in radians.
pub const WOBBLE_AMPLITUDE: f64 = 0.1;

/// Per-block phase offsets for the x and y tilt.
pub const WOBBLE_STEP_X: f64 = 0.2;
pub const WOBBLE_STEP_Y: f64 = 0.3;

/// Node displacement per frame.
pub const NODE_DRIFT: f64 = 0.002;

/// Whole-scene yaw in radians per millisecond.
pub const YAW_RATE: f64 = 0.0001;

// ── Camera ──────────────────────────────────────────────────────

pub const CAMERA_Z: f64 = 5.0;
pub const FOV_Y_DEG: f64 = 75.0;
pub const NEAR_PLANE: f64 = 0.1;

// ── Palette ─────────────────────────────────────────────────────

/// Block fill colours, cycled by block index.
pub const BLOCK_COLORS: [&str; 3] = ["#8b5cf6", "#9b87f5", "#0fa0ce"];
pub const BLOCK_ALPHA: f64 = 0.8;
pub const LINK_COLOR: &str = "rgba(155, 135, 245, 0.5)";
pub const NODE_COLOR: &str = "rgba(15, 160, 206, 0.8)";
pub const EDGE_COLOR: &str = "rgba(255, 255, 255, 0.15)";
