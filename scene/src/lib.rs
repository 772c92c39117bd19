//! Decorative blockchain scene for the home page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! slowly turning stack of blocks, the links between them and a cloud of
//! drifting data nodes onto a 2D canvas using a small perspective projection.
//! It reads no application state; the host component only mounts it, feeds it
//! animation timestamps and unmounts it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Mounted [`engine::Scene`] and testable [`engine::SceneCore`] |
//! | [`model`] | Block/node layout and per-frame animation |
//! | [`geometry`] | 3D vectors, rotations and the perspective projection |
//! | [`render`] | Canvas2D drawing |
//! | [`consts`] | Layout, animation and palette constants |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod model;
pub mod render;
