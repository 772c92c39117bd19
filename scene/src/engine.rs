//! Scene lifecycle: mount onto a container, resize, draw frames, unmount.
//!
//! ARCHITECTURE
//! ============
//! [`SceneCore`] holds everything that does not need a canvas (model,
//! projection, mounted flag) so it can be tested natively. [`Scene`] owns the
//! DOM canvas and its 2D context and delegates to the core.
//!
//! The host drives frames from `requestAnimationFrame`. After
//! [`Scene::unmount`] the canvas is gone from the DOM and the scene is
//! consumed, so no further frame can be drawn.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::geometry::Projection;
use crate::model::SceneModel;
use crate::render;

/// Canvas-independent scene state.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCore {
    pub model: SceneModel,
    pub projection: Projection,
    pub dpr: f64,
    mounted: bool,
}

impl SceneCore {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { model: SceneModel::new(seed), projection: Projection::default(), dpr: 1.0, mounted: true }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Update the viewport. Returns `true` when the size or pixel ratio
    /// actually changed and the backing store must be resized.
    #[allow(clippy::float_cmp)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> bool {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let width = width_css.max(0.0);
        let height = height_css.max(0.0);
        if self.projection.width == width && self.projection.height == height && self.dpr == dpr {
            return false;
        }
        self.projection = Projection { width, height, ..self.projection };
        self.dpr = dpr;
        true
    }

    /// Advance the animation to `t_ms`. Returns `false` once unmounted or
    /// while the viewport is empty, meaning there is nothing to draw.
    pub fn advance(&mut self, t_ms: f64) -> bool {
        if !self.mounted {
            return false;
        }
        self.model.advance(t_ms);
        self.projection.width > 0.0 && self.projection.height > 0.0
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Backing store size in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.projection.width * self.dpr).round() as u32,
            (self.projection.height * self.dpr).round() as u32,
        )
    }
}

/// A scene mounted into a container element.
pub struct Scene {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SceneCore,
}

impl Scene {
    /// Create a canvas filling `container`, append it and size it.
    ///
    /// # Errors
    ///
    /// Returns `Err` when there is no document, the canvas cannot be created
    /// or appended, or a 2D context is unavailable.
    pub fn mount(container: &HtmlElement, seed: u64) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
        let style = canvas.style();
        style.set_property("display", "block")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;
        container.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut scene = Self { container: container.clone(), canvas, ctx, core: SceneCore::new(seed) };
        scene.resize();
        Ok(scene)
    }

    /// Match the canvas to the container's current size.
    pub fn resize(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let width = f64::from(self.container.client_width());
        let height = f64::from(self.container.client_height());
        if self.core.set_viewport(width, height, dpr) {
            let (w, h) = self.core.backing_size();
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
    }

    /// Advance to `t_ms` and draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self, t_ms: f64) -> Result<(), JsValue> {
        self.resize();
        if !self.core.advance(t_ms) {
            return Ok(());
        }
        render::draw(&self.ctx, &self.core.model, &self.core.projection, self.core.dpr)
    }

    /// Detach the canvas from the container.
    pub fn unmount(mut self) {
        self.core.unmount();
        self.canvas.remove();
    }
}
