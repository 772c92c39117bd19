//! 3D vectors and the perspective projection onto the canvas.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{CAMERA_Z, FOV_Y_DEG, NEAR_PLANE};

/// A point or offset in scene space. `y` is up, `z` points at the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Rotate about the x axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    /// Rotate about the y axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }
}

/// A projected point in CSS pixels.
///
/// `scale` is pixels per scene unit at this depth, used to size spheres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub scale: f64,
}

/// Pinhole camera on the +z axis looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: f64,
    pub height: f64,
    pub camera_z: f64,
    pub fov_y_deg: f64,
    pub near: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, camera_z: CAMERA_Z, fov_y_deg: FOV_Y_DEG, near: NEAR_PLANE }
    }
}

impl Projection {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Distance in pixels from the eye to the image plane.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        (self.height * 0.5) / (self.fov_y_deg.to_radians() * 0.5).tan()
    }

    /// Project a scene point. `None` for an empty viewport or a point at or
    /// behind the near plane.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Option<ScreenPoint> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let depth = self.camera_z - point.z;
        if depth < self.near {
            return None;
        }
        let scale = self.focal_length() / depth;
        Some(ScreenPoint {
            x: self.width * 0.5 + point.x * scale,
            y: self.height * 0.5 - point.y * scale,
            depth,
            scale,
        })
    }
}
