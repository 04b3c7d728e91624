//! Camera-to-object fitting

use glam::Vec3;
use vitrine_core::BoundingBox;

/// Direction from the bounds center toward the camera.
const VIEW_DIRECTION: Vec3 = Vec3::Z;

/// Camera placement that keeps a bounding volume fully in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera world position
    pub position: Vec3,
    /// Distance from the bounds center
    pub distance: f32,
    /// Vertical field of view in radians
    pub fov_y_radians: f32,
}

/// Fit a camera to the given bounds.
///
/// The distance is the smallest that keeps the box inside the view frustum
/// at the given field of view, scaled by `margin`. A zero-size box falls
/// back to `min_extent` so the distance stays positive.
pub fn frame(bounds: &BoundingBox, fov_y_radians: f32, margin: f32, min_extent: f32) -> CameraFrame {
    let center = bounds.center();
    let mut max_dim = bounds.max_dimension();
    if max_dim == 0.0 {
        max_dim = min_extent;
    }

    let distance = max_dim / (2.0 * (fov_y_radians * 0.5).tan()) * margin;

    CameraFrame {
        position: center + VIEW_DIRECTION * distance,
        distance,
        fov_y_radians,
    }
}
