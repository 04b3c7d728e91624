//! Viewer configuration

use serde::{Deserialize, Serialize};

/// Viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Safety margin applied to the fitted camera distance (>1 keeps the
    /// object clear of the frustum edges)
    pub fit_margin: f32,
    /// Extent substituted for a zero-size bounding box
    pub min_extent: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            fit_margin: 2.0,
            min_extent: 1.0,
        }
    }
}
