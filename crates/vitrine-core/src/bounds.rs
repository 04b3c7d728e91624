//! Axis-aligned bounding volumes

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a vertex set.
///
/// `min[i] <= max[i]` holds on every axis for boxes built through
/// [`from_positions`](BoundingBox::from_positions). Zero-volume boxes
/// (flat or point meshes) are valid. NaN coordinates propagate into the
/// result rather than being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Fold the component-wise min/max over a vertex set.
    /// Returns `None` for an empty set.
    pub fn from_positions(positions: &[[f32; 3]]) -> Option<Self> {
        let mut iter = positions.iter().map(|p| Vec3::from_array(*p));
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Longest edge of the box.
    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Radius of the sphere circumscribing the box.
    pub fn bounding_sphere_radius(&self) -> f32 {
        self.size().length() * 0.5
    }

    /// The same box shifted by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_bounds() {
        assert!(BoundingBox::from_positions(&[]).is_none());
    }

    #[test]
    fn unit_cube_bounds() {
        let corners: Vec<[f32; 3]> = (0..8)
            .map(|i| {
                [
                    if i & 1 == 0 { -0.5 } else { 0.5 },
                    if i & 2 == 0 { -0.5 } else { 0.5 },
                    if i & 4 == 0 { -0.5 } else { 0.5 },
                ]
            })
            .collect();
        let bounds = BoundingBox::from_positions(&corners).unwrap();
        assert_eq!(bounds.min, Vec3::splat(-0.5));
        assert_eq!(bounds.max, Vec3::splat(0.5));
        assert_eq!(bounds.center(), Vec3::ZERO);
        assert_eq!(bounds.max_dimension(), 1.0);
    }

    #[test]
    fn min_never_exceeds_max() {
        let positions = [
            [3.0, -1.0, 7.5],
            [-2.0, 4.0, 0.0],
            [0.5, 0.5, -9.0],
            [1.0, 1.0, 1.0],
        ];
        let bounds = BoundingBox::from_positions(&positions).unwrap();
        for axis in 0..3 {
            assert!(bounds.min[axis] <= bounds.max[axis]);
        }
    }

    #[test]
    fn single_point_is_degenerate() {
        let bounds = BoundingBox::from_positions(&[[2.0, 3.0, 4.0]]).unwrap();
        assert_eq!(bounds.min, bounds.max);
        assert_eq!(bounds.max_dimension(), 0.0);
        assert_eq!(bounds.center(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn sphere_radius_of_unit_cube() {
        let bounds = BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        // Half the space diagonal: sqrt(3)/2
        assert!((bounds.bounding_sphere_radius() - 0.866).abs() < 0.001);
    }

    #[test]
    fn translated_shifts_both_corners() {
        let bounds = BoundingBox::new(Vec3::ZERO, Vec3::ONE);
        let shifted = bounds.translated(Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(shifted.center(), Vec3::ZERO);
        assert_eq!(shifted.size(), bounds.size());
    }
}
