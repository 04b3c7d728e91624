//! Vitrine Core - Geometry math and time-of-day primitives
//!
//! This crate provides the foundational types used throughout the viewer:
//! - Mathematical primitives (re-exported from glam)
//! - Bounding volume math for framing loaded meshes
//! - Time-of-day mapping that drives the displayed model's orientation

pub mod bounds;
pub mod orientation;

pub use bounds::BoundingBox;
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use orientation::{rotation_angle, TimeOfDay};
