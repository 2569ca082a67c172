//! Math utilities and types
//!
//! Provides the small set of math types the engine needs for 2D work.
//! Shape coordinates themselves are integers; the float vector types carry
//! speeds, tint colors and sprite placement for the render hand-off.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type (tint colors)
pub type Vec3 = Vector3<f32>;
