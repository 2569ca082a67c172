//! Circle shape

use crate::assets::TextureHandle;
use crate::shapes::{Rectangle, ShapeCommon};

/// Circle, positioned by its center
#[derive(Debug)]
pub struct Circle {
    /// Shared shape attributes
    pub common: ShapeCommon,
    /// Radius in world units
    pub radius: i32,
}

impl Circle {
    /// Create a new circle
    pub fn new(
        x: i32,
        y: i32,
        radius: i32,
        friction: f32,
        draw_scale: f32,
        move_frames: Vec<TextureHandle>,
        stand_frames: Vec<TextureHandle>,
    ) -> Self {
        Self {
            common: ShapeCommon::new(x, y, friction, draw_scale, move_frames, stand_frames),
            radius,
        }
    }

    /// Second defining point, `radius` along each axis from the center
    pub fn xy2(&self) -> (i32, i32) {
        (self.common.x + self.radius, self.common.y + self.radius)
    }

    /// Axis-aligned rectangle that wholly contains the circle
    pub fn bounding_rectangle(&self) -> Rectangle {
        Rectangle {
            common: self
                .common
                .derived_at(self.common.x - self.radius, self.common.y - self.radius),
            w: self.radius * 2,
            h: self.radius * 2,
        }
    }
}
