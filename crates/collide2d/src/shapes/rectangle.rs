//! Axis-aligned rectangle shape

use crate::assets::TextureHandle;
use crate::geometry;
use crate::shapes::{Circle, ShapeCommon};

/// Axis-aligned rectangle, positioned by its top-left corner and extending
/// toward positive X/Y
#[derive(Debug)]
pub struct Rectangle {
    /// Shared shape attributes
    pub common: ShapeCommon,
    /// Width in world units
    pub w: i32,
    /// Height in world units
    pub h: i32,
}

impl Rectangle {
    /// Create a new rectangle
    pub fn new(
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        friction: f32,
        draw_scale: f32,
        move_frames: Vec<TextureHandle>,
        stand_frames: Vec<TextureHandle>,
    ) -> Self {
        Self {
            common: ShapeCommon::new(x, y, friction, draw_scale, move_frames, stand_frames),
            w,
            h,
        }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> (i32, i32) {
        (self.common.x + self.w / 2, self.common.y + self.h / 2)
    }

    /// Bottom-right corner
    pub fn xy2(&self) -> (i32, i32) {
        (self.common.x + self.w, self.common.y + self.h)
    }

    /// Circle centered on the rectangle that wholly contains it
    pub fn bounding_circle(&self) -> Circle {
        let (cx, cy) = self.center();
        let radius = geometry::distance(cx, cy, self.common.x + self.w, self.common.y);
        Circle {
            common: self.common.derived_at(cx, cy),
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_xy2() {
        let r = Rectangle::new(10, 20, 30, 40, 0.5, 1.0, vec![], vec![]);
        assert_eq!(r.center(), (25, 40));
        assert_eq!(r.xy2(), (40, 60));
    }

    #[test]
    fn test_bounding_circle_contains_corners() {
        let r = Rectangle::new(0, 0, 20, 20, 0.5, 1.0, vec![], vec![]);
        let c = r.bounding_circle();

        assert_eq!(c.common.xy(), (10, 10));
        // distance from center to a corner is sqrt(200) = 14.1, truncated
        assert_eq!(c.radius, 14);
    }
}
