//! Line segment shape

use crate::assets::TextureHandle;
use crate::geometry;
use crate::shapes::{Rectangle, ShapeCommon};

/// Line segment from the shape position to a second endpoint
///
/// Lines have zero sprite extent but participate fully in collision, most
/// importantly as ramps for the resolution engine's slope traversal.
#[derive(Debug)]
pub struct Line {
    /// Shared shape attributes; position is the first endpoint
    pub common: ShapeCommon,
    /// Second endpoint X
    pub x2: i32,
    /// Second endpoint Y
    pub y2: i32,
}

impl Line {
    /// Create a new line segment
    pub fn new(
        x: i32,
        y: i32,
        x2: i32,
        y2: i32,
        friction: f32,
        draw_scale: f32,
        move_frames: Vec<TextureHandle>,
        stand_frames: Vec<TextureHandle>,
    ) -> Self {
        Self {
            common: ShapeCommon::new(x, y, friction, draw_scale, move_frames, stand_frames),
            x2,
            y2,
        }
    }

    /// Segment length in world units (truncated, like [`geometry::distance`])
    pub fn length(&self) -> i32 {
        geometry::distance(self.common.x, self.common.y, self.x2, self.y2)
    }

    /// Second endpoint
    pub fn xy2(&self) -> (i32, i32) {
        (self.x2, self.y2)
    }

    /// Whether the segment is vertical (no slope equation)
    pub fn is_vertical(&self) -> bool {
        self.common.x == self.x2
    }

    /// Whether the segment is horizontal
    pub fn is_horizontal(&self) -> bool {
        self.common.y == self.y2
    }

    /// Height of the segment's supporting line at `x`
    ///
    /// Callers must clamp `x` to the segment's horizontal range themselves;
    /// vertical segments have no defined height.
    pub fn y_at(&self, x: i32) -> f32 {
        let slope = (self.y2 - self.common.y) as f32 / (self.x2 - self.common.x) as f32;
        (x - self.common.x) as f32 * slope + self.common.y as f32
    }

    /// Translate both endpoints
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.common.move_by(dx, dy);
        self.x2 += dx;
        self.y2 += dy;
    }

    /// Move the first endpoint to `(x, y)`, translating the second to keep
    /// the segment's shape
    pub fn set_xy(&mut self, x: i32, y: i32) {
        let dx = x - self.common.x;
        let dy = y - self.common.y;
        self.move_by(dx, dy);
    }

    /// Axis-aligned rectangle spanning the endpoints
    pub fn bounding_rectangle(&self) -> Rectangle {
        let x = self.common.x.min(self.x2);
        let y = self.common.y.min(self.y2);
        Rectangle {
            common: self.common.derived_at(x, y),
            w: (self.x2 - self.common.x).abs(),
            h: (self.y2 - self.common.y).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line(x: i32, y: i32, x2: i32, y2: i32) -> Line {
        Line::new(x, y, x2, y2, 0.5, 1.0, vec![], vec![])
    }

    #[test]
    fn test_length_truncates() {
        assert_eq!(line(0, 0, 3, 4).length(), 5);
        assert_eq!(line(0, 0, 1, 1).length(), 1);
        assert_eq!(line(7, 7, 7, 7).length(), 0);
    }

    #[test]
    fn test_y_at_follows_slope() {
        let l = line(0, 10, 10, 0);
        assert_relative_eq!(l.y_at(0), 10.0);
        assert_relative_eq!(l.y_at(5), 5.0);
        assert_relative_eq!(l.y_at(10), 0.0);

        let flat = line(0, 4, 8, 4);
        assert_relative_eq!(flat.y_at(3), 4.0);
    }

    #[test]
    fn test_move_translates_both_endpoints() {
        let mut l = line(0, 0, 10, 5);
        l.move_by(3, -2);
        assert_eq!(l.common.xy(), (3, -2));
        assert_eq!(l.xy2(), (13, 3));

        l.set_xy(0, 0);
        assert_eq!(l.xy2(), (10, 5));
    }

    #[test]
    fn test_bounding_rectangle_normalizes_corners() {
        let l = line(10, 2, 4, 8);
        let r = l.bounding_rectangle();
        assert_eq!(r.common.xy(), (4, 2));
        assert_eq!((r.w, r.h), (6, 6));
    }

    #[test]
    fn test_axis_alignment_queries() {
        assert!(line(5, 0, 5, 9).is_vertical());
        assert!(line(0, 5, 9, 5).is_horizontal());
        let ramp = line(0, 10, 10, 0);
        assert!(!ramp.is_vertical());
        assert!(!ramp.is_horizontal());
    }
}
