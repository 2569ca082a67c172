//! Shape variants and their shared capability surface
//!
//! The closed set of primitives lives in the [`Shape`] enum so the geometry
//! kernel can match on pairs exhaustively. Shared attributes sit in one
//! [`ShapeCommon`] block composed by value into each variant; the enum
//! methods below delegate to it (or to the variant, for geometry-dependent
//! operations such as `xy2` and the bounding conversions).

mod circle;
mod common;
mod line;
mod rectangle;

pub use circle::Circle;
pub use common::{ShapeCommon, MOVE_FRAME_TIME, STAND_FRAME_TIME};
pub use line::Line;
pub use rectangle::Rectangle;

use std::any::Any;

use crate::assets::TextureHandle;
use crate::foundation::math::{Vec2, Vec3};
use crate::geometry;

/// A positioned, taggable geometric object participating in collision
/// testing
#[derive(Debug)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rectangle(Rectangle),
    /// Circle
    Circle(Circle),
    /// Line segment
    Line(Line),
}

/// Everything an external renderer needs to place a shape's sprite
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteParams {
    /// Texture to draw
    pub texture: Option<TextureHandle>,
    /// Top-left draw position
    pub position: Vec2,
    /// Sprite size after scaling
    pub size: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Tint color
    pub tint: Vec3,
    /// Horizontal flip flag
    pub flip_x: bool,
}

impl Shape {
    /// Borrow the shared attribute block
    pub fn common(&self) -> &ShapeCommon {
        match self {
            Self::Rectangle(r) => &r.common,
            Self::Circle(c) => &c.common,
            Self::Line(l) => &l.common,
        }
    }

    /// Mutably borrow the shared attribute block
    pub fn common_mut(&mut self) -> &mut ShapeCommon {
        match self {
            Self::Rectangle(r) => &mut r.common,
            Self::Circle(c) => &mut c.common,
            Self::Line(l) => &mut l.common,
        }
    }

    /// Variant name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
            Self::Line(_) => "line",
        }
    }

    /// Test whether this shape currently overlaps `other`
    pub fn is_colliding(&self, other: &Self) -> bool {
        geometry::is_colliding(self, other)
    }

    /// Test whether this shape would overlap `other` after moving by
    /// `(dx, dy)`
    ///
    /// A pure query: the shape's position is untouched.
    pub fn would_be_colliding(&self, other: &Self, dx: i32, dy: i32) -> bool {
        geometry::colliding_at(self, dx, dy, other)
    }

    /// Position of the shape (top-left corner, center or first endpoint
    /// depending on the variant)
    pub fn xy(&self) -> (i32, i32) {
        self.common().xy()
    }

    /// The variant's second defining corner/point
    pub fn xy2(&self) -> (i32, i32) {
        match self {
            Self::Rectangle(r) => r.xy2(),
            Self::Circle(c) => c.xy2(),
            Self::Line(l) => l.xy2(),
        }
    }

    /// Set the position; a line keeps its shape, translating both endpoints
    pub fn set_xy(&mut self, x: i32, y: i32) {
        match self {
            Self::Line(l) => l.set_xy(x, y),
            _ => self.common_mut().set_xy(x, y),
        }
    }

    /// Translate by a delta
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            Self::Line(l) => l.move_by(dx, dy),
            _ => self.common_mut().move_by(dx, dy),
        }
    }

    /// Tags currently on the shape
    pub fn tags(&self) -> &[String] {
        self.common().tags()
    }

    /// Add tags
    pub fn add_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        self.common_mut().add_tags(tags);
    }

    /// Remove tags, stripping duplicates
    pub fn remove_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        self.common_mut().remove_tags(tags);
    }

    /// Remove all tags
    pub fn clear_tags(&mut self) {
        self.common_mut().clear_tags();
    }

    /// True if every queried tag is present
    pub fn has_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.common().has_tags(tags)
    }

    /// Surface friction
    pub fn friction(&self) -> f32 {
        self.common().friction
    }

    /// Set the surface friction
    pub fn set_friction(&mut self, friction: f32) {
        self.common_mut().friction = friction;
    }

    /// Current speed
    pub fn speed(&self) -> (f32, f32) {
        self.common().speed()
    }

    /// Set the speed
    pub fn set_speed(&mut self, speed_x: f32, speed_y: f32) {
        self.common_mut().set_speed(speed_x, speed_y);
    }

    /// Speed cap
    pub fn max_speed(&self) -> f32 {
        self.common().max_speed
    }

    /// Set the speed cap
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.common_mut().max_speed = max_speed;
    }

    /// Active texture for the render hand-off
    pub fn texture(&self) -> Option<TextureHandle> {
        self.common().texture
    }

    /// Set the active texture
    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.common_mut().texture = texture;
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, rotation: f32) {
        self.common_mut().rotation = rotation;
    }

    /// Set the tint color
    pub fn set_tint(&mut self, tint: Vec3) {
        self.common_mut().tint = tint;
    }

    /// Set the horizontal flip flag
    pub fn set_flip_x(&mut self, flip_x: bool) {
        self.common_mut().flip_x = flip_x;
    }

    /// Borrow the opaque caller payload
    pub fn data(&self) -> Option<&dyn Any> {
        self.common().data()
    }

    /// Mutably borrow the opaque caller payload
    pub fn data_mut(&mut self) -> Option<&mut dyn Any> {
        self.common_mut().data_mut()
    }

    /// Attach an opaque caller payload
    pub fn set_data(&mut self, data: Box<dyn Any>) {
        self.common_mut().set_data(data);
    }

    /// Advance the stand animation
    pub fn to_stand(&mut self, delta: f32) {
        self.common_mut().to_stand(delta);
    }

    /// Advance the move animation
    pub fn to_move(&mut self, delta: f32) {
        self.common_mut().to_move(delta);
    }

    /// Axis-aligned rectangle wholly containing the shape
    pub fn bounding_rectangle(&self) -> Rectangle {
        match self {
            Self::Rectangle(r) => Rectangle {
                common: r.common.derived_at(r.common.x, r.common.y),
                w: r.w,
                h: r.h,
            },
            Self::Circle(c) => c.bounding_rectangle(),
            Self::Line(l) => l.bounding_rectangle(),
        }
    }

    /// Circle wholly containing the shape
    pub fn bounding_circle(&self) -> Circle {
        match self {
            Self::Rectangle(r) => r.bounding_circle(),
            Self::Circle(c) => Circle {
                common: c.common.derived_at(c.common.x, c.common.y),
                radius: c.radius,
            },
            Self::Line(l) => {
                let mx = (l.common.x + l.x2) / 2;
                let my = (l.common.y + l.y2) / 2;
                Circle {
                    radius: geometry::distance(mx, my, l.x2, l.y2),
                    common: l.common.derived_at(mx, my),
                }
            }
        }
    }

    /// Sprite placement for the render hand-off
    ///
    /// The draw position is center based: the sprite scales around the
    /// shape's center (`top-left - extent * (scale - 1) / 2` for
    /// rectangles, `center - radius * scale` for circles). Lines have no
    /// sprite extent and yield `None`; a renderer draws them from the
    /// endpoints directly.
    pub fn sprite_params(&self) -> Option<SpriteParams> {
        match self {
            Self::Rectangle(r) => {
                let scale = r.common.draw_scale;
                let w = r.w as f32;
                let h = r.h as f32;
                Some(SpriteParams {
                    texture: r.common.texture,
                    position: Vec2::new(
                        r.common.x as f32 - w * (scale - 1.0) / 2.0,
                        r.common.y as f32 - h * (scale - 1.0) / 2.0,
                    ),
                    size: Vec2::new(w * scale, h * scale),
                    rotation: r.common.rotation,
                    tint: r.common.tint,
                    flip_x: r.common.flip_x,
                })
            }
            Self::Circle(c) => {
                let scale = c.common.draw_scale;
                let radius = c.radius as f32;
                Some(SpriteParams {
                    texture: c.common.texture,
                    position: Vec2::new(
                        c.common.x as f32 - radius * scale,
                        c.common.y as f32 - radius * scale,
                    ),
                    size: Vec2::new(2.0 * radius * scale, 2.0 * radius * scale),
                    rotation: c.common.rotation,
                    tint: c.common.tint,
                    flip_x: c.common.flip_x,
                })
            }
            Self::Line(_) => None,
        }
    }
}
