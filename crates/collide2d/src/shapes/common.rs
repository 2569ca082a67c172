//! Shared attribute block held by every shape variant
//!
//! The variants compose [`ShapeCommon`] by value instead of layering
//! inheritance-style embeddings, so there is exactly one definition of each
//! shared field and behavior.

use std::any::Any;
use std::fmt;

use crate::assets::TextureHandle;
use crate::foundation::math::Vec3;

/// Seconds between stand animation frames
pub const STAND_FRAME_TIME: f32 = 0.1;

/// Seconds between move animation frames
pub const MOVE_FRAME_TIME: f32 = 0.05;

/// Frame-cursor state for the move/stand animation sets
#[derive(Debug, Clone, Default)]
struct AnimationState {
    move_frames: Vec<TextureHandle>,
    stand_frames: Vec<TextureHandle>,
    move_index: usize,
    stand_index: usize,
    move_elapsed: f32,
    stand_elapsed: f32,
}

/// Attributes common to every shape variant
///
/// Position is integer world units: top-left origin for rectangles, center
/// origin for circles, first endpoint for lines. The kinematic fields
/// (`friction`, speed, `max_speed`) are read and written by the caller; the
/// engine's resolve step works on a requested delta and never integrates
/// them. The render fields (`texture`, `rotation`, `tint`, `flip_x`,
/// `draw_scale`) are stored for the external renderer's benefit only.
pub struct ShapeCommon {
    /// X position in world units
    pub x: i32,
    /// Y position in world units
    pub y: i32,
    /// Active texture for the render hand-off
    pub texture: Option<TextureHandle>,
    /// Rotation in degrees, for the render hand-off
    pub rotation: f32,
    /// Tint color, for the render hand-off
    pub tint: Vec3,
    /// Horizontal flip flag, for the render hand-off
    pub flip_x: bool,
    /// Surface friction, read by the caller's movement code
    pub friction: f32,
    /// Sprite scale factor relative to the shape's extent
    pub draw_scale: f32,
    /// Horizontal speed, caller-owned kinematic state
    pub speed_x: f32,
    /// Vertical speed, caller-owned kinematic state
    pub speed_y: f32,
    /// Speed cap, caller-owned kinematic state
    pub max_speed: f32,
    tags: Vec<String>,
    data: Option<Box<dyn Any>>,
    animation: AnimationState,
}

impl ShapeCommon {
    /// Create the common block
    ///
    /// The initial texture is the first stand frame, falling back to the
    /// first move frame when there are no stand frames.
    pub fn new(
        x: i32,
        y: i32,
        friction: f32,
        draw_scale: f32,
        move_frames: Vec<TextureHandle>,
        stand_frames: Vec<TextureHandle>,
    ) -> Self {
        let texture = stand_frames.first().or(move_frames.first()).copied();
        Self {
            x,
            y,
            texture,
            rotation: 0.0,
            tint: Vec3::new(1.0, 1.0, 1.0),
            flip_x: false,
            friction,
            draw_scale,
            speed_x: 0.0,
            speed_y: 0.0,
            max_speed: 0.0,
            tags: Vec::new(),
            data: None,
            animation: AnimationState {
                move_frames,
                stand_frames,
                ..AnimationState::default()
            },
        }
    }

    /// Position as an `(x, y)` pair
    pub fn xy(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Set the position
    pub fn set_xy(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Translate by a delta
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Tags currently on the shape, in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add tags; duplicates are permitted (and semantically redundant)
    pub fn add_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags {
            self.tags.push(tag.as_ref().to_owned());
        }
    }

    /// Remove tags, stripping every occurrence of each
    pub fn remove_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags {
            self.tags.retain(|t| t != tag.as_ref());
        }
    }

    /// Remove all tags
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// True if every queried tag is present; an empty query is trivially
    /// satisfied
    pub fn has_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .all(|tag| self.tags.iter().any(|t| t == tag.as_ref()))
    }

    /// Borrow the opaque caller payload
    pub fn data(&self) -> Option<&dyn Any> {
        self.data.as_deref()
    }

    /// Mutably borrow the opaque caller payload
    pub fn data_mut(&mut self) -> Option<&mut dyn Any> {
        self.data.as_deref_mut()
    }

    /// Attach an opaque caller payload; the engine never inspects it
    pub fn set_data(&mut self, data: Box<dyn Any>) {
        self.data = Some(data);
    }

    /// Detach and return the payload
    pub fn take_data(&mut self) -> Option<Box<dyn Any>> {
        self.data.take()
    }

    /// Speed as an `(x, y)` pair
    pub fn speed(&self) -> (f32, f32) {
        (self.speed_x, self.speed_y)
    }

    /// Set the speed
    pub fn set_speed(&mut self, speed_x: f32, speed_y: f32) {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
    }

    /// Advance the stand animation by `delta` seconds
    ///
    /// Past [`STAND_FRAME_TIME`] the active texture switches to the current
    /// stand frame, the accumulator resets and the cursor advances modulo
    /// the frame count. A shape without stand frames is unaffected.
    pub fn to_stand(&mut self, delta: f32) {
        let anim = &mut self.animation;
        if anim.stand_frames.is_empty() {
            return;
        }
        if anim.stand_index >= anim.stand_frames.len() {
            anim.stand_index = 0;
        }
        anim.stand_elapsed += delta;
        if anim.stand_elapsed > STAND_FRAME_TIME {
            anim.stand_elapsed = 0.0;
            self.texture = Some(anim.stand_frames[anim.stand_index]);
            anim.stand_index += 1;
        }
    }

    /// Advance the move animation by `delta` seconds
    ///
    /// Same scheme as [`Self::to_stand`] with the [`MOVE_FRAME_TIME`]
    /// threshold over the move frames.
    pub fn to_move(&mut self, delta: f32) {
        let anim = &mut self.animation;
        if anim.move_frames.is_empty() {
            return;
        }
        if anim.move_index >= anim.move_frames.len() {
            anim.move_index = 0;
        }
        anim.move_elapsed += delta;
        if anim.move_elapsed > MOVE_FRAME_TIME {
            anim.move_elapsed = 0.0;
            self.texture = Some(anim.move_frames[anim.move_index]);
            anim.move_index += 1;
        }
    }

    /// Copy of this block at a new position, without the caller payload
    ///
    /// Bounding-shape conversions use this: the derived shape carries the
    /// source's tags, kinematics and render attributes, but payload
    /// ownership stays with the original.
    pub(crate) fn derived_at(&self, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            texture: self.texture,
            rotation: self.rotation,
            tint: self.tint,
            flip_x: self.flip_x,
            friction: self.friction,
            draw_scale: self.draw_scale,
            speed_x: self.speed_x,
            speed_y: self.speed_y,
            max_speed: self.max_speed,
            tags: self.tags.clone(),
            data: None,
            animation: self.animation.clone(),
        }
    }
}

impl fmt::Debug for ShapeCommon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeCommon")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("tags", &self.tags)
            .field("friction", &self.friction)
            .field("speed", &(self.speed_x, self.speed_y))
            .field("max_speed", &self.max_speed)
            .field("has_data", &self.data.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::TypedHandle;
    use slotmap::{DefaultKey, KeyData};

    fn handle(n: u64) -> TextureHandle {
        TypedHandle::new(DefaultKey::from(KeyData::from_ffi(n)))
    }

    fn common() -> ShapeCommon {
        ShapeCommon::new(0, 0, 0.5, 1.0, vec![], vec![])
    }

    #[test]
    fn test_tag_membership_is_all_of() {
        let mut c = common();
        c.add_tags(&["solid", "ramp"]);

        assert!(c.has_tags(&["solid"]));
        assert!(c.has_tags(&["ramp", "solid"]));
        assert!(!c.has_tags(&["solid", "dangerous"]));
        let empty: [&str; 0] = [];
        assert!(c.has_tags(&empty));
    }

    #[test]
    fn test_remove_tags_strips_duplicates() {
        let mut c = common();
        c.add_tags(&["a", "a"]);
        assert_eq!(c.tags().len(), 2);

        c.remove_tags(&["a"]);
        assert!(!c.has_tags(&["a"]));
        assert!(c.tags().is_empty());
    }

    #[test]
    fn test_clear_tags() {
        let mut c = common();
        c.add_tags(&["solid", "isWall"]);
        c.clear_tags();
        assert!(c.tags().is_empty());
    }

    #[test]
    fn test_initial_texture_prefers_stand_frames() {
        let stand = ShapeCommon::new(0, 0, 0.5, 1.0, vec![handle(1)], vec![handle(2)]);
        assert_eq!(stand.texture, Some(handle(2)));

        let move_only = ShapeCommon::new(0, 0, 0.5, 1.0, vec![handle(1)], vec![]);
        assert_eq!(move_only.texture, Some(handle(1)));

        assert_eq!(common().texture, None);
    }

    #[test]
    fn test_stand_animation_advances_past_threshold() {
        let mut c = ShapeCommon::new(0, 0, 0.5, 1.0, vec![], vec![handle(1), handle(2)]);

        c.to_stand(0.05);
        assert_eq!(c.texture, Some(handle(1))); // unchanged, under threshold
        c.to_stand(0.06);
        assert_eq!(c.texture, Some(handle(1))); // first frame selected
        c.to_stand(0.11);
        assert_eq!(c.texture, Some(handle(2)));
        c.to_stand(0.11);
        assert_eq!(c.texture, Some(handle(1))); // cursor wrapped
    }

    #[test]
    fn test_move_animation_uses_shorter_threshold() {
        let mut c = ShapeCommon::new(0, 0, 0.5, 1.0, vec![handle(3), handle(4)], vec![]);

        c.to_move(0.06);
        assert_eq!(c.texture, Some(handle(3)));
        c.to_move(0.06);
        assert_eq!(c.texture, Some(handle(4)));
    }

    #[test]
    fn test_animation_without_frames_is_noop() {
        let mut c = common();
        c.to_stand(1.0);
        c.to_move(1.0);
        assert_eq!(c.texture, None);
    }

    #[test]
    fn test_payload_round_trip() {
        let mut c = common();
        c.set_data(Box::new(42_u32));

        assert_eq!(c.data().and_then(|d| d.downcast_ref::<u32>()), Some(&42));
        let taken = c.take_data().unwrap();
        assert_eq!(taken.downcast_ref::<u32>(), Some(&42));
        assert!(c.data().is_none());
    }
}
