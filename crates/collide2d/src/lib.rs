//! # collide2d
//!
//! A 2D collision detection and movement resolution engine for tile-scale
//! games (single-screen platformers and the like).
//!
//! ## Features
//!
//! - **Shape primitives**: axis-aligned rectangles, circles and line segments
//!   with a shared attribute block (tags, kinematics, render hand-off data)
//! - **Tag queries**: string tags scope which shapes take part in a given
//!   physics interaction ("solid", "ramp", "dangerous", ...)
//! - **Spatial collection**: an insertion-ordered [`Space`] with predicate and
//!   tag filtering into resolvable [`SubCollection`] views
//! - **Movement resolution**: stepped resolution of a requested displacement
//!   into the maximal safe delta, with slope snapping for ramp traversal
//!
//! ## Quick Start
//!
//! ```rust
//! use collide2d::prelude::*;
//!
//! let mut space = Space::new();
//!
//! let mut floor = Rectangle::new(0, 200, 640, 16, 0.5, 1.0, vec![], vec![]);
//! floor.common.add_tags(&["solid"]);
//! space.add(Shape::Rectangle(floor));
//!
//! let player = Shape::Rectangle(Rectangle::new(32, 32, 16, 16, 0.5, 1.0, vec![], vec![]));
//!
//! let solids = space.filter_by_tags(&["solid"]);
//! let res = solids.resolve(&player, 0, 300);
//! assert!(res.colliding());
//! assert_eq!(res.resolve_y, 152);
//! ```
//!
//! The engine is single threaded and frame driven: the caller mutates shape
//! state between frames, filters the space by tag, and resolves each scoped
//! collection in a fixed per-frame order. The engine never calls outward.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod geometry;
pub mod resolve;
pub mod shapes;
pub mod space;

pub use config::{Config, ConfigError, ResolveConfig};
pub use resolve::{CollisionResult, Resolution};
pub use shapes::{Circle, Line, Rectangle, Shape, ShapeCommon, SpriteParams};
pub use space::{ShapeHandle, Space, SubCollection};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Texture2D, TextureHandle, TextureRegistry},
        config::{Config, ResolveConfig},
        foundation::math::{Vec2, Vec3},
        resolve::CollisionResult,
        shapes::{Circle, Line, Rectangle, Shape, SpriteParams},
        space::{ShapeHandle, Space, SubCollection},
    };
}
