//! Texture registry for the render hand-off
//!
//! The engine never draws anything, but every shape carries a texture
//! reference so an external renderer can. Textures live in an explicitly
//! owned [`TextureRegistry`] whose lifecycle is tied to the owning scene,
//! not to process-wide mutable state; shapes refer to entries through
//! stable [`TextureHandle`]s.
//!
//! The registry stores metadata only. Decoding image files and uploading
//! pixels to the GPU belong to the rendering collaborator.

use crate::foundation::collections::{HandleMap, TypedHandle};

/// Stable reference to a texture in a [`TextureRegistry`]
pub type TextureHandle = TypedHandle<Texture2D>;

/// Texture metadata as seen by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture2D {
    /// Name the texture was registered under
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Texture2D {
    /// Create texture metadata
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Owned collection of textures referenced by shapes
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: HandleMap<Texture2D>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture and return its handle
    pub fn insert(&mut self, texture: Texture2D) -> TextureHandle {
        TextureHandle::new(self.textures.insert(texture))
    }

    /// Look up a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture2D> {
        self.textures.get(handle.key())
    }

    /// Remove a texture, returning it if the handle was live
    pub fn remove(&mut self, handle: TextureHandle) -> Option<Texture2D> {
        self.textures.remove(handle.key())
    }

    /// Handles of every texture registered under `name`, in registry order
    ///
    /// Animation frame sets are conventionally registered under one shared
    /// name ("player_run" and so on), so this is the usual way a scene turns
    /// names from level data into the frame lists shape constructors take.
    pub fn find_by_name(&self, name: &str) -> Vec<TextureHandle> {
        self.textures
            .iter()
            .filter(|(_, t)| t.name == name)
            .map(|(k, _)| TextureHandle::new(k))
            .collect()
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = TextureRegistry::new();
        let handle = registry.insert(Texture2D::new("wall", 32, 32));

        assert_eq!(registry.len(), 1);
        let texture = registry.get(handle).unwrap();
        assert_eq!(texture.name, "wall");
        assert_eq!((texture.width, texture.height), (32, 32));
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut registry = TextureRegistry::new();
        let handle = registry.insert(Texture2D::new("spike", 16, 16));

        assert!(registry.remove(handle).is_some());
        assert!(registry.get(handle).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_find_by_name_collects_frame_set() {
        let mut registry = TextureRegistry::new();
        let a = registry.insert(Texture2D::new("bat", 16, 16));
        registry.insert(Texture2D::new("wall", 32, 32));
        let b = registry.insert(Texture2D::new("bat", 16, 16));

        let frames = registry.find_by_name("bat");
        assert_eq!(frames.len(), 2);
        assert!(frames.contains(&a));
        assert!(frames.contains(&b));
    }
}
