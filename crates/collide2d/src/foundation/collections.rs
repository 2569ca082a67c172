//! Specialized collection types

pub use slotmap::{DefaultKey, SlotMap};

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Handle type for stable references
pub type Handle = DefaultKey;

/// Typed handle for type-safe references into a [`HandleMap`]
#[derive(Debug)]
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: std::marker::PhantomData<T>,
}

// Handles are plain keys; they are copyable and comparable regardless of
// whether the referenced type is.
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> std::hash::Hash for TypedHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> DefaultKey {
        self.key
    }
}
