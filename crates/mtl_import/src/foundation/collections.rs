//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a material stored in a [`MaterialArena`]
    pub struct MaterialKey;
}

/// Arena owning every material record of a model
///
/// Handles stay valid across growth of the arena, so the parser can hold a
/// "current material" key without borrowing into the storage.
pub type MaterialArena<T> = SlotMap<MaterialKey, T>;
