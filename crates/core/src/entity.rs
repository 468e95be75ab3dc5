//! Entity trait: identity that survives copying and reordering.

/// Entity marker + minimal interface.
///
/// Catalog records are entities: two products with identical fields but
/// different ids are different products, and the view pipeline must keep
/// every id exactly once however it reorders the list.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
