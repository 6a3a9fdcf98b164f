//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores, customers and products are entities: two of them with the same
/// attribute values are still different things, so every lookup goes
/// through `id()`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
