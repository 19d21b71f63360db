//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether `other` refers to a different entity than `self`.
    ///
    /// `None` means "no identity yet" and never matches an existing entity.
    fn is_other_than(&self, other: Option<Self::Id>) -> bool {
        other != Some(self.id())
    }
}
