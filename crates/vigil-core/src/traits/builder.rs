use crate::errors::MetadataResult;
use crate::raw::ConstrainedElement;
use crate::traits::ConstraintAdapter;

/// Accumulates the declaration records for one logical element and
/// freezes them into an immutable aggregate.
///
/// A builder is always seeded with the first record for its slot at
/// construction time. [`build`](Self::build) consumes the builder, so a
/// frozen aggregate can never observe a later `add`.
pub trait MetaDataBuilder: Sized {
    /// The immutable aggregate this builder produces.
    type Output;

    /// Whether `element` belongs to this builder's slot.
    ///
    /// Pure: callable any number of times with no side effect. Returns
    /// false whenever the element's kind or slot identity differs from
    /// this builder's.
    fn accepts(&self, element: &ConstrainedElement) -> bool;

    /// Merge one more declaration record into the accumulated state.
    ///
    /// Callers must route only elements for which
    /// [`accepts`](Self::accepts) holds; anything else is a dispatch bug
    /// and fails with [`MetadataError::ElementRejected`]. An accepted
    /// element whose declared type disagrees with the builder's fixed
    /// type is surfaced as a distinct conflict error.
    ///
    /// [`MetadataError::ElementRejected`]: crate::errors::MetadataError::ElementRejected
    fn add(&mut self, element: ConstrainedElement) -> MetadataResult<()>;

    /// Freeze the accumulated state into the immutable aggregate,
    /// running constraint adaptation exactly once.
    fn build(self, adapter: &dyn ConstraintAdapter) -> Self::Output;
}
