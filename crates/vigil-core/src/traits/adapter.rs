use rustc_hash::FxHashSet;

use crate::raw::{MetaConstraint, TypeRef};

/// Build-time constraint adaptation.
///
/// Invoked exactly once per builder, inside `build`, with the root type
/// of the hierarchy and the full accumulated constraint set.
/// Implementations resolve concerns that need the whole set at once,
/// such as origin marking and implicit group membership; the engine
/// treats them as black boxes.
pub trait ConstraintAdapter {
    fn adapt(
        &self,
        root_type: &TypeRef,
        constraints: FxHashSet<MetaConstraint>,
    ) -> FxHashSet<MetaConstraint>;
}
