//! Build-time constraint adaptation: origin marking and implicit groups.

use rustc_hash::FxHashSet;

use vigil_core::constants::DEFAULT_GROUP;
use vigil_core::raw::{ConstraintOrigin, MetaConstraint, TypeRef};
use vigil_core::traits::ConstraintAdapter;

/// The standard adapter applied when a builder freezes.
///
/// Marks each constraint as declared on the root type or inherited from
/// elsewhere in the hierarchy, and rewrites an empty group set to the
/// implicit `{Default}` group.
#[derive(Debug, Default, Clone, Copy)]
pub struct OriginAdapter;

impl ConstraintAdapter for OriginAdapter {
    fn adapt(
        &self,
        root_type: &TypeRef,
        constraints: FxHashSet<MetaConstraint>,
    ) -> FxHashSet<MetaConstraint> {
        constraints
            .into_iter()
            .map(|mut constraint| {
                constraint.origin = if constraint.location.declaring_type() == root_type {
                    ConstraintOrigin::DefinedLocally
                } else {
                    ConstraintOrigin::DefinedInHierarchy
                };
                if constraint.descriptor.groups.is_empty() {
                    constraint
                        .descriptor
                        .groups
                        .insert(DEFAULT_GROUP.to_string());
                }
                constraint
            })
            .collect()
    }
}
