//! Property tests for the merge invariants: permutation invariance,
//! monotonic cascade, constraint union, and has_constraints derivation.

use proptest::collection::vec;
use proptest::prelude::*;
use rustc_hash::FxHashSet;
use vigil_aggregation::{OriginAdapter, ParameterMetaData, ParameterMetaDataBuilder};
use vigil_core::raw::{
    ConstrainedElement, ConstrainedParameter, ConstraintDescriptor, ConstraintLocation,
    MetaConstraint, TypeRef,
};
use vigil_core::traits::{ConstraintAdapter, MetaDataBuilder};

/// Adapter that passes the constraint set through untouched.
struct PassThrough;

impl ConstraintAdapter for PassThrough {
    fn adapt(
        &self,
        _root_type: &TypeRef,
        constraints: FxHashSet<MetaConstraint>,
    ) -> FxHashSet<MetaConstraint> {
        constraints
    }
}

fn constraint_strategy() -> impl Strategy<Value = MetaConstraint> {
    ("[A-E]", 0u8..4).prop_map(|(annotation, level)| {
        MetaConstraint::new(
            ConstraintDescriptor::simple(annotation),
            ConstraintLocation::Parameter {
                declaring_type: TypeRef::new(format!("Level{level}")),
                index: 0,
            },
        )
    })
}

/// Declaration records for one slot across up to four hierarchy levels.
fn record_strategy() -> impl Strategy<Value = ConstrainedParameter> {
    (
        0u8..4,
        vec(constraint_strategy(), 0..4),
        proptest::option::of("[a-z]{1,8}"),
        any::<bool>(),
    )
        .prop_map(|(level, constraints, name, cascading)| ConstrainedParameter {
            declaring_type: TypeRef::new(format!("Level{level}")),
            parameter_type: TypeRef::new("String"),
            index: 0,
            name,
            constraints: constraints.into_iter().collect(),
            cascading,
        })
}

fn aggregate(records: Vec<ConstrainedParameter>, adapter: &dyn ConstraintAdapter) -> ParameterMetaData {
    let mut records = records.into_iter();
    let seed = records.next().expect("at least one record");
    let mut builder = ParameterMetaDataBuilder::new(TypeRef::new("Level0"), seed);
    for record in records {
        builder
            .add(ConstrainedElement::Parameter(record))
            .expect("records share the slot identity");
    }
    builder.build(adapter)
}

proptest! {
    #[test]
    fn constraint_merge_is_permutation_invariant(
        (original, shuffled) in vec(record_strategy(), 1..6).prop_flat_map(|records| {
            (Just(records.clone()), Just(records).prop_shuffle())
        })
    ) {
        let a = aggregate(original, &OriginAdapter);
        let b = aggregate(shuffled, &OriginAdapter);

        prop_assert_eq!(a.constraints(), b.constraints());
        prop_assert_eq!(a.is_cascading(), b.is_cascading());
    }

    #[test]
    fn cascade_is_monotonic_or(records in vec(record_strategy(), 1..6)) {
        let any_cascading = records.iter().any(|r| r.cascading);
        let built = aggregate(records, &PassThrough);

        prop_assert_eq!(built.is_cascading(), any_cascading);
    }

    #[test]
    fn constraints_equal_union_of_inputs(records in vec(record_strategy(), 1..6)) {
        let expected: FxHashSet<MetaConstraint> = records
            .iter()
            .flat_map(|r| r.constraints.iter().cloned())
            .collect();
        let built = aggregate(records, &PassThrough);

        prop_assert_eq!(built.constraints(), &expected);
    }

    #[test]
    fn has_constraints_is_derived_correctly(records in vec(record_strategy(), 1..6)) {
        let built = aggregate(records, &OriginAdapter);

        prop_assert_eq!(
            built.has_constraints(),
            !built.constraints().is_empty() || built.is_cascading()
        );
    }

    #[test]
    fn name_resolves_to_first_named_contribution(records in vec(record_strategy(), 1..6)) {
        let expected = records.iter().find_map(|r| r.name.clone());
        let built = aggregate(records, &PassThrough);

        prop_assert_eq!(built.name(), expected.as_deref());
    }
}
