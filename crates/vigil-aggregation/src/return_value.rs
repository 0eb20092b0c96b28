//! Aggregated view of a method return value across the type hierarchy.

use rustc_hash::FxHashSet;
use tracing::trace;

use vigil_core::descriptor::ReturnValueDescriptor;
use vigil_core::errors::{MetadataError, MetadataResult};
use vigil_core::raw::{ConstrainedElement, ConstrainedReturnValue, MetaConstraint, TypeRef};
use vigil_core::traits::{ConstraintAdapter, MetaDataBuilder};

/// Constraint metadata for a method's return value, merged across every
/// declaration of the method in the hierarchy. Immutable once built.
#[derive(Debug, Clone)]
pub struct ReturnValueMetaData {
    return_type: TypeRef,
    constraints: FxHashSet<MetaConstraint>,
    cascading: bool,
}

impl ReturnValueMetaData {
    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    pub fn constraints(&self) -> &FxHashSet<MetaConstraint> {
        &self.constraints
    }

    /// Whether validation recurses into the returned value itself.
    pub fn is_cascading(&self) -> bool {
        self.cascading
    }

    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty() || self.cascading
    }

    /// Project this aggregate into its public descriptor form. Pure, like
    /// [`ParameterMetaData::as_descriptor`](crate::parameter::ParameterMetaData::as_descriptor).
    pub fn as_descriptor(
        &self,
        default_group_sequence_redefined: bool,
        default_group_sequence: &[String],
    ) -> ReturnValueDescriptor {
        let mut constraints: Vec<_> = self
            .constraints
            .iter()
            .map(|c| c.descriptor.clone())
            .collect();
        constraints.sort();

        ReturnValueDescriptor {
            return_type: self.return_type.clone(),
            constraints,
            cascading: self.cascading,
            default_group_sequence_redefined,
            default_group_sequence: default_group_sequence.to_vec(),
        }
    }
}

/// Accumulates [`ConstrainedReturnValue`] records for one method.
///
/// A method has a single return slot, so kind alone decides membership;
/// the return type is fixed by the seeding record.
#[derive(Debug)]
pub struct ReturnValueMetaDataBuilder {
    root_type: TypeRef,
    return_type: TypeRef,
    constraints: FxHashSet<MetaConstraint>,
    cascading: bool,
}

impl ReturnValueMetaDataBuilder {
    /// Builder seeded by the first record discovery emits for the method.
    pub fn new(root_type: TypeRef, seed: ConstrainedReturnValue) -> Self {
        let mut builder = Self {
            root_type,
            return_type: seed.return_type.clone(),
            constraints: FxHashSet::default(),
            cascading: false,
        };
        builder.merge(seed);
        builder
    }

    fn merge(&mut self, return_value: ConstrainedReturnValue) {
        self.constraints.extend(return_value.constraints);
        self.cascading = self.cascading || return_value.cascading;
    }
}

impl MetaDataBuilder for ReturnValueMetaDataBuilder {
    type Output = ReturnValueMetaData;

    fn accepts(&self, element: &ConstrainedElement) -> bool {
        matches!(element, ConstrainedElement::ReturnValue(_))
    }

    fn add(&mut self, element: ConstrainedElement) -> MetadataResult<()> {
        match element {
            ConstrainedElement::ReturnValue(return_value) => {
                if return_value.return_type != self.return_type {
                    return Err(MetadataError::ReturnTypeConflict {
                        expected: self.return_type.clone(),
                        found: return_value.return_type,
                        declaring_type: return_value.declaring_type,
                    });
                }
                self.merge(return_value);
                Ok(())
            }
            other => Err(MetadataError::ElementRejected {
                expected: "return value".to_string(),
                actual: other.describe(),
            }),
        }
    }

    fn build(self, adapter: &dyn ConstraintAdapter) -> ReturnValueMetaData {
        trace!("freezing return value metadata");
        let constraints = adapter.adapt(&self.root_type, self.constraints);
        ReturnValueMetaData {
            return_type: self.return_type,
            constraints,
            cascading: self.cascading,
        }
    }
}
