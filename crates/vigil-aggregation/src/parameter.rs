//! Aggregated view of one method parameter across the type hierarchy.

use rustc_hash::FxHashSet;
use tracing::trace;

use vigil_core::descriptor::ParameterDescriptor;
use vigil_core::errors::{MetadataError, MetadataResult};
use vigil_core::raw::{ConstrainedElement, ConstrainedParameter, MetaConstraint, TypeRef};
use vigil_core::traits::{ConstraintAdapter, MetaDataBuilder};

/// Constraint metadata for one parameter slot, merged across every
/// declaration of the method in the hierarchy. Immutable once built.
#[derive(Debug, Clone)]
pub struct ParameterMetaData {
    index: u16,
    name: Option<String>,
    parameter_type: TypeRef,
    constraints: FxHashSet<MetaConstraint>,
    cascading: bool,
}

impl ParameterMetaData {
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Resolved parameter name: the first declaration site in
    /// contribution order that carried one, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parameter_type(&self) -> &TypeRef {
        &self.parameter_type
    }

    pub fn constraints(&self) -> &FxHashSet<MetaConstraint> {
        &self.constraints
    }

    /// Whether validation recurses into the argument value itself.
    pub fn is_cascading(&self) -> bool {
        self.cascading
    }

    /// True when there is anything to validate at all: at least one
    /// constraint, or cascaded validation.
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty() || self.cascading
    }

    /// Project this aggregate into its public descriptor form.
    ///
    /// The group-sequence context is resolved by the caller and mirrored
    /// verbatim. Pure: no caching, safe to call repeatedly and from any
    /// number of threads.
    pub fn as_descriptor(
        &self,
        default_group_sequence_redefined: bool,
        default_group_sequence: &[String],
    ) -> ParameterDescriptor {
        let mut constraints: Vec<_> = self
            .constraints
            .iter()
            .map(|c| c.descriptor.clone())
            .collect();
        constraints.sort();

        ParameterDescriptor {
            parameter_type: self.parameter_type.clone(),
            index: self.index,
            name: self.name.clone(),
            constraints,
            cascading: self.cascading,
            default_group_sequence_redefined,
            default_group_sequence: default_group_sequence.to_vec(),
        }
    }
}

/// Accumulates [`ConstrainedParameter`] records for one parameter slot.
///
/// The slot identity and the parameter type are fixed by the seeding
/// record; every later contribution must agree on both.
#[derive(Debug)]
pub struct ParameterMetaDataBuilder {
    root_type: TypeRef,
    parameter_type: TypeRef,
    index: u16,
    name: Option<String>,
    constraints: FxHashSet<MetaConstraint>,
    cascading: bool,
}

impl ParameterMetaDataBuilder {
    /// Builder seeded by the first record discovery emits for this slot.
    pub fn new(root_type: TypeRef, seed: ConstrainedParameter) -> Self {
        let mut builder = Self {
            root_type,
            parameter_type: seed.parameter_type.clone(),
            index: seed.index,
            name: None,
            constraints: FxHashSet::default(),
            cascading: false,
        };
        builder.merge(seed);
        builder
    }

    /// The slot this builder aggregates.
    pub fn index(&self) -> u16 {
        self.index
    }

    fn merge(&mut self, parameter: ConstrainedParameter) {
        self.constraints.extend(parameter.constraints);
        if self.name.is_none() {
            self.name = parameter.name;
        }
        self.cascading = self.cascading || parameter.cascading;
    }
}

impl MetaDataBuilder for ParameterMetaDataBuilder {
    type Output = ParameterMetaData;

    fn accepts(&self, element: &ConstrainedElement) -> bool {
        match element {
            ConstrainedElement::Parameter(p) => p.index == self.index,
            _ => false,
        }
    }

    fn add(&mut self, element: ConstrainedElement) -> MetadataResult<()> {
        match element {
            ConstrainedElement::Parameter(parameter) if parameter.index == self.index => {
                if parameter.parameter_type != self.parameter_type {
                    return Err(MetadataError::DeclaredTypeConflict {
                        index: self.index,
                        expected: self.parameter_type.clone(),
                        found: parameter.parameter_type,
                        declaring_type: parameter.declaring_type,
                    });
                }
                self.merge(parameter);
                Ok(())
            }
            other => Err(MetadataError::ElementRejected {
                expected: format!("parameter {}", self.index),
                actual: other.describe(),
            }),
        }
    }

    fn build(self, adapter: &dyn ConstraintAdapter) -> ParameterMetaData {
        trace!(index = self.index, "freezing parameter metadata");
        let constraints = adapter.adapt(&self.root_type, self.constraints);
        ParameterMetaData {
            index: self.index,
            name: self.name,
            parameter_type: self.parameter_type,
            constraints,
            cascading: self.cascading,
        }
    }
}
