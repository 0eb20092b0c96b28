use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::TypeRef;

/// The public payload of a single validation rule: the annotation name,
/// its attributes, and the validation groups it participates in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConstraintDescriptor {
    /// Constraint annotation name, e.g. `NotNull` or `Size`.
    pub annotation_type: String,
    /// Annotation attributes as declared (e.g. `min`, `max`, `message`).
    pub attributes: BTreeMap<String, String>,
    /// Validation groups the constraint belongs to. Empty means the
    /// implicit default group, resolved during build-time adaptation.
    pub groups: BTreeSet<String>,
}

impl ConstraintDescriptor {
    /// Descriptor with no attributes and no explicit groups.
    pub fn simple(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            attributes: BTreeMap::new(),
            groups: BTreeSet::new(),
        }
    }
}

/// Where a constraint sits relative to the root type being validated.
///
/// Raw records always carry [`ConstraintOrigin::DefinedLocally`]; the
/// origin is rewritten during build-time adaptation once the root type
/// is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintOrigin {
    DefinedLocally,
    DefinedInHierarchy,
}

/// The declaration site a constraint is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintLocation {
    Parameter { declaring_type: TypeRef, index: u16 },
    ReturnValue { declaring_type: TypeRef },
}

impl ConstraintLocation {
    pub fn declaring_type(&self) -> &TypeRef {
        match self {
            ConstraintLocation::Parameter { declaring_type, .. } => declaring_type,
            ConstraintLocation::ReturnValue { declaring_type } => declaring_type,
        }
    }
}

/// One validation rule tied to its declaration site.
///
/// Identity is the whole descriptor/location/origin value, which makes
/// hash-set union the deduplicating merge: the same rule delivered twice
/// for one site collapses to a single entry, while the same annotation
/// declared at two hierarchy levels stays distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaConstraint {
    pub descriptor: ConstraintDescriptor,
    pub location: ConstraintLocation,
    pub origin: ConstraintOrigin,
}

impl MetaConstraint {
    /// A constraint as discovery emits it: origin not yet resolved.
    pub fn new(descriptor: ConstraintDescriptor, location: ConstraintLocation) -> Self {
        Self {
            descriptor,
            location,
            origin: ConstraintOrigin::DefinedLocally,
        }
    }
}
