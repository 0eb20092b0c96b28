use serde::{Deserialize, Serialize};

use crate::raw::{ConstraintDescriptor, TypeRef};

/// Public view of an aggregated method return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValueDescriptor {
    pub return_type: TypeRef,
    /// Constraint payloads in their public form, sorted for stable output.
    pub constraints: Vec<ConstraintDescriptor>,
    pub cascading: bool,
    /// Whether the root type redefines its default group sequence.
    /// Supplied by the caller and mirrored verbatim.
    pub default_group_sequence_redefined: bool,
    /// The resolved default group sequence, mirrored verbatim.
    pub default_group_sequence: Vec<String>,
}
