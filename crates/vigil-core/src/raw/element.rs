use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{MetaConstraint, TypeRef};

/// The kind of constrained element a declaration record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstrainedElementKind {
    Parameter,
    ReturnValue,
}

/// One method parameter as constrained at a single hierarchy level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstrainedParameter {
    pub declaring_type: TypeRef,
    pub parameter_type: TypeRef,
    /// Zero-based parameter position; the slot identity shared by every
    /// override of the method across the hierarchy.
    pub index: u16,
    /// Parameter name at this declaration site, when the compiler kept one.
    pub name: Option<String>,
    pub constraints: FxHashSet<MetaConstraint>,
    /// Whether validation recurses into the argument value itself.
    pub cascading: bool,
}

/// The method return value as constrained at a single hierarchy level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstrainedReturnValue {
    pub declaring_type: TypeRef,
    pub return_type: TypeRef,
    pub constraints: FxHashSet<MetaConstraint>,
    pub cascading: bool,
}

/// A raw declaration record: one constrained element at one level of the
/// type hierarchy, as emitted by discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstrainedElement {
    Parameter(ConstrainedParameter),
    ReturnValue(ConstrainedReturnValue),
}

impl ConstrainedElement {
    pub fn kind(&self) -> ConstrainedElementKind {
        match self {
            ConstrainedElement::Parameter(_) => ConstrainedElementKind::Parameter,
            ConstrainedElement::ReturnValue(_) => ConstrainedElementKind::ReturnValue,
        }
    }

    /// Short description used in dispatch error messages.
    pub fn describe(&self) -> String {
        match self {
            ConstrainedElement::Parameter(p) => {
                format!("parameter {} declared on `{}`", p.index, p.declaring_type)
            }
            ConstrainedElement::ReturnValue(r) => {
                format!("return value declared on `{}`", r.declaring_type)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let parameter = ConstrainedElement::Parameter(ConstrainedParameter {
            declaring_type: TypeRef::new("Service"),
            parameter_type: TypeRef::new("String"),
            index: 2,
            name: None,
            constraints: FxHashSet::default(),
            cascading: false,
        });
        assert_eq!(parameter.kind(), ConstrainedElementKind::Parameter);
        assert_eq!(parameter.describe(), "parameter 2 declared on `Service`");

        let return_value = ConstrainedElement::ReturnValue(ConstrainedReturnValue {
            declaring_type: TypeRef::new("Service"),
            return_type: TypeRef::new("Order"),
            constraints: FxHashSet::default(),
            cascading: true,
        });
        assert_eq!(return_value.kind(), ConstrainedElementKind::ReturnValue);
    }
}
