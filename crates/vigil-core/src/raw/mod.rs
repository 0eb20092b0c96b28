//! Raw constraint metadata as discovered at each declaration site.
//!
//! A raw record describes one constrained element at one level of a type
//! hierarchy, before any merging. Discovery (reflection, annotation
//! scanning) runs outside this workspace and delivers these records in
//! hierarchy order; the aggregation crate folds them into immutable
//! per-slot aggregates.

mod constraint;
mod element;
mod type_ref;

pub use constraint::{ConstraintDescriptor, ConstraintLocation, ConstraintOrigin, MetaConstraint};
pub use element::{
    ConstrainedElement, ConstrainedElementKind, ConstrainedParameter, ConstrainedReturnValue,
};
pub use type_ref::TypeRef;
