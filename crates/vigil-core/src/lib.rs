//! # vigil-core
//!
//! Foundation crate for the Vigil constraint metadata engine.
//! Defines the raw declaration records emitted by hierarchy discovery,
//! the constraint model, descriptor views, errors, and the capability
//! traits the aggregation crate implements.

pub mod constants;
pub mod descriptor;
pub mod errors;
pub mod raw;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{MetadataError, MetadataResult};
pub use raw::{
    ConstrainedElement, ConstrainedElementKind, ConstrainedParameter, ConstrainedReturnValue,
    ConstraintDescriptor, ConstraintLocation, ConstraintOrigin, MetaConstraint, TypeRef,
};
