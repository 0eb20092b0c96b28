use crate::raw::TypeRef;

/// Aggregation-phase errors.
///
/// Both variants are structural problems in the discovered hierarchy.
/// They abort metadata initialization for the affected type and are never
/// raised during per-validation calls; retrying does not change the
/// outcome because the hierarchy is static once loaded.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("{actual} cannot be added to the aggregator for {expected}")]
    ElementRejected { expected: String, actual: String },

    #[error(
        "parameter {index} is declared as `{expected}` but `{declaring_type}` declares it as `{found}`"
    )]
    DeclaredTypeConflict {
        index: u16,
        expected: TypeRef,
        found: TypeRef,
        declaring_type: TypeRef,
    },

    #[error(
        "return value is declared as `{expected}` but `{declaring_type}` declares it as `{found}`"
    )]
    ReturnTypeConflict {
        expected: TypeRef,
        found: TypeRef,
        declaring_type: TypeRef,
    },
}
