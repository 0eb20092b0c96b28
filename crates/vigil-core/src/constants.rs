//! Workspace-wide constants.

/// The implicit validation group a constraint belongs to when its
/// declaration names no group at all. Resolved during build-time
/// adaptation, never stored in raw records.
pub const DEFAULT_GROUP: &str = "Default";
