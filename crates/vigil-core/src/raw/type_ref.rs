use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a type in the validated hierarchy.
///
/// Discovery runs outside this workspace, so types are carried as stable
/// fully-qualified names rather than live type handles. Two refs naming
/// the same string are the same type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
