//! Read-only descriptor views handed to consumers.
//!
//! Descriptors mirror an aggregate plus the group-sequence context the
//! consumer resolved; they carry no reference back to the aggregation
//! machinery and can be rebuilt from the same aggregate at any time.

mod parameter;
mod return_value;

pub use parameter::ParameterDescriptor;
pub use return_value::ReturnValueDescriptor;
