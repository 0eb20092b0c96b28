//! # vigil-aggregation
//!
//! Merges per-declaration-site constraint metadata, collected across a
//! type hierarchy, into canonical immutable aggregates.
//!
//! ## Model
//! - one [`ParameterMetaDataBuilder`] per parameter slot and one
//!   [`ReturnValueMetaDataBuilder`] per method, each seeded by the first
//!   record discovery emits for that slot
//! - [`ExecutableMetaDataBuilder`] groups an interleaved record stream
//!   by kind and slot
//! - `build` consumes the builder and yields the immutable aggregate;
//!   frozen values are safe for unrestricted concurrent reads
//!
//! ## Contribution order
//! Discovery must feed the root (most-derived) type's declarations
//! first, then walk up the hierarchy, so a locally declared parameter
//! name shadows inherited ones. Constraint sets and cascade flags merge
//! commutatively and do not depend on this order.
//!
//! Aggregation runs single-threaded during a one-time metadata
//! construction phase; delivering only part of the hierarchy before
//! `build` yields an under-aggregated but valid result, which is the
//! caller's responsibility to avoid.

pub mod executable;
pub mod origin;
pub mod parameter;
pub mod return_value;

pub use executable::{ExecutableMetaData, ExecutableMetaDataBuilder};
pub use origin::OriginAdapter;
pub use parameter::{ParameterMetaData, ParameterMetaDataBuilder};
pub use return_value::{ReturnValueMetaData, ReturnValueMetaDataBuilder};
