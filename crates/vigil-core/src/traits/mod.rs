mod adapter;
mod builder;

pub use adapter::ConstraintAdapter;
pub use builder::MetaDataBuilder;
