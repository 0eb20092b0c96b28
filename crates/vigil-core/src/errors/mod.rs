mod metadata_error;

pub use metadata_error::MetadataError;

pub type MetadataResult<T> = Result<T, MetadataError>;
