//! Error types produced by the merge engine.

mod constructors;
mod path;
mod shape;
mod types;

pub use path::FieldPath;
pub use shape::ValueShape;
pub use types::{KeyError, MergeError};

/// Result alias used throughout the engine.
pub type MergeResult<T> = Result<T, MergeError>;
