//! Primary error enums for merge runs.

use thiserror::Error;

use super::{FieldPath, ValueShape};

/// Errors that abort a merge run.
///
/// Every variant is fatal: the fold driver never returns a partially merged
/// tree alongside an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// The document list was empty.
    #[error("no stack documents supplied; at least one document is required")]
    NoDocuments,

    /// Two documents declare different schema versions.
    #[error(
        "version mismatched between '{base}' ({base_version}) and '{document}' ({version})"
    )]
    VersionMismatch {
        /// Name of the first document in the list.
        base: String,
        /// Version declared by the first document.
        base_version: String,
        /// Name of the first document whose version differs.
        document: String,
        /// Version declared by `document`.
        version: String,
    },

    /// Base and override disagree on the shape of a deep-merged field.
    #[error("cannot merge '{path}': base holds {base} but override holds {overlay}")]
    MergeType {
        /// Location of the offending field.
        path: FieldPath,
        /// Shape found in the accumulated base.
        base: ValueShape,
        /// Shape found in the override document.
        overlay: ValueShape,
    },

    /// A registered merge rule failed for a field.
    #[error("failed to merge '{path}': {source}")]
    MergeField {
        /// Location of the offending collection or field.
        path: FieldPath,
        /// Failure reported by the rule.
        #[source]
        source: KeyError,
    },
}

/// Failures raised while extracting identity keys from collection elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KeyError {
    /// The identity field is present but empty.
    #[error("{collection} entry has an empty {field}")]
    Empty {
        /// Human-readable collection name, such as `volume`.
        collection: &'static str,
        /// Name of the identity field, such as `target`.
        field: &'static str,
    },
}
