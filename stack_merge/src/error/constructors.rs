//! Constructors for `MergeError` variants that carry path context.

use super::{FieldPath, KeyError, MergeError, ValueShape};

impl MergeError {
    /// Construct a shape mismatch error for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_merge::{FieldPath, MergeError, ValueShape};
    ///
    /// let path = FieldPath::root().child("x-deploy");
    /// let err = MergeError::shape_mismatch(path, ValueShape::Object, ValueShape::Array);
    /// assert!(matches!(err, MergeError::MergeType { .. }));
    /// ```
    #[must_use]
    pub const fn shape_mismatch(path: FieldPath, base: ValueShape, overlay: ValueShape) -> Self {
        Self::MergeType {
            path,
            base,
            overlay,
        }
    }

    /// Wrap a key extraction failure raised while merging `path`.
    #[must_use]
    pub const fn field(path: FieldPath, source: KeyError) -> Self {
        Self::MergeField { path, source }
    }

    /// Returns the field path carried by the error, when there is one.
    #[must_use]
    pub const fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MergeType { path, .. } | Self::MergeField { path, .. } => Some(path),
            Self::NoDocuments | Self::VersionMismatch { .. } => None,
        }
    }
}
