//! Extensions for attaching field paths to rule failures.
//!
//! Key extractors report a bare [`KeyError`]; the collection merge knows
//! where in the tree it is working. This trait joins the two without a
//! `.map_err(|e| MergeError::field(path.clone(), e))` at every call site.
//!
//! # Examples
//!
//! ```
//! use stack_merge::{FieldPath, KeyError, KeyResultExt, MergeError};
//!
//! let failed: Result<(), KeyError> = Err(KeyError::Empty {
//!     collection: "volume",
//!     field: "target",
//! });
//! let err = failed
//!     .at_path(&FieldPath::root().child("volumes"))
//!     .expect_err("still an error");
//! assert!(matches!(err, MergeError::MergeField { .. }));
//! ```

use crate::error::{FieldPath, KeyError, MergeError, MergeResult};

/// Map a [`KeyError`] result into a [`MergeResult`] located at a path.
pub trait KeyResultExt<T> {
    /// Convert the error into [`MergeError::MergeField`] at `path`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn at_path(self, path: &FieldPath) -> MergeResult<T>;
}

impl<T> KeyResultExt<T> for Result<T, KeyError> {
    fn at_path(self, path: &FieldPath) -> MergeResult<T> {
        self.map_err(|source| MergeError::field(path.clone(), source))
    }
}
