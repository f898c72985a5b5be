//! Structural merge over the stack tree.
//!
//! Every structured type implements [`Merge`], and each implementation is the
//! rule table for that type: it names every field and the policy applied to
//! it. Struct literals without `..` make that table exhaustive, so a new field
//! cannot silently fall back to some implicit rule.
//!
//! | Policy | Used for |
//! |---|---|
//! | [`rules::replace_if_present`] | optional scalars, commands, health check tests |
//! | [`rules::union_ordered`] | capability, DNS and similar string lists |
//! | [`rules::merge_map`] | labels, environment, options, ulimits, top-level resources |
//! | [`collection::merge_keyed`] | ports, mounts, secret/config references, services |
//! | [`merge_nested`] | optional sub-structures such as `build` and `deploy` |
//! | [`extensions::merge_extensions`] | free-form extension values |
//!
//! [`rules::replace_if_present`]: crate::rules::replace_if_present
//! [`rules::union_ordered`]: crate::rules::union_ordered
//! [`rules::merge_map`]: crate::rules::merge_map
//! [`collection::merge_keyed`]: crate::collection::merge_keyed

mod deploy;
pub mod extensions;
mod service;

use crate::collection::merge_keyed;
use crate::error::{FieldPath, MergeResult};
use crate::model::StackConfig;
use crate::rules::merge_map;

use self::extensions::merge_extensions;

/// A type that can absorb an override layer of itself.
pub trait Merge: Sized {
    /// Merge `overlay` on top of `self`, returning the combined value.
    ///
    /// `path` locates `self` in the tree and is used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::MergeError`] when the two values cannot be
    /// reconciled.
    fn merge(self, overlay: Self, path: &FieldPath) -> MergeResult<Self>;
}

/// Merge optional sub-structures: recurse when both sides are present,
/// otherwise keep whichever side is.
///
/// # Errors
///
/// Propagates errors from the nested [`Merge`] implementation.
pub fn merge_nested<T: Merge>(
    base: Option<T>,
    overlay: Option<T>,
    path: &FieldPath,
) -> MergeResult<Option<T>> {
    match (base, overlay) {
        (Some(base_value), Some(overlay_value)) => base_value.merge(overlay_value, path).map(Some),
        (base_value, None) => Ok(base_value),
        (None, overlay_value) => Ok(overlay_value),
    }
}

/// Top-level resources (networks, volumes, secrets, configs) are replaced as
/// a whole per key; services merge structurally by name.
impl Merge for StackConfig {
    fn merge(self, overlay: Self, path: &FieldPath) -> MergeResult<Self> {
        let services_path = path.child("services");
        let services = merge_keyed(
            self.services,
            overlay.services,
            &services_path,
            |base, overlay_service| {
                let service_path = services_path.child(base.name.as_str());
                base.merge(overlay_service, &service_path)
            },
        )?;
        Ok(Self {
            services,
            networks: merge_map(self.networks, overlay.networks),
            volumes: merge_map(self.volumes, overlay.volumes),
            secrets: merge_map(self.secrets, overlay.secrets),
            configs: merge_map(self.configs, overlay.configs),
            extensions: merge_extensions(self.extensions, overlay.extensions, path)?,
        })
    }
}
