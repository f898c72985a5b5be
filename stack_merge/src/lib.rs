//! Multi-document merge engine for declarative stack definitions.
//!
//! A stack is described by an ordered list of [`Document`]s: a base plus any
//! number of override layers. [`resolve`] folds them into one
//! [`ResolvedStack`], applying a field-specific rule to every part of the
//! tree instead of a blind deep merge. Keyed collections such as ports and
//! mounts are aligned by their natural identity and emitted sorted, string
//! lists are unioned in order, maps merge key by key and optional scalars are
//! replaced only when the override actually sets them.
//!
//! The engine performs no I/O. Decoding documents and acting on the result
//! belong to the caller.

pub mod collection;
pub mod engine;
mod error;
mod fold;
pub mod keys;
mod model;
mod result_ext;
pub mod rules;
pub mod version;

pub use engine::{Merge, merge_nested};
pub use error::{FieldPath, KeyError, MergeError, MergeResult, ValueShape};
pub use fold::{DocumentList, resolve};
pub use model::{
    BuildConfig, ConfigObjConfig, DeployConfig, Document, EXTENSION_PREFIX, Extensions,
    FileObjectConfig, HealthCheckConfig, IpamConfig, IpamPool, LoggingConfig, NetworkConfig,
    Placement, PlacementPreference, ResolvedStack, ResourceSpec, Resources, RestartPolicy,
    SecretConfig, ServiceConfig, ServiceConfigObjConfig, ServiceFileReference,
    ServiceNetworkConfig, ServicePortConfig, ServiceSecretConfig, ServiceVolumeConfig,
    ShellCommand, StackConfig, UlimitsConfig, UpdateConfig, VolumeConfig,
};
pub use result_ext::KeyResultExt;
pub use version::check_versions;
