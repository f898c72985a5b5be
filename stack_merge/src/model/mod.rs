//! Typed stack tree consumed and produced by the merge engine.
//!
//! Every optional scalar is an [`Option`], so a document that sets a field to
//! zero, `false` or an empty string is distinguishable from one that leaves
//! the field out. Collections default to empty and maps are [`BTreeMap`]s so
//! serialised output is ordered by key.

mod deploy;
mod document;
mod extension_fields;
mod resources;
mod service;
mod services_map;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use deploy::{
    DeployConfig, Placement, PlacementPreference, ResourceSpec, Resources, RestartPolicy,
    UpdateConfig,
};
pub use document::{Document, ResolvedStack};
pub use extension_fields::EXTENSION_PREFIX;
pub use resources::{
    ConfigObjConfig, FileObjectConfig, IpamConfig, IpamPool, NetworkConfig, SecretConfig,
    VolumeConfig,
};
pub use service::{
    BuildConfig, HealthCheckConfig, LoggingConfig, ServiceConfig, ServiceConfigObjConfig,
    ServiceFileReference, ServiceNetworkConfig, ServicePortConfig, ServiceSecretConfig,
    ServiceVolumeConfig, ShellCommand, UlimitsConfig,
};

/// Free-form values kept under extension keys (for example `x-defaults`).
///
/// Decoding rejects keys that lack [`EXTENSION_PREFIX`].
pub type Extensions = BTreeMap<String, serde_json::Value>;

/// Root of a stack definition tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Service definitions, identified by name.
    #[serde(
        default,
        with = "services_map",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub services: Vec<ServiceConfig>,
    /// Top-level network definitions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub networks: BTreeMap<String, NetworkConfig>,
    /// Top-level named volume definitions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub volumes: BTreeMap<String, VolumeConfig>,
    /// Top-level secret definitions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secrets: BTreeMap<String, SecretConfig>,
    /// Top-level config object definitions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configs: BTreeMap<String, ConfigObjConfig>,
    /// `x-` extension fields carried verbatim.
    #[serde(flatten, deserialize_with = "extension_fields::deserialize")]
    pub extensions: Extensions,
}

impl StackConfig {
    /// Look up a service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|service| service.name == name)
    }
}
