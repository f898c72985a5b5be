//! Merge rules for services and their nested settings.

use crate::collection::{merge_keyed, replace_element};
use crate::error::{FieldPath, MergeResult};
use crate::model::{
    BuildConfig, HealthCheckConfig, LoggingConfig, ServiceConfig, ServiceNetworkConfig,
};
use crate::rules::{merge_map, merge_map_with, replace_if_present, union_ordered};

use super::extensions::merge_extensions;
use super::{Merge, merge_nested};

impl Merge for ServiceConfig {
    fn merge(self, overlay: Self, path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            name: self.name,

            image: replace_if_present(self.image, overlay.image),
            build: merge_nested(self.build, overlay.build, &path.child("build"))?,
            command: replace_if_present(self.command, overlay.command),
            entrypoint: replace_if_present(self.entrypoint, overlay.entrypoint),
            container_name: replace_if_present(self.container_name, overlay.container_name),
            hostname: replace_if_present(self.hostname, overlay.hostname),
            user: replace_if_present(self.user, overlay.user),
            working_dir: replace_if_present(self.working_dir, overlay.working_dir),
            restart: replace_if_present(self.restart, overlay.restart),
            stop_signal: replace_if_present(self.stop_signal, overlay.stop_signal),
            stop_grace_period: replace_if_present(
                self.stop_grace_period,
                overlay.stop_grace_period,
            ),
            network_mode: replace_if_present(self.network_mode, overlay.network_mode),
            pid: replace_if_present(self.pid, overlay.pid),
            ipc: replace_if_present(self.ipc, overlay.ipc),
            privileged: replace_if_present(self.privileged, overlay.privileged),
            read_only: replace_if_present(self.read_only, overlay.read_only),
            tty: replace_if_present(self.tty, overlay.tty),
            stdin_open: replace_if_present(self.stdin_open, overlay.stdin_open),
            init: replace_if_present(self.init, overlay.init),

            cap_add: union_ordered(self.cap_add, overlay.cap_add),
            cap_drop: union_ordered(self.cap_drop, overlay.cap_drop),
            dns: union_ordered(self.dns, overlay.dns),
            dns_search: union_ordered(self.dns_search, overlay.dns_search),
            security_opt: union_ordered(self.security_opt, overlay.security_opt),
            extra_hosts: union_ordered(self.extra_hosts, overlay.extra_hosts),
            expose: union_ordered(self.expose, overlay.expose),
            env_file: union_ordered(self.env_file, overlay.env_file),
            depends_on: union_ordered(self.depends_on, overlay.depends_on),

            environment: merge_map(self.environment, overlay.environment),
            labels: merge_map(self.labels, overlay.labels),
            sysctls: merge_map(self.sysctls, overlay.sysctls),

            logging: merge_nested(self.logging, overlay.logging, &path.child("logging"))?,
            ports: merge_keyed(
                self.ports,
                overlay.ports,
                &path.child("ports"),
                replace_element,
            )?,
            volumes: merge_keyed(
                self.volumes,
                overlay.volumes,
                &path.child("volumes"),
                replace_element,
            )?,
            secrets: merge_keyed(
                self.secrets,
                overlay.secrets,
                &path.child("secrets"),
                replace_element,
            )?,
            configs: merge_keyed(
                self.configs,
                overlay.configs,
                &path.child("configs"),
                replace_element,
            )?,
            ulimits: merge_map(self.ulimits, overlay.ulimits),
            networks: merge_map_with(self.networks, overlay.networks, merge_attachment),
            deploy: merge_nested(self.deploy, overlay.deploy, &path.child("deploy"))?,
            healthcheck: merge_nested(
                self.healthcheck,
                overlay.healthcheck,
                &path.child("healthcheck"),
            )?,

            extensions: merge_extensions(self.extensions, overlay.extensions, path)?,
        })
    }
}

/// An attachment is replaced as a unit, but only by one that carries
/// details. A bare or empty override attachment keeps the base details.
fn merge_attachment(
    base: Option<ServiceNetworkConfig>,
    overlay: Option<ServiceNetworkConfig>,
) -> Option<ServiceNetworkConfig> {
    match overlay {
        Some(details) if has_details(&details) => Some(details),
        other => base.or(other),
    }
}

fn has_details(details: &ServiceNetworkConfig) -> bool {
    let is_set = |address: &Option<String>| {
        address.as_deref().is_some_and(|value| !value.is_empty())
    };
    !details.aliases.is_empty() || is_set(&details.ipv4_address) || is_set(&details.ipv6_address)
}

impl Merge for BuildConfig {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            context: replace_if_present(self.context, overlay.context),
            dockerfile: replace_if_present(self.dockerfile, overlay.dockerfile),
            network: replace_if_present(self.network, overlay.network),
            target: replace_if_present(self.target, overlay.target),
            args: merge_map(self.args, overlay.args),
            labels: merge_map(self.labels, overlay.labels),
            cache_from: union_ordered(self.cache_from, overlay.cache_from),
            extra_hosts: union_ordered(self.extra_hosts, overlay.extra_hosts),
        })
    }
}

/// Options only merge while both layers agree on the driver. A layer that
/// switches to a different driver replaces the whole logging block, since
/// options are driver-specific.
impl Merge for LoggingConfig {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        let switches_driver = matches!(
            (&self.driver, &overlay.driver),
            (Some(base_driver), Some(overlay_driver)) if base_driver != overlay_driver
        );
        if switches_driver {
            return Ok(overlay);
        }
        Ok(Self {
            driver: replace_if_present(self.driver, overlay.driver),
            options: merge_map(self.options, overlay.options),
        })
    }
}

impl Merge for HealthCheckConfig {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            test: replace_if_present(self.test, overlay.test),
            interval: replace_if_present(self.interval, overlay.interval),
            timeout: replace_if_present(self.timeout, overlay.timeout),
            start_period: replace_if_present(self.start_period, overlay.start_period),
            retries: replace_if_present(self.retries, overlay.retries),
            disable: replace_if_present(self.disable, overlay.disable),
        })
    }
}
