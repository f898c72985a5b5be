//! Merge rules for swarm deployment settings.

use crate::error::{FieldPath, MergeResult};
use crate::model::{DeployConfig, Placement, ResourceSpec, Resources, RestartPolicy, UpdateConfig};
use crate::rules::{merge_map, replace_if_non_empty, replace_if_present, union_ordered};

use super::{Merge, merge_nested};

impl Merge for DeployConfig {
    fn merge(self, overlay: Self, path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            mode: replace_if_present(self.mode, overlay.mode),
            replicas: replace_if_present(self.replicas, overlay.replicas),
            endpoint_mode: replace_if_present(self.endpoint_mode, overlay.endpoint_mode),
            labels: merge_map(self.labels, overlay.labels),
            update_config: merge_nested(
                self.update_config,
                overlay.update_config,
                &path.child("update_config"),
            )?,
            rollback_config: merge_nested(
                self.rollback_config,
                overlay.rollback_config,
                &path.child("rollback_config"),
            )?,
            resources: merge_nested(
                self.resources,
                overlay.resources,
                &path.child("resources"),
            )?,
            restart_policy: merge_nested(
                self.restart_policy,
                overlay.restart_policy,
                &path.child("restart_policy"),
            )?,
            placement: merge_nested(
                self.placement,
                overlay.placement,
                &path.child("placement"),
            )?,
        })
    }
}

impl Merge for UpdateConfig {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            parallelism: replace_if_present(self.parallelism, overlay.parallelism),
            delay: replace_if_present(self.delay, overlay.delay),
            failure_action: replace_if_present(self.failure_action, overlay.failure_action),
            monitor: replace_if_present(self.monitor, overlay.monitor),
            max_failure_ratio: replace_if_present(
                self.max_failure_ratio,
                overlay.max_failure_ratio,
            ),
            order: replace_if_present(self.order, overlay.order),
        })
    }
}

impl Merge for Resources {
    fn merge(self, overlay: Self, path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            limits: merge_nested(self.limits, overlay.limits, &path.child("limits"))?,
            reservations: merge_nested(
                self.reservations,
                overlay.reservations,
                &path.child("reservations"),
            )?,
        })
    }
}

impl Merge for ResourceSpec {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            cpus: replace_if_present(self.cpus, overlay.cpus),
            memory: replace_if_present(self.memory, overlay.memory),
            pids: replace_if_present(self.pids, overlay.pids),
        })
    }
}

impl Merge for RestartPolicy {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            condition: replace_if_present(self.condition, overlay.condition),
            delay: replace_if_present(self.delay, overlay.delay),
            max_attempts: replace_if_present(self.max_attempts, overlay.max_attempts),
            window: replace_if_present(self.window, overlay.window),
        })
    }
}

/// Preferences are structured and order-sensitive, so a non-empty override
/// list replaces the base list rather than being unioned with it.
impl Merge for Placement {
    fn merge(self, overlay: Self, _path: &FieldPath) -> MergeResult<Self> {
        Ok(Self {
            constraints: union_ordered(self.constraints, overlay.constraints),
            preferences: replace_if_non_empty(self.preferences, overlay.preferences),
            max_replicas_per_node: replace_if_present(
                self.max_replicas_per_node,
                overlay.max_replicas_per_node,
            ),
        })
    }
}
