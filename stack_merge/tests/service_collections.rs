//! Keyed collection behaviour for ports, mounts and file references.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use stack_merge::{
    MergeError, ServiceFileReference, ServicePortConfig, ServiceVolumeConfig, resolve,
};
use test_helpers::fixtures;

fn port(target: u32, published: Option<u32>) -> ServicePortConfig {
    ServicePortConfig {
        target,
        published,
        ..ServicePortConfig::default()
    }
}

fn reference(source: &str) -> ServiceFileReference {
    ServiceFileReference {
        source: source.to_owned(),
        ..ServiceFileReference::default()
    }
}

#[rstest]
#[case::distinct_published_ports(
    json!([{"target": 80, "published": 8080}]),
    json!([{"target": 80, "published": 8081}]),
    vec![port(80, Some(8080)), port(80, Some(8081))],
)]
#[case::same_published_port_is_replaced(
    json!([{"target": 80, "published": 8080}]),
    json!([{"target": 81, "published": 8080}]),
    vec![port(81, Some(8080))],
)]
#[case::output_sorted_by_published_port(
    json!([{"target": 90, "published": 9090}, {"target": 80, "published": 8080}]),
    json!([{"target": 85, "published": 8085}]),
    vec![port(80, Some(8080)), port(85, Some(8085)), port(90, Some(9090))],
)]
#[case::ephemeral_ports_never_collide(
    json!([{"target": 80}]),
    json!([{"target": 80}, {"target": 443, "published": 0}]),
    vec![port(80, None), port(80, None), port(443, Some(0))],
)]
#[case::ephemeral_ports_sort_first(
    json!([{"target": 80, "published": 8080}]),
    json!([{"target": 53}]),
    vec![port(53, None), port(80, Some(8080))],
)]
fn merges_ports_by_published_port(
    #[case] base: Value,
    #[case] overlay: Value,
    #[case] expected: Vec<ServicePortConfig>,
) -> Result<()> {
    let merged = fixtures::merge_service(json!({"ports": base}), json!({"ports": overlay}))?;
    ensure!(
        merged.ports == expected,
        "unexpected ports: {:?}",
        merged.ports
    );
    Ok(())
}

#[rstest]
fn replaced_port_keeps_no_base_fields() -> Result<()> {
    let merged = fixtures::merge_service(
        json!({"ports": [{"target": 80, "published": 8080, "mode": "ingress", "protocol": "tcp"}]}),
        json!({"ports": [{"target": 81, "published": 8080}]}),
    )?;
    ensure!(merged.ports == [port(81, Some(8080))], "base mode or protocol leaked");
    Ok(())
}

#[rstest]
#[case::secrets("secrets")]
#[case::configs("configs")]
fn dedups_file_references_by_source(#[case] field: &str) -> Result<()> {
    let merged = fixtures::merge_service(
        json!({ field: [{"source": "foo", "target": "/run/foo"}, {"source": "bar"}] }),
        json!({ field: [{"source": "foo", "mode": 256}, {"source": "baz"}] }),
    )?;
    let references = match field {
        "secrets" => merged.secrets,
        _ => merged.configs,
    };
    let expected = vec![
        reference("bar"),
        reference("baz"),
        ServiceFileReference {
            mode: Some(256),
            ..reference("foo")
        },
    ];
    ensure!(
        references == expected,
        "unexpected {field}: {references:?}"
    );
    Ok(())
}

#[rstest]
fn sorts_disjoint_secrets_by_source() -> Result<()> {
    let merged = fixtures::merge_service(
        json!({"secrets": [{"source": "foo"}]}),
        json!({"secrets": [{"source": "bar"}]}),
    )?;
    ensure!(
        merged.secrets == [reference("bar"), reference("foo")],
        "secrets not sorted: {:?}",
        merged.secrets
    );
    Ok(())
}

#[rstest]
fn replaces_mount_with_same_target() -> Result<()> {
    let merged = fixtures::merge_service(
        json!({"image": "baz", "volumes": [
            {"type": "volume", "source": "sourceVolume", "target": "/var/app", "read_only": true}
        ]}),
        json!({"image": "baz", "volumes": [
            {"type": "volume", "source": "/local", "target": "/var/app"}
        ]}),
    )?;
    let expected = ServiceVolumeConfig {
        kind: Some("volume".into()),
        source: Some("/local".into()),
        target: "/var/app".into(),
        ..ServiceVolumeConfig::default()
    };
    ensure!(
        merged.volumes == [expected],
        "unexpected mounts: {:?}",
        merged.volumes
    );
    Ok(())
}

#[rstest]
fn keeps_mounts_with_distinct_targets_sorted() -> Result<()> {
    let merged = fixtures::merge_service(
        json!({"volumes": [{"target": "/var/lib"}]}),
        json!({"volumes": [{"target": "/etc/app"}]}),
    )?;
    let targets: Vec<&str> = merged
        .volumes
        .iter()
        .map(|mount| mount.target.as_str())
        .collect();
    ensure!(targets == ["/etc/app", "/var/lib"], "unexpected targets: {targets:?}");
    Ok(())
}

#[rstest]
#[case::mount_target(
    json!({"volumes": [{"target": ""}]}),
    "override.yml: services.foo.volumes",
)]
#[case::secret_source(
    json!({"secrets": [{"source": ""}]}),
    "override.yml: services.foo.secrets",
)]
fn empty_identity_key_is_a_field_error(
    #[case] overlay: Value,
    #[case] expected_path: &str,
) -> Result<()> {
    let documents = [
        fixtures::service_document("base.yml", json!({"image": "foo"}))?,
        fixtures::service_document("override.yml", overlay)?,
    ];
    let Err(err) = resolve(&documents) else {
        anyhow::bail!("expected an empty identity key to fail the merge");
    };
    ensure!(
        matches!(err, MergeError::MergeField { .. }),
        "unexpected error: {err:?}"
    );
    let path = err.path().map(ToString::to_string);
    ensure!(
        path.as_deref() == Some(expected_path),
        "unexpected path: {path:?}"
    );
    Ok(())
}
