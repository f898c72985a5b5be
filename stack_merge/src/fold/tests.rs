//! Unit tests for the fold driver.

use std::collections::BTreeMap;

use rstest::rstest;
use serde_json::json;

use super::{DocumentList, resolve};
use crate::error::MergeError;
use crate::model::{Document, ServiceConfig, ServicePortConfig, ServiceVolumeConfig, StackConfig};

fn port(published: u32, target: u32) -> ServicePortConfig {
    ServicePortConfig {
        target,
        published: Some(published),
        ..ServicePortConfig::default()
    }
}

fn stack(services: Vec<ServiceConfig>) -> StackConfig {
    StackConfig {
        services,
        ..StackConfig::default()
    }
}

#[rstest]
fn empty_list_is_rejected() {
    assert!(matches!(resolve(&[]), Err(MergeError::NoDocuments)));
    assert!(matches!(
        DocumentList::new().resolve(),
        Err(MergeError::NoDocuments)
    ));
}

#[rstest]
fn single_document_is_returned_unchanged() {
    // Deliberately unsorted: a lone document is copied, not normalised.
    let config = stack(vec![
        ServiceConfig {
            ports: vec![port(9090, 90), port(8080, 80)],
            ..ServiceConfig::named("web")
        },
        ServiceConfig::named("api"),
    ]);
    let document = Document::new("base.yml", "3.8", config.clone());
    let resolved = resolve(std::slice::from_ref(&document)).expect("single document resolves");
    assert_eq!(resolved.name(), "base.yml");
    assert_eq!(resolved.version(), "3.8");
    assert_eq!(resolved.config(), &config);
    assert_eq!(document.config(), &config);
}

#[rstest]
fn version_mismatch_aborts_before_merging() {
    let documents = [
        Document::new("base.yml", "3.1", StackConfig::default()),
        Document::new(
            "override.yml",
            "3.4",
            stack(vec![ServiceConfig::default()]),
        ),
    ];
    assert!(matches!(
        resolve(&documents),
        Err(MergeError::VersionMismatch { .. })
    ));
}

#[rstest]
fn later_documents_take_precedence() {
    let layer = |image: &str| {
        stack(vec![ServiceConfig {
            image: Some(image.to_owned()),
            ..ServiceConfig::named("web")
        }])
    };
    let documents: DocumentList = [
        Document::new("base.yml", "3.8", layer("web:1")),
        Document::new("staging.yml", "3.8", layer("web:2")),
        Document::new("prod.yml", "3.8", layer("web:3")),
    ]
    .into_iter()
    .collect();
    let resolved = documents.resolve().expect("documents resolve");
    assert_eq!(resolved.name(), "base.yml");
    let web = resolved.config().service("web").expect("web service");
    assert_eq!(web.image.as_deref(), Some("web:3"));
    assert_eq!(documents.len(), 3);
}

#[rstest]
fn inputs_are_not_modified() {
    let base = Document::new(
        "base.yml",
        "3.8",
        stack(vec![ServiceConfig {
            labels: BTreeMap::from([(String::from("tier"), String::from("web"))]),
            ..ServiceConfig::named("web")
        }]),
    );
    let overlay = Document::new(
        "override.yml",
        "3.8",
        stack(vec![ServiceConfig {
            labels: BTreeMap::from([(String::from("team"), String::from("edge"))]),
            ..ServiceConfig::named("web")
        }]),
    );
    let documents = [base, overlay];
    let snapshot = documents.clone();
    let resolved = resolve(&documents).expect("documents resolve");
    assert_eq!(documents, snapshot);
    let web = resolved.config().service("web").expect("web service");
    assert_eq!(web.labels.len(), 2);
}

#[rstest]
fn merge_errors_name_the_override_source() {
    let base = Document::new(
        "base.yml",
        "3.8",
        stack(vec![ServiceConfig::named("web")]),
    );
    let overlay = Document::new(
        "override.yml",
        "3.8",
        stack(vec![ServiceConfig {
            volumes: vec![ServiceVolumeConfig::default()],
            ..ServiceConfig::named("web")
        }]),
    )
    .with_path("deploy/override.yml");
    let err = resolve(&[base, overlay]).expect_err("empty mount target");
    let path = err.path().expect("error carries a path");
    assert_eq!(path.document(), Some("deploy/override.yml"));
    assert_eq!(path.to_string(), "deploy/override.yml: services.web.volumes");
}

#[rstest]
fn extension_conflicts_abort_the_fold() {
    let with_extension = |value: serde_json::Value| StackConfig {
        extensions: BTreeMap::from([(String::from("x-common"), value)]),
        ..StackConfig::default()
    };
    let documents = [
        Document::new("base.yml", "3.8", with_extension(json!({"env": {"A": "1"}}))),
        Document::new("override.yml", "3.8", with_extension(json!({"env": "A=2"}))),
    ];
    let err = resolve(&documents).expect_err("shape mismatch");
    assert!(matches!(err, MergeError::MergeType { .. }));
    assert!(err.to_string().contains("x-common.env"));
}

const fn summary(documents: &DocumentList) -> (usize, bool, usize) {
    (documents.len(), documents.is_empty(), documents.as_slice().len())
}

#[rstest]
fn list_accessors_are_usable_in_const_context() {
    let mut documents = DocumentList::new();
    assert_eq!(summary(&documents), (0, true, 0));
    documents.push(Document::new("base.yml", "3.8", StackConfig::default()));
    assert_eq!(summary(&documents), (1, false, 1));
}
