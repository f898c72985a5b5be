//! Document builders for merge tests.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use stack_merge_test_helpers::fixtures;
//!
//! let merged = fixtures::merge_service(
//!     json!({"image": "web:1", "cap_add": ["NET_ADMIN"]}),
//!     json!({"cap_add": ["SYS_ADMIN"]}),
//! )?;
//! assert_eq!(merged.cap_add, ["NET_ADMIN", "SYS_ADMIN"]);
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use stack_merge::{Document, ServiceConfig, StackConfig, resolve};

/// Schema version used by documents that do not care about versioning.
pub const VERSION: &str = "3.8";

/// Name of the single service built by [`service_document`].
pub const SERVICE: &str = "foo";

/// Decode `tree` into a [`Document`].
///
/// # Errors
///
/// Returns an error when `tree` does not decode into a stack tree.
pub fn document(name: &str, version: &str, tree: Value) -> Result<Document> {
    let config: StackConfig = serde_json::from_value(tree)
        .with_context(|| format!("decode stack document '{name}'"))?;
    Ok(Document::new(name, version, config))
}

/// Build a document holding a single service named [`SERVICE`].
///
/// # Errors
///
/// Returns an error when `service` does not decode into a service.
pub fn service_document(name: &str, service: Value) -> Result<Document> {
    let services = Map::from_iter([(SERVICE.to_owned(), service)]);
    let tree = Map::from_iter([(String::from("services"), Value::Object(services))]);
    document(name, VERSION, Value::Object(tree))
}

/// Merge `overlay` on top of `base` as two single-service documents and
/// return the resolved service.
///
/// # Errors
///
/// Returns an error when either side fails to decode, the merge fails or the
/// resolved stack lacks the service.
pub fn merge_service(base: Value, overlay: Value) -> Result<ServiceConfig> {
    let documents = [
        service_document("base.yml", base)?,
        service_document("override.yml", overlay)?,
    ];
    let resolved = resolve(&documents)?;
    resolved
        .config()
        .service(SERVICE)
        .cloned()
        .with_context(|| format!("service '{SERVICE}' missing from resolved stack"))
}
