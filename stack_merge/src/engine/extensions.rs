//! Deep merge for free-form extension values.
//!
//! Extension values have no schema, so they merge by shape: mappings merge
//! key by key, sequences and scalars are replaced wholesale, and an override
//! `null` leaves the base untouched. A mapping meeting a non-mapping is an
//! authoring error and aborts the merge.

use serde_json::{Map, Value};

use crate::error::{FieldPath, MergeError, MergeResult, ValueShape};
use crate::model::Extensions;

/// Merge two extension tables key by key.
///
/// # Errors
///
/// Returns [`MergeError::MergeType`] when a key holds a mapping on one side
/// and a non-null, non-mapping value on the other.
pub fn merge_extensions(
    base: Extensions,
    overlay: Extensions,
    path: &FieldPath,
) -> MergeResult<Extensions> {
    let mut merged = base;
    for (key, overlay_value) in overlay {
        let value = match merged.remove(&key) {
            Some(existing) => merge_value(existing, overlay_value, &path.child(key.as_str()))?,
            None => overlay_value,
        };
        merged.insert(key, value);
    }
    Ok(merged)
}

/// Overlay `overlay` onto `base`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use stack_merge::FieldPath;
/// use stack_merge::engine::extensions::merge_value;
///
/// let merged = merge_value(
///     json!({"a": 1, "b": {"x": 1}}),
///     json!({"b": {"y": 2}, "c": [3]}),
///     &FieldPath::root(),
/// )?;
/// assert_eq!(merged, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": [3]}));
/// # Ok::<_, stack_merge::MergeError>(())
/// ```
///
/// # Errors
///
/// Returns [`MergeError::MergeType`] on a mapping/non-mapping conflict.
pub fn merge_value(base: Value, overlay: Value, path: &FieldPath) -> MergeResult<Value> {
    match (base, overlay) {
        (base_value, Value::Null) => Ok(base_value),
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_object(base_map, overlay_map, path).map(Value::Object)
        }
        (Value::Null, overlay_value) => Ok(overlay_value),
        (base_value, overlay_value) if base_value.is_object() || overlay_value.is_object() => Err(
            MergeError::shape_mismatch(
                path.clone(),
                ValueShape::of(&base_value),
                ValueShape::of(&overlay_value),
            ),
        ),
        (_, overlay_value) => Ok(overlay_value),
    }
}

fn merge_object(
    base: Map<String, Value>,
    overlay: Map<String, Value>,
    path: &FieldPath,
) -> MergeResult<Map<String, Value>> {
    let mut merged = base;
    for (key, overlay_value) in overlay {
        let value = match merged.remove(&key) {
            Some(existing) => merge_value(existing, overlay_value, &path.child(key.as_str()))?,
            None => overlay_value,
        };
        merged.insert(key, value);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{merge_extensions, merge_value};
    use crate::error::{FieldPath, MergeError, ValueShape};
    use crate::model::Extensions;

    #[rstest]
    #[case::nested_objects(
        json!({"outer": {"inner": false, "keep": 1}}),
        json!({"outer": {"inner": true}}),
        json!({"outer": {"inner": true, "keep": 1}}),
    )]
    #[case::arrays_replace(json!({"arr": [1, 2, 3]}), json!({"arr": [4]}), json!({"arr": [4]}))]
    #[case::scalars_replace(json!({"n": 1, "s": "a"}), json!({"n": 0, "s": ""}), json!({"n": 0, "s": ""}))]
    #[case::null_keeps_base(json!({"n": 1}), json!({"n": null}), json!({"n": 1}))]
    #[case::null_base_takes_override(json!({"n": null}), json!({"n": {"a": 1}}), json!({"n": {"a": 1}}))]
    #[case::scalar_shape_change(json!({"n": "1"}), json!({"n": [1]}), json!({"n": [1]}))]
    fn values_merge_by_shape(#[case] base: Value, #[case] overlay: Value, #[case] expected: Value) {
        let merged = merge_value(base, overlay, &FieldPath::root()).expect("values merge");
        assert_eq!(merged, expected);
    }

    #[rstest]
    fn mapping_against_sequence_reports_path() {
        let base = Extensions::from([(String::from("x-deploy"), json!({"replicas": {"min": 1}}))]);
        let overlay = Extensions::from([(String::from("x-deploy"), json!({"replicas": [2]}))]);
        let err = merge_extensions(base, overlay, &FieldPath::for_document("override.yml"))
            .expect_err("shape mismatch");
        match err {
            MergeError::MergeType {
                path,
                base,
                overlay,
            } => {
                assert_eq!(path.to_string(), "override.yml: x-deploy.replicas");
                assert_eq!(base, ValueShape::Object);
                assert_eq!(overlay, ValueShape::Array);
            }
            other => panic!("expected MergeType, got {other:?}"),
        }
    }

    #[rstest]
    fn new_extension_keys_are_added() {
        let base = Extensions::from([(String::from("x-a"), json!(1))]);
        let overlay = Extensions::from([(String::from("x-b"), json!(2))]);
        let merged = merge_extensions(base, overlay, &FieldPath::root()).expect("merge");
        assert_eq!(merged.len(), 2);
    }
}
