//! Field-level merge policies.
//!
//! Each policy is a pure function from the base value and the override value
//! to the merged value. The structural engine picks one per field; nothing
//! here inspects types at run time.

use std::collections::BTreeMap;

/// Marker for element types compared by plain equality in
/// [`union_ordered`].
///
/// Structured elements have no agreed notion of "the same entry", so lists of
/// them need an explicit rule instead of a set union.
pub trait Scalar: Eq + Clone {}

impl Scalar for String {}
impl Scalar for bool {}
impl Scalar for u16 {}
impl Scalar for u32 {}
impl Scalar for u64 {}
impl Scalar for i64 {}

/// Default rule: the override wins whenever it is present.
///
/// A present zero, `false` or empty string still overrides.
///
/// ```
/// use stack_merge::rules::replace_if_present;
///
/// assert_eq!(replace_if_present(Some(3), Some(0)), Some(0));
/// assert_eq!(replace_if_present(Some(3), None), Some(3));
/// ```
#[must_use]
pub fn replace_if_present<T>(base: Option<T>, overlay: Option<T>) -> Option<T> {
    overlay.or(base)
}

/// Whole-value replace for sequences: a non-empty override supersedes the
/// base sequence entirely.
#[must_use]
pub fn replace_if_non_empty<T>(base: Vec<T>, overlay: Vec<T>) -> Vec<T> {
    if overlay.is_empty() { base } else { overlay }
}

/// Ordered-set union: the base in its original order, followed by override
/// elements not already present.
///
/// ```
/// use stack_merge::rules::union_ordered;
///
/// let merged = union_ordered(
///     vec![String::from("NET_ADMIN")],
///     vec![String::from("SYS_ADMIN"), String::from("NET_ADMIN")],
/// );
/// assert_eq!(merged, ["NET_ADMIN", "SYS_ADMIN"]);
/// ```
#[must_use]
pub fn union_ordered<T: Scalar>(base: Vec<T>, overlay: Vec<T>) -> Vec<T> {
    let mut merged = base;
    for item in overlay {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }
    merged
}

/// Key-wise map merge: the union of both key sets, with the override value
/// winning for shared keys.
///
/// ```
/// use std::collections::BTreeMap;
/// use stack_merge::rules::merge_map;
///
/// let base = BTreeMap::from([("a", 1), ("b", 2)]);
/// let overlay = BTreeMap::from([("b", 3), ("c", 4)]);
/// assert_eq!(
///     merge_map(base, overlay),
///     BTreeMap::from([("a", 1), ("b", 3), ("c", 4)]),
/// );
/// ```
#[must_use]
pub fn merge_map<K: Ord, V>(base: BTreeMap<K, V>, overlay: BTreeMap<K, V>) -> BTreeMap<K, V> {
    merge_map_with(base, overlay, |_, overlay_value| overlay_value)
}

/// Key-wise map merge where values present on both sides are combined by
/// `combine(base_value, overlay_value)`.
#[must_use]
pub fn merge_map_with<K, V, F>(
    base: BTreeMap<K, V>,
    overlay: BTreeMap<K, V>,
    mut combine: F,
) -> BTreeMap<K, V>
where
    K: Ord,
    F: FnMut(V, V) -> V,
{
    let mut merged = base;
    for (key, overlay_value) in overlay {
        let value = match merged.remove(&key) {
            Some(base_value) => combine(base_value, overlay_value),
            None => overlay_value,
        };
        merged.insert(key, value);
    }
    merged
}
