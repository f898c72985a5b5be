//! Identity-keyed merge for collections stored as sequences.

use std::collections::BTreeMap;

use crate::error::{FieldPath, MergeResult};
use crate::keys::Keyed;
use crate::result_ext::KeyResultExt;

/// Merge two sequences by identity key.
///
/// Base elements keep their rank; an override element whose key matches a
/// base element is combined with it in place via `combine(base, overlay)`.
/// Other override elements are appended with fresh ranks, in their own
/// order. Anonymous elements never collide.
///
/// The result is sorted by `(identity key, rank)`, so anonymous elements come
/// first and keyed elements follow in ascending key order. The sort makes the
/// output independent of how the decoder ordered its input.
///
/// # Errors
///
/// Returns [`MergeError::MergeField`](crate::MergeError::MergeField) when an
/// identity key cannot be extracted, and propagates any error returned by
/// `combine`.
pub fn merge_keyed<T, F>(
    base: Vec<T>,
    overlay: Vec<T>,
    path: &FieldPath,
    mut combine: F,
) -> MergeResult<Vec<T>>
where
    T: Keyed,
    F: FnMut(T, T) -> MergeResult<T>,
{
    let mut keyed: BTreeMap<T::Key, (usize, T)> = BTreeMap::new();
    let mut anonymous: Vec<(usize, T)> = Vec::new();

    for (next_rank, element) in base.into_iter().chain(overlay).enumerate() {
        let key = element.identity_key().at_path(path)?;
        let Some(identity) = key else {
            anonymous.push((next_rank, element));
            continue;
        };
        let entry = match keyed.remove(&identity) {
            Some((rank, existing)) => (rank, combine(existing, element)?),
            None => (next_rank, element),
        };
        keyed.insert(identity, entry);
    }

    let mut ordered: Vec<(Option<T::Key>, usize, T)> = anonymous
        .into_iter()
        .map(|(rank, element)| (None, rank, element))
        .chain(
            keyed
                .into_iter()
                .map(|(key, (rank, element))| (Some(key), rank, element)),
        )
        .collect();
    ordered.sort_by(|left, right| (&left.0, left.1).cmp(&(&right.0, right.1)));
    Ok(ordered.into_iter().map(|(_, _, element)| element).collect())
}

/// Combiner for collections whose colliding elements are replaced whole.
///
/// # Errors
///
/// Never fails; the signature matches [`merge_keyed`]'s combiner.
pub fn replace_element<T>(_base: T, overlay: T) -> MergeResult<T> {
    Ok(overlay)
}
