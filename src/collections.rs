use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use serde_json::Value;

use crate::{HelperError, KEY_TOKEN_SEPARATOR, Result};

/// Selects the entries whose first `_`-separated key token equals `prefix`.
///
/// With `maintain_prefix` unset, a leading `"{prefix}_"` is dropped from each
/// selected key, so `billing_city` becomes `city`. Keys that collide after
/// stripping keep their first position and the last value. Input order is
/// preserved.
pub fn subset_by_prefix<V: Clone>(
    data: &IndexMap<String, V>,
    prefix: &str,
    maintain_prefix: bool,
) -> IndexMap<String, V> {
    let mut subset = IndexMap::new();

    for (key, value) in data {
        let first_token = key.split(KEY_TOKEN_SEPARATOR).next().unwrap_or(key);
        if first_token != prefix {
            continue;
        }

        let new_key = if maintain_prefix {
            key.clone()
        } else {
            key.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(KEY_TOKEN_SEPARATOR))
                .unwrap_or(key)
                .to_owned()
        };
        subset.insert(new_key, value.clone());
    }

    subset
}

/// Moves the value stored under `original` to `new`.
///
/// If `new` already exists its value is replaced in place; otherwise the entry
/// is appended.
///
/// # Errors
/// Returns `HelperError::MissingKey` and leaves the map untouched if
/// `original` is absent.
pub fn array_key_rename<K, V, Q>(map: &mut IndexMap<K, V>, original: &Q, new: K) -> Result<()>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K> + ToString,
{
    let value = map
        .shift_remove(original)
        .ok_or_else(|| HelperError::MissingKey(original.to_string()))?;
    map.insert(new, value);
    Ok(())
}

/// Returns true if every value is itself an array or an object.
/// An empty map has no flat values and counts as multidimensional.
pub fn is_multidimensional<K>(map: &IndexMap<K, Value>) -> bool {
    map.values().all(|value| value.is_array() || value.is_object())
}
