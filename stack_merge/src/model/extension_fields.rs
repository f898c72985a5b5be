//! Serde adapter for the extension fields flattened into model types.
//!
//! Flattening collects every key the surrounding struct does not name, so
//! the adapter only accepts keys carrying the extension prefix. Anything else
//! is a misspelt or unsupported field and fails decoding.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::Extensions;

/// Prefix marking a free-form extension key.
pub const EXTENSION_PREFIX: &str = "x-";

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Extensions, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = Extensions::deserialize(deserializer)?;
    if let Some(key) = fields.keys().find(|key| !key.starts_with(EXTENSION_PREFIX)) {
        return Err(D::Error::custom(format!(
            "unknown field `{key}`; extension fields must start with `{EXTENSION_PREFIX}`"
        )));
    }
    Ok(fields)
}
