//! Serde adapter storing services as a name-keyed mapping.
//!
//! Stack documents key services by name, while the engine keeps them as a
//! sequence whose identity key is the name. Decoding moves each key into
//! [`ServiceConfig::name`]; encoding writes it back out as the key.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serializer};

use super::ServiceConfig;

pub(super) fn serialize<S>(services: &[ServiceConfig], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(services.len()))?;
    for service in services {
        map.serialize_entry(&service.name, service)?;
    }
    map.end()
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<ServiceConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let by_name = BTreeMap::<String, ServiceConfig>::deserialize(deserializer)?;
    Ok(by_name
        .into_iter()
        .map(|(name, service)| ServiceConfig { name, ..service })
        .collect())
}
