//! Identity keys for elements of keyed collections.
//!
//! An identity key decides when an element in an override document refers to
//! the same logical entity as an element in the base. Keys are only used while
//! merging; they are never stored as a separate field.

use std::fmt;

use crate::error::KeyError;
use crate::model::{ServiceConfig, ServiceFileReference, ServicePortConfig, ServiceVolumeConfig};

/// Elements of a sequence that merges by identity rather than by position.
pub trait Keyed {
    /// Natural identity of an element.
    type Key: Ord + Clone + fmt::Debug;

    /// Extract the identity key.
    ///
    /// Returns `Ok(None)` for anonymous elements, which never collide with
    /// any other element.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] when the identity field is malformed.
    fn identity_key(&self) -> Result<Option<Self::Key>, KeyError>;
}

/// Ports are identified by their published port. Ephemeral ports (no
/// published port, or port `0`) are anonymous.
impl Keyed for ServicePortConfig {
    type Key = u32;

    fn identity_key(&self) -> Result<Option<u32>, KeyError> {
        Ok(self.published.filter(|published| *published != 0))
    }
}

impl Keyed for ServiceVolumeConfig {
    type Key = String;

    fn identity_key(&self) -> Result<Option<String>, KeyError> {
        non_empty(&self.target, "volume", "target")
    }
}

/// Secret and config references share a type and are keyed by source.
impl Keyed for ServiceFileReference {
    type Key = String;

    fn identity_key(&self) -> Result<Option<String>, KeyError> {
        non_empty(&self.source, "secret or config reference", "source")
    }
}

impl Keyed for ServiceConfig {
    type Key = String;

    fn identity_key(&self) -> Result<Option<String>, KeyError> {
        non_empty(&self.name, "service", "name")
    }
}

fn non_empty(
    value: &str,
    collection: &'static str,
    field: &'static str,
) -> Result<Option<String>, KeyError> {
    if value.is_empty() {
        return Err(KeyError::Empty { collection, field });
    }
    Ok(Some(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        KeyError, Keyed, ServiceConfig, ServiceFileReference, ServicePortConfig,
        ServiceVolumeConfig,
    };

    #[rstest]
    #[case::published(Some(8080), Some(8080))]
    #[case::ephemeral(None, None)]
    #[case::zero_is_ephemeral(Some(0), None)]
    fn port_key_is_published_port(#[case] published: Option<u32>, #[case] expected: Option<u32>) {
        let port = ServicePortConfig {
            target: 80,
            published,
            ..ServicePortConfig::default()
        };
        assert_eq!(port.identity_key(), Ok(expected));
    }

    #[rstest]
    fn volume_key_is_target() {
        let mount = ServiceVolumeConfig {
            source: Some(String::from("data")),
            target: String::from("/var/lib/data"),
            ..ServiceVolumeConfig::default()
        };
        assert_eq!(mount.identity_key(), Ok(Some(String::from("/var/lib/data"))));
    }

    #[rstest]
    fn empty_volume_target_is_rejected() {
        let mount = ServiceVolumeConfig::default();
        assert_eq!(
            mount.identity_key(),
            Err(KeyError::Empty {
                collection: "volume",
                field: "target",
            })
        );
    }

    #[rstest]
    fn file_reference_key_ignores_target() {
        let reference = ServiceFileReference {
            source: String::from("db_password"),
            target: Some(String::from("password")),
            ..ServiceFileReference::default()
        };
        assert_eq!(
            reference.identity_key(),
            Ok(Some(String::from("db_password")))
        );
    }

    #[rstest]
    fn unnamed_service_is_rejected() {
        let service = ServiceConfig::default();
        assert!(service.identity_key().is_err());
    }
}
