//! Schema version gate run before any merging.

use crate::error::{MergeError, MergeResult};
use crate::model::Document;

/// Ensure every document declares the same schema version as the first.
///
/// An empty or single-document list always passes.
///
/// # Errors
///
/// Returns [`MergeError::VersionMismatch`] naming the first document and the
/// first document whose version differs from it.
pub fn check_versions(documents: &[Document]) -> MergeResult<()> {
    let Some((first, rest)) = documents.split_first() else {
        return Ok(());
    };
    match rest.iter().find(|doc| doc.version() != first.version()) {
        Some(mismatch) => Err(MergeError::VersionMismatch {
            base: first.name().to_owned(),
            base_version: first.version().to_owned(),
            document: mismatch.name().to_owned(),
            version: mismatch.version().to_owned(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::check_versions;
    use crate::error::MergeError;
    use crate::model::{Document, StackConfig};

    fn doc(name: &str, version: &str) -> Document {
        Document::new(name, version, StackConfig::default())
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![doc("base.yml", "3.4")])]
    #[case::matching(vec![doc("base.yml", "3.4"), doc("override.yml", "3.4")])]
    fn consistent_versions_pass(#[case] documents: Vec<Document>) {
        assert!(check_versions(&documents).is_ok());
    }

    #[rstest]
    fn mismatch_names_both_documents() {
        let documents = vec![
            doc("base.yml", "3.1"),
            doc("same.yml", "3.1"),
            doc("override.yml", "3.4"),
            doc("late.yml", "3.7"),
        ];
        let err = check_versions(&documents).expect_err("versions differ");
        assert!(matches!(
            &err,
            MergeError::VersionMismatch { document, version, .. }
                if document == "override.yml" && version == "3.4"
        ));
        assert_eq!(
            err.to_string(),
            "version mismatched between 'base.yml' (3.1) and 'override.yml' (3.4)"
        );
    }
}
