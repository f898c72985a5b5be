//! Sequential fold of a document list into one resolved stack.

mod list;

use tracing::{debug, trace};

use crate::engine::Merge;
use crate::error::{FieldPath, MergeError, MergeResult};
use crate::model::{Document, ResolvedStack, StackConfig};
use crate::version::check_versions;

pub use list::DocumentList;

/// Fold `documents` into one resolved stack.
///
/// The first document seeds the accumulator; each later document is merged
/// on top of it as an override layer, in list order. The result carries the
/// first document's name.
///
/// # Examples
///
/// ```
/// use stack_merge::{Document, ServiceConfig, StackConfig, resolve};
///
/// let base = Document::new(
///     "base.yml",
///     "3.8",
///     StackConfig {
///         services: vec![ServiceConfig {
///             image: Some(String::from("web:1")),
///             ..ServiceConfig::named("web")
///         }],
///         ..StackConfig::default()
///     },
/// );
/// let overlay = Document::new(
///     "prod.yml",
///     "3.8",
///     StackConfig {
///         services: vec![ServiceConfig {
///             image: Some(String::from("web:2")),
///             ..ServiceConfig::named("web")
///         }],
///         ..StackConfig::default()
///     },
/// );
///
/// let resolved = resolve(&[base, overlay])?;
/// assert_eq!(resolved.name(), "base.yml");
/// let web = resolved.config().service("web").expect("web is defined");
/// assert_eq!(web.image.as_deref(), Some("web:2"));
/// # Ok::<_, stack_merge::MergeError>(())
/// ```
///
/// # Errors
///
/// Returns [`MergeError::NoDocuments`] for an empty list,
/// [`MergeError::VersionMismatch`] when versions differ, and any error raised
/// while merging a layer. No partial result is returned.
pub fn resolve(documents: &[Document]) -> MergeResult<ResolvedStack> {
    let Some((first, rest)) = documents.split_first() else {
        return Err(MergeError::NoDocuments);
    };
    check_versions(documents)?;
    debug!(
        base = first.name(),
        version = first.version(),
        overrides = rest.len(),
        "resolving stack documents"
    );

    let mut fold = StackFold::seed(first);
    for document in rest {
        fold.merge_document(document)?;
    }
    Ok(fold.finish())
}

/// Accumulator for a fold in progress.
struct StackFold {
    name: String,
    version: String,
    config: StackConfig,
}

impl StackFold {
    fn seed(document: &Document) -> Self {
        Self {
            name: document.name().to_owned(),
            version: document.version().to_owned(),
            config: document.config().clone(),
        }
    }

    fn merge_document(&mut self, document: &Document) -> MergeResult<()> {
        trace!(document = document.name(), "applying override document");
        let base = std::mem::take(&mut self.config);
        let path = FieldPath::for_document(document.label());
        self.config = base.merge(document.config().clone(), &path)?;
        Ok(())
    }

    fn finish(self) -> ResolvedStack {
        ResolvedStack::new(self.name, self.version, self.config)
    }
}

#[cfg(test)]
mod tests;
