//! Input documents and the resolved output of a fold.

use camino::{Utf8Path, Utf8PathBuf};

use super::StackConfig;

/// One decoded stack definition layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    name: String,
    version: String,
    path: Option<Utf8PathBuf>,
    config: StackConfig,
}

impl Document {
    /// Construct a document from its identifier, schema version and tree.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, config: StackConfig) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            path: None,
            config,
        }
    }

    /// Attach the path the document was decoded from.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Identifier of the document, usually its file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared schema version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Source path, when the decoder recorded one.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// The decoded tree.
    #[must_use]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Name used in diagnostics: the source path when known, else the name.
    pub(crate) fn label(&self) -> &str {
        self.path.as_ref().map_or(self.name.as_str(), |path| path.as_str())
    }
}

/// Result of folding a document list.
///
/// Carries the name of the first document as provenance: the fold starts
/// from the base file and every other document is applied on top of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStack {
    name: String,
    version: String,
    config: StackConfig,
}

impl ResolvedStack {
    pub(crate) const fn new(name: String, version: String, config: StackConfig) -> Self {
        Self {
            name,
            version,
            config,
        }
    }

    /// Name of the base document the fold started from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Schema version shared by every input document.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The merged tree.
    #[must_use]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Consume the result, returning the merged tree.
    #[must_use]
    pub fn into_config(self) -> StackConfig {
        self.config
    }
}
