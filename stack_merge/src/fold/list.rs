//! Ordered document list builder.

use crate::error::MergeResult;
use crate::model::{Document, ResolvedStack};

use super::resolve;

/// Builder that accumulates [`Document`]s in precedence order.
///
/// Documents pushed later override documents pushed earlier. The list is
/// never reordered.
///
/// ```rust
/// use stack_merge::{Document, DocumentList, StackConfig};
///
/// let mut documents = DocumentList::new();
/// documents.push(Document::new("base.yml", "3.8", StackConfig::default()));
/// documents.push(Document::new("dev.yml", "3.8", StackConfig::default()));
///
/// let resolved = documents.resolve()?;
/// assert_eq!(resolved.name(), "base.yml");
/// # Ok::<_, stack_merge::MergeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentList {
    documents: Vec<Document>,
}

impl DocumentList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Create a list with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Vec::with_capacity(capacity),
        }
    }

    /// Append a document with the highest precedence so far.
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Number of documents in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` when no documents have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over the documents in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Borrow the documents as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[Document] {
        self.documents.as_slice()
    }

    /// Fold the documents into a resolved stack.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self) -> MergeResult<ResolvedStack> {
        resolve(&self.documents)
    }
}

impl FromIterator<Document> for DocumentList {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl Extend<Document> for DocumentList {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        self.documents.extend(iter);
    }
}

impl IntoIterator for DocumentList {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentList {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
