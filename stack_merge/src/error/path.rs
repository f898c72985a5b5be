//! Dotted field paths used to locate merge failures.

use std::fmt;

/// Location of a field inside a stack tree, optionally scoped to the
/// document that introduced it.
///
/// Renders as `override.yml: services.web.ports`, or just the dotted
/// segments when no document is attached.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldPath {
    document: Option<String>,
    segments: Vec<String>,
}

impl FieldPath {
    /// An empty path with no document scope.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            document: None,
            segments: Vec::new(),
        }
    }

    /// An empty path scoped to `document`.
    #[must_use]
    pub fn for_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            segments: Vec::new(),
        }
    }

    /// Returns a new path extended by `segment`.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.into());
        Self {
            document: self.document.clone(),
            segments,
        }
    }

    /// Document that supplied the override side, if known.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Path segments from the tree root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(document) = &self.document {
            write!(f, "{document}: ")?;
        }
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("."))
    }
}
