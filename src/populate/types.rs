//! Population types

/// One relation to inline into the result documents
///
/// `path` names the local field holding the reference(s); the referenced
/// collection is matched on `_id`. Multiple instances compose
/// independently.
#[derive(Debug, Clone, Default)]
pub struct PopulateOptions {
    /// Target collection holding the referenced documents
    pub on: String,
    /// Local field holding the reference(s)
    pub path: String,
    /// Fields to keep from the referenced documents; empty keeps all
    pub projection: Vec<String>,
}

impl PopulateOptions {
    /// Describe a relation at `path` referencing collection `on`
    pub fn new(on: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            on: on.into(),
            path: path.into(),
            projection: Vec::new(),
        }
    }

    /// Limit the inlined documents to the given fields
    #[must_use]
    pub fn with_projection(mut self, fields: Vec<String>) -> Self {
        self.projection = fields;
        self
    }
}

/// How many documents a populated find decodes
///
/// Explicit mode instead of a negative-limit sentinel on the find
/// options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultMode {
    /// Decode every matching document
    #[default]
    Multiple,
    /// Decode only the first matching document, ignore the rest
    Single,
}

impl ResultMode {
    /// Check if this mode decodes at most one document
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single)
    }
}
