//! Metadata carried by every view.
//!
//! A [`SourceInfo`] is attached when the root view is built and copied into
//! each child. Enumeration appends an [`Origin`] to the copy; nothing is ever
//! changed in place on an existing view.

use std::collections::BTreeMap;

use crate::types::Origin;

pub const DEFAULT_TYPE_TAG: &str = "flat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    type_tag: String,
    context: BTreeMap<String, String>,
    origins: Vec<Origin>,
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            type_tag: DEFAULT_TYPE_TAG.to_string(),
            context: BTreeMap::new(),
            origins: Vec::new(),
        }
    }
}

impl SourceInfo {
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Free-form context supplied at construction (e.g. `"file" -> "app.env"`).
    pub fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    /// How this view was reached, outermost enumeration first.
    pub fn origins(&self) -> &[Origin] {
        &self.origins
    }

    pub(crate) fn with_type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = tag.into();
        self
    }

    pub(crate) fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub(crate) fn with_origin(&self, origin: Origin) -> Self {
        let mut info = self.clone();
        info.origins.push(origin);
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tag_is_flat() {
        let info = SourceInfo::default();
        assert_eq!(info.type_tag(), "flat");
        assert!(info.context().is_empty());
        assert!(info.origins().is_empty());
    }

    #[test]
    fn with_origin_leaves_original_untouched() {
        let info = SourceInfo::default().with_context("file", "app.env");
        let child = info.with_origin(Origin::MapEntry {
            parent: "a".into(),
            key: "b".into(),
        });
        assert!(info.origins().is_empty());
        assert_eq!(child.origins().len(), 1);
        assert_eq!(child.context()["file"], "app.env");
    }
}
