//! Column annotation tags read by the finishing pass

use std::fmt;

/// Placeholder tag written into a column comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTag {
    /// SMALLINT standing in for a boolean
    Bool,
    /// CHAR(16) OCTETS standing in for a uuid
    Guid,
    /// Key value assigned by a generator/trigger
    PkGen,
}

impl ColumnTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnTag::Bool => "#BOOL#",
            ColumnTag::Guid => "#GUID#",
            ColumnTag::PkGen => "#PK_GEN#",
        }
    }
}

impl fmt::Display for ColumnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column name to tag mapping, kept in insertion order
///
/// Setting a tag on a column that already has one replaces the tag but keeps
/// the column where it was first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAnnotations {
    entries: Vec<(String, ColumnTag)>,
}

impl ColumnAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the mapping with `column` tagged as `tag`
    pub fn with(mut self, column: impl Into<String>, tag: ColumnTag) -> Self {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = tag,
            None => self.entries.push((column, tag)),
        }
        self
    }

    /// Return the mapping with every entry of `other` applied on top
    pub fn merge(self, other: ColumnAnnotations) -> Self {
        other
            .entries
            .into_iter()
            .fold(self, |acc, (column, tag)| acc.with(column, tag))
    }

    pub fn get(&self, column: &str) -> Option<ColumnTag> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, tag)| *tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnTag)> {
        self.entries.iter().map(|(name, tag)| (name.as_str(), *tag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let annotations = ColumnAnnotations::new()
            .with("Id", ColumnTag::Guid)
            .with("IsActive", ColumnTag::Bool)
            .with("Id", ColumnTag::PkGen);

        let entries: Vec<_> = annotations.iter().collect();
        assert_eq!(
            entries,
            vec![("Id", ColumnTag::PkGen), ("IsActive", ColumnTag::Bool)]
        );
    }

    #[test]
    fn test_merge_appends_new_columns() {
        let left = ColumnAnnotations::new().with("A", ColumnTag::Bool);
        let right = ColumnAnnotations::new()
            .with("B", ColumnTag::Guid)
            .with("A", ColumnTag::PkGen);

        let merged = left.merge(right);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("A"), Some(ColumnTag::PkGen));
        assert_eq!(merged.iter().nth(1), Some(("B", ColumnTag::Guid)));
    }

    #[test]
    fn test_tag_text() {
        assert_eq!(ColumnTag::Bool.to_string(), "#BOOL#");
        assert_eq!(ColumnTag::Guid.to_string(), "#GUID#");
        assert_eq!(ColumnTag::PkGen.to_string(), "#PK_GEN#");
    }
}
