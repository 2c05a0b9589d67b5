use std::collections::BTreeMap;

use crate::constants::UNCATEGORIZED;
use crate::types::Record;

/// Records bucketed by category. Keys iterate in lexicographic order and
/// each bucket keeps the records in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: BTreeMap<String, Vec<Record>>,
}

impl CategoryGroups {
    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn get(&self, category: &str) -> Option<&[Record]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    fn push(&mut self, record: Record) {
        let label = category_label(&record).to_string();
        self.groups.entry(label).or_default().push(record);
    }
}

/// Category a record is filed under.
pub fn category_label(record: &Record) -> &str {
    record
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(UNCATEGORIZED)
}

/// Partitions records by category. Every record lands in exactly one group.
pub fn group_by_category(records: impl IntoIterator<Item = Record>) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for record in records {
        groups.push(record);
    }
    groups
}
