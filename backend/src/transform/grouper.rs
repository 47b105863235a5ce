//! Partition dataset rows by their `section` column.
//!
//! ```text
//! Dataset rows (flat)                 →  Section groups
//! ┌──────────────────────────────┐      ┌─────────────────────────────┐
//! │ profile  name   Ada          │      │ profile: [name, role]       │
//! │ project  -      Compiler     │  →   │ project: [Compiler, Kernel] │
//! │ profile  role   Engineer     │      │ skill:   [langs]            │
//! │ skill    langs  Languages    │      └─────────────────────────────┘
//! │ project  -      Kernel       │
//! └──────────────────────────────┘
//! ```
//!
//! Order inside each group is the order of the rows in the dataset.

use std::collections::HashMap;

use crate::models::{Row, Section};

/// Rows partitioned by section, borrowing from the source slice.
#[derive(Debug, Default)]
pub struct SectionGroups<'a> {
    groups: HashMap<Section, Vec<&'a Row>>,
}

impl<'a> SectionGroups<'a> {
    /// Rows of a section, in dataset order.
    pub fn get(&self, section: Section) -> &[&'a Row] {
        self.groups.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rows in a section.
    pub fn count(&self, section: Section) -> usize {
        self.get(section).len()
    }

    /// Whether the section has no rows.
    pub fn is_empty(&self, section: Section) -> bool {
        self.count(section) == 0
    }
}

/// Group rows by section.
pub fn group_by_section(rows: &[Row]) -> SectionGroups<'_> {
    let mut groups: HashMap<Section, Vec<&Row>> = HashMap::new();

    for row in rows {
        groups.entry(row.section).or_default().push(row);
    }

    SectionGroups { groups }
}
