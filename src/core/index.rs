//! Equivalency index
//!
//! A pure derived view over the equivalency dataset: a map keyed by the
//! normalized (institution, course_code) pair. Rebuilding from the same
//! records is deterministic, so tests can swap datasets and rebuild freely.

use std::collections::HashMap;

use crate::types::EquivalencyRecord;

/// Normalization applied to both index keys and lookup arguments.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Debug, Default)]
pub struct EquivalencyIndex {
    entries: HashMap<(String, String), EquivalencyRecord>,
}

impl EquivalencyIndex {
    /// Build the index from raw records.
    ///
    /// Records with an empty normalized institution or course code are
    /// skipped. Key uniqueness is assumed, not enforced; on collision the
    /// last record wins.
    pub fn build(records: &[EquivalencyRecord]) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            let institution = normalize(&record.institution);
            let course_code = normalize(&record.course_code);
            if institution.is_empty() || course_code.is_empty() {
                continue;
            }
            entries.insert((institution, course_code), record.clone());
        }
        Self { entries }
    }

    /// Case- and whitespace-insensitive lookup, O(1) average.
    pub fn get(&self, institution: &str, course_code: &str) -> Option<&EquivalencyRecord> {
        self.entries
            .get(&(normalize(institution), normalize(course_code)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
