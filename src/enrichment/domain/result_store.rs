use super::{CveId, ResultRow};
use std::collections::BTreeMap;

/// Identifier to report row mapping owned by a single run.
///
/// Loaded from the previous report, updated one identifier at a time and
/// written back in full at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    rows: BTreeMap<CveId, ResultRow>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cve: &CveId) -> Option<&ResultRow> {
        self.rows.get(cve)
    }

    /// Replaces the row of one identifier
    pub fn insert(&mut self, cve: CveId, row: ResultRow) {
        self.rows.insert(cve, row);
    }

    /// Whether the stored row for `cve` can be carried forward without crawling.
    ///
    /// Only rows pointing at a VulDB detail page count as done. An empty URL
    /// or the `n/a` sentinel (stored with an empty timestamp) is crawled again,
    /// so entries VulDB publishes later are picked up.
    pub fn is_reusable(&self, cve: &CveId) -> bool {
        self.rows
            .get(cve)
            .is_some_and(|row| row.vuldb.has_detail_page())
    }

    /// Drops every row whose identifier is not accepted by `keep`
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&CveId) -> bool,
    {
        self.rows.retain(|cve, _| keep(cve));
    }

    /// Rows in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&CveId, &ResultRow)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(CveId, ResultRow)> for ResultStore {
    fn from_iter<I: IntoIterator<Item = (CveId, ResultRow)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
