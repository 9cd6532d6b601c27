//! Directory store
//!
//! Owns the fetched collection and the current criteria. Mutations never
//! render anything; callers re-derive afterwards.

use super::criteria::{FilterCriteria, FilterUpdate, SortCriteria, SortField};
use super::engine;
use super::model::LinkRecord;

#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    records: Vec<LinkRecord>,
    filter: FilterCriteria,
    sort: SortCriteria,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. There is no merge with previous data.
    pub fn replace_collection(&mut self, records: Vec<LinkRecord>) {
        self.records = records;
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.filter.merge(update);
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.sort.select(field);
    }

    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> &SortCriteria {
        &self.sort
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run the engine over the store's own state
    pub fn derive(&self) -> Vec<&LinkRecord> {
        engine::derive(&self.records, &self.filter, &self.sort)
    }
}
