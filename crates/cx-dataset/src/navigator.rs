//! Active-entry bookkeeping.

use crate::schema::{Dataset, Record};

/// Holds the loaded dataset and which entry is active.
///
/// The index is always clamped into range; stepping past either end is a
/// no-op rather than a wrap.
#[derive(Debug, Clone, Default)]
pub struct RecordNavigator {
    dataset: Dataset,
    index: usize,
}

impl RecordNavigator {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, index: 0 }
    }

    /// Replace the dataset and go back to the first entry.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.index = 0;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// 0-based index of the active entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based position, as shown to users.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn current(&self) -> Option<&Record> {
        self.dataset.get(self.index)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len()
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    /// Jump to a 0-based index, clamped into range.
    pub fn goto_index(&mut self, index: usize) {
        self.index = index.min(self.len().saturating_sub(1));
    }

    /// Jump to a 1-based position, clamped into range. `0` means the first entry.
    pub fn goto_position(&mut self, position: usize) {
        self.goto_index(position.saturating_sub(1));
    }
}
