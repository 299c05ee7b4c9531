use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::OutputTour;

/// Latest output tour per dataset.
///
/// A solve always replaces the previous result for its dataset, never appends
/// to it. The mutex serializes concurrent solves so a reader never sees a
/// half-written result.
#[derive(Debug, Default)]
pub struct OutputStore {
    results: Mutex<HashMap<String, OutputTour>>,
}

impl OutputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `tour` for `dataset`, returning whatever it replaced.
    pub fn replace(&self, dataset: &str, tour: OutputTour) -> Option<OutputTour> {
        let previous = self.results().insert(dataset.to_string(), tour);
        log::debug!(
            "store: replaced dataset={dataset} previous_edges={}",
            previous.as_ref().map_or(0, OutputTour::len)
        );
        previous
    }

    pub fn clear(&self, dataset: &str) -> Option<OutputTour> {
        self.results().remove(dataset)
    }

    pub fn get(&self, dataset: &str) -> Option<OutputTour> {
        self.results().get(dataset).cloned()
    }

    fn results(&self) -> MutexGuard<'_, HashMap<String, OutputTour>> {
        // The map holds whole values only, so a poisoned lock still guards consistent data.
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
