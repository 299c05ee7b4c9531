use std::fmt;

use serde::{Deserialize, Serialize};

/// An undirected connection between two locations, referenced by name.
///
/// The stored direction carries no meaning for traversal but is kept so that
/// reconstructed output re-emits each edge exactly as it was supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub start_location_name: String,
    pub end_location_name: String,
}

impl Edge {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_location_name: start.into(),
            end_location_name: end.into(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start_location_name
    }

    pub fn end(&self) -> &str {
        &self.end_location_name
    }

    pub fn is_loop(&self) -> bool {
        self.start_location_name == self.end_location_name
    }

    /// True when stored as `from -> to`.
    pub fn runs(&self, from: &str, to: &str) -> bool {
        self.start_location_name == from && self.end_location_name == to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start_location_name, self.end_location_name)
    }
}
