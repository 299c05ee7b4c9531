use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Edge, Location, Result};

const DEFAULT_DATASET_NAME: &str = "default";

/// Locations and the paths between them, as supplied by the data layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Key under which the output store keeps this dataset's result.
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub paths: Vec<Edge>,
}

fn default_name() -> String {
    DEFAULT_DATASET_NAME.to_string()
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_NAME)
    }
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locations: Vec::new(),
            paths: Vec::new(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_location(
        mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        start: bool,
    ) -> Self {
        self.locations
            .push(Location::new(name, latitude, longitude, start));
        self
    }

    pub fn with_path(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.paths.push(Edge::new(start, end));
        self
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={} locations={} paths={}",
            self.name,
            self.locations.len(),
            self.paths.len()
        )
    }
}
