use std::collections::HashMap;

use crate::{Dataset, Edge, Error, Location, Result};

/// One edge as seen from a location.
#[derive(Clone, Copy, Debug)]
pub struct Incident<'a> {
    pub edge: &'a Edge,
    /// The endpoint that is not the queried location.
    pub neighbor: &'a str,
    /// True when the edge is stored as leaving the queried location.
    pub leaving: bool,
}

/// Read-only adjacency view over a validated [`Dataset`].
///
/// Each location maps to its incident edges: first the edges stored as leaving
/// it, then the edges stored as arriving at it, each group in dataset order.
/// The tour finder's tie-break between equally long tours follows this order.
#[derive(Debug)]
pub struct GraphModel<'a> {
    dataset: &'a Dataset,
    by_name: HashMap<&'a str, &'a Location>,
    adjacency: HashMap<&'a str, Vec<Incident<'a>>>,
}

impl<'a> GraphModel<'a> {
    pub fn build(dataset: &'a Dataset) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(dataset.locations.len());
        let mut adjacency = HashMap::with_capacity(dataset.locations.len());

        for location in &dataset.locations {
            if !location.has_valid_coords() {
                return Err(Error::data_integrity(format!(
                    "location {} has invalid coordinates {},{}",
                    location.name, location.latitude, location.longitude
                )));
            }
            if by_name.insert(location.name.as_str(), location).is_some() {
                return Err(Error::data_integrity(format!(
                    "duplicate location name {}",
                    location.name
                )));
            }
            adjacency.insert(location.name.as_str(), Vec::new());
        }

        for edge in &dataset.paths {
            for name in [edge.start(), edge.end()] {
                if !by_name.contains_key(name) {
                    return Err(Error::data_integrity(format!(
                        "path {} -> {} references unknown location {name}",
                        edge.start(),
                        edge.end()
                    )));
                }
            }
            if edge.is_loop() {
                return Err(Error::data_integrity(format!(
                    "path {} -> {} is a self-loop",
                    edge.start(),
                    edge.end()
                )));
            }
        }

        for edge in &dataset.paths {
            push_incident(&mut adjacency, edge.start(), edge, edge.end(), true);
        }
        for edge in &dataset.paths {
            push_incident(&mut adjacency, edge.end(), edge, edge.start(), false);
        }

        log::debug!(
            "graph: dataset={} locations={} paths={}",
            dataset.name,
            dataset.locations.len(),
            dataset.paths.len()
        );

        Ok(Self {
            dataset,
            by_name,
            adjacency,
        })
    }

    pub fn location(&self, name: &str) -> Option<&'a Location> {
        self.by_name.get(name).copied()
    }

    /// All edges touching `name`, whichever end it is stored at.
    /// Unknown names have no edges.
    pub fn edges_from(&self, name: &str) -> &[Incident<'a>] {
        self.adjacency.get(name).map_or(&[][..], Vec::as_slice)
    }

    /// Edges stored exactly as `from -> to`, in dataset order.
    pub fn runs<'s>(&'s self, from: &'s str, to: &'s str) -> impl Iterator<Item = &'a Edge> + 's {
        self.edges_from(from)
            .iter()
            .filter(move |incident| incident.leaving && incident.neighbor == to)
            .map(|incident| incident.edge)
    }

    pub fn count_start_locations(&self) -> usize {
        self.dataset.locations.iter().filter(|l| l.start).count()
    }

    pub fn start_locations(&self) -> Vec<&'a str> {
        self.dataset
            .locations
            .iter()
            .filter(|l| l.start)
            .map(|l| l.name.as_str())
            .collect()
    }
}

fn push_incident<'a>(
    adjacency: &mut HashMap<&'a str, Vec<Incident<'a>>>,
    at: &'a str,
    edge: &'a Edge,
    neighbor: &'a str,
    leaving: bool,
) {
    if let Some(incidents) = adjacency.get_mut(at) {
        incidents.push(Incident {
            edge,
            neighbor,
            leaving,
        });
    }
}
