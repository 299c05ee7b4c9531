use std::fmt;

use serde::Serialize;

use crate::{Edge, GraphModel, Journey};

/// The source edges that make up a finished tour, including the closing edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputTour {
    edges: Vec<Edge>,
}

impl OutputTour {
    /// Re-emits every stored edge between consecutive tour entries.
    ///
    /// For each pair `(a, b)`, edges stored as `a -> b` come first, then edges
    /// stored as `b -> a`. Parallel edges are all kept.
    pub fn reconstruct(graph: &GraphModel<'_>, journey: &Journey<'_>) -> Self {
        let visited = journey.visited();
        let n = visited.len();
        let mut edges = Vec::with_capacity(n);

        for (i, a) in visited.iter().enumerate() {
            let b = visited[(i + 1) % n];
            edges.extend(graph.runs(a, b).cloned());
            edges.extend(graph.runs(b, a).cloned());
        }

        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}

impl fmt::Display for OutputTour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
