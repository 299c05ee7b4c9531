use serde::Serialize;

use crate::{GraphModel, Journey};

/// Great-circle figures for a closed tour, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TourMetrics {
    pub legs: usize,
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

impl TourMetrics {
    pub fn measure(graph: &GraphModel<'_>, journey: &Journey<'_>) -> Self {
        let visited = journey.visited();
        let n = visited.len();

        if n < 2 {
            log::info!("metrics: n={n} so there's nothing to report");
            return Self::default();
        }

        let distances: Vec<f64> = (0..n)
            .filter_map(|i| {
                let from = graph.location(visited[i])?;
                let to = graph.location(visited[(i + 1) % n])?;
                Some(from.dist(to))
            })
            .collect();
        let legs = distances.len();
        let total: f64 = distances.iter().sum();
        let longest = distances.iter().copied().fold(0.0_f64, f64::max);
        let average = total / legs.max(1) as f64;

        log::info!("metrics: legs={legs} total_m={total:.0} longest_m={longest:.0} avg_m={average:.0}");

        Self {
            legs,
            total,
            longest,
            average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TourMetrics;
    use crate::{Dataset, GraphModel, TourFinder};

    #[test]
    fn closed_square_counts_the_return_leg() {
        let dataset = Dataset::new("square")
            .with_location("A", 0.0, 0.0, true)
            .with_location("B", 0.0, 1.0, false)
            .with_location("C", 1.0, 1.0, false)
            .with_location("D", 1.0, 0.0, false)
            .with_path("A", "B")
            .with_path("B", "C")
            .with_path("C", "D")
            .with_path("D", "A");
        let graph = GraphModel::build(&dataset).expect("graph");
        let journey = TourFinder::new(&graph).find("A").expect("search");

        let metrics = TourMetrics::measure(&graph, &journey);
        assert_eq!(metrics.legs, 4);
        // One degree is roughly 111 km at the equator.
        assert!((440_000.0..450_000.0).contains(&metrics.total), "got {}", metrics.total);
        assert!(metrics.longest >= metrics.average);
        assert!((metrics.average * 4.0 - metrics.total).abs() < 1e-6);
    }

    #[test]
    fn trivial_tour_reports_zeroes() {
        let dataset = Dataset::new("lonely").with_location("A", 0.0, 0.0, true);
        let graph = GraphModel::build(&dataset).expect("graph");
        let journey = TourFinder::new(&graph).find("A").expect("search");
        assert_eq!(TourMetrics::measure(&graph, &journey), TourMetrics::default());
    }
}
