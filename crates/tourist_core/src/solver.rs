use std::time::Instant;

use serde::Serialize;

use crate::{
    Dataset, Error, GraphModel, OutputStore, OutputTour, Result, TourFinder, TourMetrics,
    TouristOptions,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Tour,
    /// The start has no edge leading back to it. An empty result, not an error.
    NoTour,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub dataset: String,
    pub start: String,
    pub outcome: Outcome,
    /// Tour order without the closing return to `start`.
    pub tour: Vec<String>,
    pub output_paths: OutputTour,
    pub metrics: TourMetrics,
}

impl Solution {
    pub fn has_tour(&self) -> bool {
        self.outcome == Outcome::Tour
    }
}

/// Finds the longest closed tour of `dataset` and records its edges in `store`.
///
/// The stored result for the dataset is dropped before anything else, so a
/// failed or empty run never leaves a stale tour behind.
pub fn solve_longest_tour(
    dataset: &Dataset,
    options: &TouristOptions,
    store: &OutputStore,
) -> Result<Solution> {
    let now = Instant::now();

    log::info!("solver: deleting old results dataset={}", dataset.name);
    store.clear(&dataset.name);

    let graph = GraphModel::build(dataset)?;
    let starts = graph.start_locations();
    let &[start] = starts.as_slice() else {
        let count = graph.count_start_locations();
        log::warn!("solver: exactly 1 location must be the start point found={count}");
        return Err(Error::Setup { count });
    };

    let journey = TourFinder::new(&graph)
        .with_max_expansions(options.max_expansions)
        .find(start)?;

    if journey.is_empty() {
        log::info!(
            "solver: no tour found start={start} time={:.3}s",
            now.elapsed().as_secs_f32()
        );
        return Ok(Solution {
            dataset: dataset.name.clone(),
            start: start.to_string(),
            outcome: Outcome::NoTour,
            tour: Vec::new(),
            output_paths: OutputTour::default(),
            metrics: TourMetrics::default(),
        });
    }

    let output_paths = OutputTour::reconstruct(&graph, &journey);
    let metrics = TourMetrics::measure(&graph, &journey);
    store.replace(&dataset.name, output_paths.clone());

    log::info!(
        "solver: finished start={start} locations={} output_paths={} time={:.3}s",
        journey.len(),
        output_paths.len(),
        now.elapsed().as_secs_f32()
    );

    Ok(Solution {
        dataset: dataset.name.clone(),
        start: start.to_string(),
        outcome: Outcome::Tour,
        tour: journey.to_names(),
        output_paths,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::{Outcome, solve_longest_tour};
    use crate::{Dataset, Edge, Error, OutputStore, TouristOptions, demo};

    fn triangle() -> Dataset {
        Dataset::new("triangle")
            .with_location("A", 0.0, 0.0, true)
            .with_location("B", 0.0, 1.0, false)
            .with_location("C", 1.0, 0.0, false)
            .with_path("A", "B")
            .with_path("B", "C")
            .with_path("C", "A")
    }

    #[test]
    fn triangle_is_solved_and_stored() {
        let store = OutputStore::new();
        let solution =
            solve_longest_tour(&triangle(), &TouristOptions::default(), &store).expect("solve");

        assert!(solution.has_tour());
        assert_eq!(solution.start, "A");
        assert_eq!(solution.tour, ["A", "C", "B"]);
        assert_eq!(solution.output_paths.len(), 3);
        assert_eq!(store.get("triangle"), Some(solution.output_paths.clone()));
        assert_eq!(solution.metrics.legs, 3);
    }

    #[test]
    fn two_start_locations_is_a_setup_error_and_writes_nothing() {
        let store = OutputStore::new();
        let dataset = triangle();
        solve_longest_tour(&dataset, &TouristOptions::default(), &store).expect("first solve");

        let mut broken = dataset.clone();
        broken.locations[1].start = true;
        let err = solve_longest_tour(&broken, &TouristOptions::default(), &store)
            .expect_err("two starts should fail");

        assert!(matches!(err, Error::Setup { count: 2 }));
        assert!(store.get("triangle").is_none());
    }

    #[test]
    fn zero_start_locations_is_a_setup_error() {
        let mut dataset = triangle();
        dataset.locations[0].start = false;
        let err = solve_longest_tour(&dataset, &TouristOptions::default(), &OutputStore::new())
            .expect_err("no start should fail");
        assert!(matches!(err, Error::Setup { count: 0 }));
    }

    #[test]
    fn no_edges_back_to_start_is_an_empty_result() {
        let store = OutputStore::new();
        let dataset = Dataset::new("island")
            .with_location("A", 0.0, 0.0, true)
            .with_location("B", 0.0, 1.0, false)
            .with_location("C", 1.0, 0.0, false)
            .with_path("B", "C");

        let solution =
            solve_longest_tour(&dataset, &TouristOptions::default(), &store).expect("solve");
        assert_eq!(solution.outcome, Outcome::NoTour);
        assert!(solution.tour.is_empty());
        assert!(solution.output_paths.is_empty());
        assert!(store.get("island").is_none());
    }

    #[test]
    fn second_run_replaces_the_first() {
        let store = OutputStore::new();
        let options = TouristOptions::default();

        let first = solve_longest_tour(&demo::europe(), &options, &store).expect("first");
        let second = solve_longest_tour(&demo::europe(), &options, &store).expect("second");

        assert_eq!(first, second);
        assert_eq!(store.get("europe"), Some(second.output_paths.clone()));
        assert_eq!(
            store.get("europe").map(|tour| tour.len()),
            Some(first.output_paths.len())
        );
    }

    #[test]
    fn changed_graph_replaces_the_stored_tour() {
        let store = OutputStore::new();
        let options = TouristOptions::default();
        solve_longest_tour(&triangle(), &options, &store).expect("triangle");

        let square = triangle()
            .with_location("D", 1.0, 1.0, false)
            .with_path("C", "D")
            .with_path("D", "B");
        let solution = solve_longest_tour(&square, &options, &store).expect("square");

        let stored = store.get("triangle").expect("stored");
        assert_eq!(stored.len(), 4);
        assert_eq!(stored, solution.output_paths);
        assert!(stored.iter().any(|e| *e == Edge::new("D", "B")));
    }

    #[test]
    fn dangling_path_fails_fast() {
        let dataset = triangle().with_path("C", "Nowhere");
        let err = solve_longest_tour(&dataset, &TouristOptions::default(), &OutputStore::new())
            .expect_err("dangling path should fail");
        assert!(matches!(err, Error::DataIntegrity(_)));
    }

    #[test]
    fn expansion_limit_is_taken_from_options() {
        let options = TouristOptions {
            max_expansions: 10,
            ..TouristOptions::default()
        };
        let err = solve_longest_tour(&demo::europe(), &options, &OutputStore::new())
            .expect_err("europe needs more than ten expansions");
        assert!(matches!(err, Error::SearchLimit { limit: 10 }));
    }
}
