//! Built-in sample datasets.

use tourist_derive::CliValue;

use crate::Dataset;

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "example")]
pub enum Example {
    Europe,
}

impl Example {
    pub fn dataset(self) -> Dataset {
        match self {
            Self::Europe => europe(),
        }
    }
}

const EUROPE_LOCATIONS: [(&str, f64, f64); 15] = [
    ("London", 51.510826, -0.119476),
    ("Paris", 48.860649, 2.351074),
    ("Brussels", 50.8518, 4.375305),
    ("Amsterdam", 52.38042, 4.894409),
    ("Berlin", 52.519929, 13.395081),
    ("Copenhagen", 55.713187, 12.568359),
    ("Stockholm", 59.320579, 18.149414),
    ("Helsinki", 60.190012, 24.938965),
    ("Prague", 50.070362, 14.39209),
    ("Warsaw", 52.253027, 21.049805),
    ("Minsk", 53.884107, 27.553711),
    ("Vilnius", 54.692091, 25.268555),
    ("Riga", 56.959578, 24.11499),
    ("Moscow", 55.752188, 37.625427),
    ("Oslo", 59.94263, 10.722656),
];

// Indexes into EUROPE_LOCATIONS.
const EUROPE_PATHS: [(usize, usize); 22] = [
    (0, 1),
    (0, 2),
    (0, 14),
    (3, 5),
    (5, 6),
    (5, 14),
    (13, 10),
    (13, 12),
    (13, 6),
    (11, 5),
    (9, 5),
    (9, 11),
    (8, 4),
    (8, 3),
    (8, 9),
    (8, 6),
    (2, 4),
    (7, 13),
    (7, 10),
    (1, 8),
    (7, 12),
    (1, 2),
];

/// Fifteen European capitals starting from London.
pub fn europe() -> Dataset {
    let mut dataset = Dataset::new("europe");
    for (idx, (name, lat, lng)) in EUROPE_LOCATIONS.into_iter().enumerate() {
        dataset = dataset.with_location(name, lat, lng, idx == 0);
    }
    for (from, to) in EUROPE_PATHS {
        dataset = dataset.with_path(EUROPE_LOCATIONS[from].0, EUROPE_LOCATIONS[to].0);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::{Example, europe};
    use crate::GraphModel;

    #[test]
    fn europe_is_a_valid_graph_with_london_as_start() {
        let dataset = europe();
        let graph = GraphModel::build(&dataset).expect("europe graph");
        assert_eq!(dataset.locations.len(), 15);
        assert_eq!(dataset.paths.len(), 22);
        assert_eq!(graph.start_locations(), ["London"]);
        assert_eq!(graph.edges_from("Copenhagen").len(), 5);
    }

    #[test]
    fn example_parses_case_insensitively() {
        assert_eq!(Example::parse("Europe").expect("parse"), Example::Europe);
        assert_eq!(Example::Europe.to_string(), "europe");
        assert_eq!(Example::VALUES, ["europe"]);
        let err = Example::parse("asia").expect_err("unknown example");
        assert!(err.to_string().contains("Invalid value for --example: asia (expected europe)"));
    }
}
