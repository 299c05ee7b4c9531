use std::collections::HashSet;

/// A partial or finished tour: where the walk stands now and the locations
/// passed on the way, in order.
///
/// Every journey owns its `visited` list; [`Journey::step`] clones it, so
/// siblings in the search queue never share state. The set mirrors the list
/// for constant-time membership checks.
#[derive(Clone, Debug)]
pub struct Journey<'a> {
    current: &'a str,
    visited: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> Journey<'a> {
    /// The zero-length journey standing at `start`.
    pub fn origin(start: &'a str) -> Self {
        Self {
            current: start,
            visited: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Moves to `next`, recording the current location as visited.
    pub fn step(&self, next: &'a str) -> Self {
        let mut visited = Vec::with_capacity(self.visited.len() + 1);
        visited.extend_from_slice(&self.visited);
        visited.push(self.current);

        let mut seen = self.seen.clone();
        seen.insert(self.current);

        Self {
            current: next,
            visited,
            seen,
        }
    }

    pub fn current(&self) -> &'a str {
        self.current
    }

    pub fn visited(&self) -> &[&'a str] {
        &self.visited
    }

    pub fn has_visited(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of distinct locations on the tour.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// True for the zero-length tour, i.e. no cycle was found.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn to_names(&self) -> Vec<String> {
        self.visited.iter().map(|name| (*name).to_owned()).collect()
    }
}

impl PartialEq for Journey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.visited == other.visited
    }
}

impl Eq for Journey<'_> {}
