use std::collections::VecDeque;

use crate::{Error, GraphModel, Journey, Result};

/// Breadth-first search for the longest closed tour through the start location.
///
/// The queue holds every simple path leaving the start, level by level. Each
/// time a path can step back onto the start it replaces the best tour without
/// comparing lengths: with FIFO order a later closing is never shorter than an
/// earlier one. Swapping the queue for a stack or a heap breaks that.
///
/// Paths reaching the same location through the same set in a different order
/// are not merged, so the queue grows combinatorially on graphs with many
/// cycles. `max_expansions` bounds the work for hosts that need a ceiling.
#[derive(Clone, Copy, Debug)]
pub struct TourFinder<'g, 'a> {
    graph: &'g GraphModel<'a>,
    max_expansions: usize,
}

impl<'g, 'a> TourFinder<'g, 'a> {
    pub fn new(graph: &'g GraphModel<'a>) -> Self {
        Self {
            graph,
            max_expansions: 0,
        }
    }

    /// Abort with [`Error::SearchLimit`] after this many dequeued journeys. 0 means unlimited.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Returns the best closed tour from `start`, or the trivial journey when
    /// no edge leads back.
    pub fn find(&self, start: &str) -> Result<Journey<'a>> {
        let start = self
            .graph
            .location(start)
            .map(|location| location.name.as_str())
            .ok_or_else(|| Error::data_integrity(format!("unknown start location {start}")))?;

        let mut best = Journey::origin(start);
        let mut queue = VecDeque::from([Journey::origin(start)]);
        let mut expanded = 0usize;
        let mut peak_queue = queue.len();

        while let Some(journey) = queue.pop_front() {
            expanded += 1;
            if self.max_expansions > 0 && expanded > self.max_expansions {
                log::warn!(
                    "finder: limit reached start={start} limit={} queue={}",
                    self.max_expansions,
                    queue.len()
                );
                return Err(Error::SearchLimit {
                    limit: self.max_expansions,
                });
            }

            for incident in self.graph.edges_from(journey.current()) {
                if !journey.has_visited(incident.neighbor) {
                    queue.push_back(journey.step(incident.neighbor));
                }
                if incident.neighbor == start {
                    best = journey.step(start);
                    log::trace!("finder: closed len={} via={}", best.len(), journey.current());
                }
            }
            peak_queue = peak_queue.max(queue.len());
        }

        log::debug!(
            "finder: start={start} expanded={expanded} peak_queue={peak_queue} best_len={}",
            best.len()
        );
        Ok(best)
    }
}
