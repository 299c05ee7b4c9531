mod finder;
mod journey;
mod metrics;
mod output;

pub use finder::TourFinder;
pub use journey::Journey;
pub use metrics::TourMetrics;
pub use output::OutputTour;
