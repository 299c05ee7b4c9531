mod dataset;
mod edge;
mod location;
mod model;

pub use dataset::Dataset;
pub use edge::Edge;
pub use location::Location;
pub use model::{GraphModel, Incident};
