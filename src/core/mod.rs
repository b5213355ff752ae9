pub mod metrics;
pub mod model;
pub mod persistence;
pub mod queue;
pub mod util;
