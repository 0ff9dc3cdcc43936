//! Dashboard aggregation over the record store
//!
//! Every snapshot is recomputed from the store on request; nothing is cached.

mod dashboard;

pub use dashboard::{DashboardAggregator, DashboardSnapshot};
