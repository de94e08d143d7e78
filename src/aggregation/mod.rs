//! Statistics snapshot and location rollups over independently failing resources.

pub mod count;
pub mod engine;
pub mod rollup;
pub mod snapshot;

pub use count::{extract_count, ResourceResult};
pub use engine::{Aggregate, Aggregation, AggregationEngine};
pub use rollup::{LocationCount, LocationRollup, TOP_CITIES, UNKNOWN_LOCATION};
pub use snapshot::{ApiStatus, Metric, MetricValue, StatsSnapshot};
