//! Metric aggregations: compute values over the documents in scope

mod basic;
mod cardinality;
mod percentiles;
mod string_stats;
mod top_hits;
mod weighted_avg;

pub use basic::{avg, max, min, stats, sum, value_count, MetricAgg, MetricKind};
pub use cardinality::{cardinality, CardinalityAgg};
pub use percentiles::{percentiles, PercentilesAgg};
pub use string_stats::{string_stats, StringStatsAgg};
pub use top_hits::{top_hits, TopHitsAgg};
pub use weighted_avg::{weighted_avg, WeightedAvgAgg};
