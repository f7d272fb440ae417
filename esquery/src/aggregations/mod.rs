//! Aggregation builders
//!
//! Every builder implements [`Aggregation`](crate::Aggregation); the name is
//! the key the aggregation is registered under in the request's `aggs` section.

pub mod bucket;
pub mod custom;
pub mod metric;

pub use bucket::{
    date_histogram_agg, filter_agg, histogram_agg, nested_agg, terms_agg, DateHistogramAgg,
    FilterAgg, HistogramAgg, NestedAgg, TermsAgg,
};
pub use custom::{custom_agg, CustomAgg};
pub use metric::{
    avg, cardinality, max, min, percentiles, stats, string_stats, sum, top_hits, value_count,
    weighted_avg, CardinalityAgg, MetricAgg, MetricKind, PercentilesAgg, StringStatsAgg,
    TopHitsAgg, WeightedAvgAgg,
};
