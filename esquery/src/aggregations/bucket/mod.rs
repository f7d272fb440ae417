//! Bucket aggregations: group documents and nest further aggregations

mod filter;
mod histogram;
mod nested;
mod terms;

pub use filter::{filter_agg, FilterAgg};
pub use histogram::{date_histogram_agg, histogram_agg, DateHistogramAgg, HistogramAgg};
pub use nested::{nested_agg, NestedAgg};
pub use terms::{terms_agg, TermsAgg};

use crate::mappable::{aggs_document, Aggregation, Document};

/// Builds a bucket aggregation body `{kind: body}` and appends the sibling
/// `aggs` section when sub-aggregations exist.
pub(crate) fn bucket_document(
    kind: &str,
    body: serde_json::Value,
    aggs: &[Box<dyn Aggregation>],
) -> Document {
    let mut doc = Document::new();
    doc.insert(kind.to_string(), body);
    if !aggs.is_empty() {
        doc.insert("aggs".to_string(), aggs_document(aggs).into());
    }
    doc
}
