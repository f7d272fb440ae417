//! Fluent, statically typed query and aggregation builder for Elasticsearch
//!
//! Builds Elasticsearch Query DSL documents without hand-writing deeply nested
//! JSON maps, and hands them to the cluster through a thin `reqwest` client.
//! Responses are returned untouched.
//!
//! ```no_run
//! use esquery::{avg, bool_query, max, query, term, terms_agg, Client, RequestOptions};
//!
//! # async fn demo() -> esquery::Result<()> {
//! let es = Client::from_url("http://localhost:9200")?;
//!
//! let res = query(
//!     bool_query()
//!         .must(term("title", "Go and Stuff"))
//!         .filter(term("tag", "tech")),
//! )
//! .run(&es, RequestOptions::new().index("test"))
//! .await?;
//! println!("{}", res.status());
//!
//! let res = esquery::aggregate(esquery::aggs![
//!     avg("average_score", "score"),
//!     max("max_score", "score"),
//!     terms_agg("by_tag", "tag"),
//! ])
//! .run(&es, RequestOptions::new().index("test"))
//! .await?;
//! println!("{}", res.text().await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! Short queries are never generated. Where Elasticsearch accepts
//! `{"term": {"user": "Kimchy"}}`, this crate always produces
//! `{"term": {"user": {"value": "Kimchy"}}}`. Likewise, clauses such as `must`
//! in a `bool` query are always arrays, even with a single query.

pub mod aggregations;
pub mod client;
pub mod config;
pub mod error;
pub mod highlight;
pub mod mappable;
pub mod query;
pub mod search;
pub mod sort;

pub use aggregations::{
    avg, cardinality, custom_agg, date_histogram_agg, filter_agg, histogram_agg, max, min,
    nested_agg, percentiles, stats, string_stats, sum, terms_agg, top_hits, value_count,
    weighted_avg, CardinalityAgg, CustomAgg, DateHistogramAgg, FilterAgg, HistogramAgg,
    MetricAgg, MetricKind, NestedAgg, PercentilesAgg, StringStatsAgg, TermsAgg, TopHitsAgg,
    WeightedAvgAgg,
};
pub use client::{Client, RequestOptions};
pub use config::{ClientConfig, Credentials};
pub use error::Error;
pub use highlight::{
    highlight, BoundaryScanner, Fragmenter, Highlight, HighlightEncoder, HighlightOrder,
    HighlighterType, TagsSchema,
};
pub use mappable::{Aggregation, Document, Mappable};
pub use query::{
    bool_query, boosting, constant_score, custom_query, dis_max, exists, fuzzy, ids,
    match_all, match_bool_prefix, match_none, match_phrase, match_phrase_prefix, match_query,
    multi_match, prefix, range, regexp, term, terms, terms_set, wildcard, BoolQuery,
    BoostingQuery, ConstantScoreQuery, CustomQuery, DisMaxQuery, ExistsQuery, FuzzyQuery,
    IdsQuery, MatchAllQuery, MatchOperator, MatchQuery, MatchType, MultiMatchQuery,
    MultiMatchType, PrefixQuery, RangeQuery, RangeRelation, RegexpQuery, TermQuery,
    TermsQuery, TermsSetQuery, WildcardQuery, ZeroTerms,
};
pub use search::{
    aggregate, count, delete, query, search, CountRequest, DeleteRequest, SearchRequest,
};
pub use sort::{Order, SortField};

/// Boxes aggregations of different types into a `Vec<Box<dyn Aggregation>>`,
/// ready for [`aggregate`].
#[macro_export]
macro_rules! aggs {
    ($($agg:expr),* $(,)?) => {
        vec![$(Box::new($agg) as Box<dyn $crate::Aggregation>),*]
    };
}

/// Result type for request building and execution
pub type Result<T> = std::result::Result<T, Error>;
