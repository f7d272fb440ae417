//! Top-level request builders: search, count and delete-by-query

use crate::client::{Client, RequestOptions};
use crate::{Error, Result};
use crate::mappable::{aggs_document, put, Aggregation, Document, Mappable};
use crate::sort::{sort_array, Order, SortField};
use reqwest::{Method, Response};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::time::Duration;

/// A complete `_search` request body
#[derive(Default)]
pub struct SearchRequest {
    query: Option<Box<dyn Mappable>>,
    aggs: Vec<Box<dyn Aggregation>>,
    post_filter: Option<Box<dyn Mappable>>,
    from: Option<u64>,
    size: Option<u64>,
    sort: Vec<SortField>,
    source_includes: Vec<String>,
    source_excludes: Vec<String>,
    explain: Option<bool>,
    timeout: Option<Duration>,
    search_after: Vec<Value>,
    highlight: Option<Box<dyn Mappable>>,
}

/// Starts an empty search request
pub fn search() -> SearchRequest {
    SearchRequest::default()
}

/// A search request holding only `query`
pub fn query(query: impl Mappable + 'static) -> SearchRequest {
    search().query(query)
}

/// A search request holding only aggregations. Mixed aggregation types can
/// be collected with [`aggs!`](crate::aggs).
pub fn aggregate<I, A>(aggs: I) -> SearchRequest
where
    I: IntoIterator<Item = A>,
    A: Aggregation + 'static,
{
    aggs.into_iter()
        .fold(search(), |request, agg| request.aggs(agg))
}

impl SearchRequest {
    pub fn query(mut self, query: impl Mappable + 'static) -> Self {
        self.query = Some(Box::new(query));
        self
    }

    /// Adds an aggregation, keyed by its name
    pub fn aggs(mut self, agg: impl Aggregation + 'static) -> Self {
        self.aggs.push(Box::new(agg));
        self
    }

    /// Filter applied to hits after aggregations are computed
    pub fn post_filter(mut self, filter: impl Mappable + 'static) -> Self {
        self.post_filter = Some(Box::new(filter));
        self
    }

    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: Order) -> Self {
        self.sort.push(SortField::new(field, order));
        self
    }

    pub fn source_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_includes.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn source_excludes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_excludes.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sort values of the last hit of the previous page
    pub fn search_after<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.search_after = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn highlight(mut self, highlight: impl Mappable + 'static) -> Self {
        self.highlight = Some(Box::new(highlight));
        self
    }

    /// JSON encoded request body
    pub fn body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_map())?)
    }

    /// Executes the search and returns the response as-is
    pub async fn run(&self, client: &Client, options: RequestOptions) -> Result<Response> {
        let body = self.body()?;
        client
            .send(Method::POST, "_search", options.index_names(), &options, body)
            .await
    }
}

/// Formats a timeout in the coarsest Elasticsearch time unit that
/// represents it exactly
fn format_timeout(timeout: Duration) -> String {
    let nanos = timeout.subsec_nanos();
    if nanos == 0 {
        format!("{}s", timeout.as_secs())
    } else if nanos % 1_000_000 == 0 {
        format!("{}ms", timeout.as_millis())
    } else if nanos % 1_000 == 0 {
        format!("{}micros", timeout.as_micros())
    } else {
        format!("{}nanos", timeout.as_nanos())
    }
}

impl Mappable for SearchRequest {
    fn to_map(&self) -> Document {
        let mut doc = Document::new();
        put(&mut doc, "query", self.query.as_ref().map(|q| q.to_value()));
        if !self.aggs.is_empty() {
            doc.insert("aggs".to_string(), aggs_document(&self.aggs).into());
        }
        put(
            &mut doc,
            "post_filter",
            self.post_filter.as_ref().map(|q| q.to_value()),
        );
        put(&mut doc, "from", self.from);
        put(&mut doc, "size", self.size);
        if !self.sort.is_empty() {
            doc.insert("sort".to_string(), sort_array(&self.sort));
        }
        if !self.source_includes.is_empty() || !self.source_excludes.is_empty() {
            let mut source = Document::new();
            if !self.source_includes.is_empty() {
                source.insert("includes".to_string(), self.source_includes.clone().into());
            }
            if !self.source_excludes.is_empty() {
                source.insert("excludes".to_string(), self.source_excludes.clone().into());
            }
            doc.insert("_source".to_string(), source.into());
        }
        put(&mut doc, "explain", self.explain);
        put(&mut doc, "timeout", self.timeout.map(format_timeout));
        if !self.search_after.is_empty() {
            doc.insert(
                "search_after".to_string(),
                Value::Array(self.search_after.clone()),
            );
        }
        put(
            &mut doc,
            "highlight",
            self.highlight.as_ref().map(|h| h.to_value()),
        );
        doc
    }
}

/// A `_count` request
pub struct CountRequest {
    query: Box<dyn Mappable>,
}

pub fn count(query: impl Mappable + 'static) -> CountRequest {
    CountRequest {
        query: Box::new(query),
    }
}

impl CountRequest {
    pub fn body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_map())?)
    }

    pub async fn run(&self, client: &Client, options: RequestOptions) -> Result<Response> {
        let body = self.body()?;
        client
            .send(Method::POST, "_count", options.index_names(), &options, body)
            .await
    }
}

impl Mappable for CountRequest {
    fn to_map(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("query".to_string(), self.query.to_value());
        doc
    }
}

/// A `_delete_by_query` request
#[derive(Default)]
pub struct DeleteRequest {
    indices: Vec<String>,
    query: Option<Box<dyn Mappable>>,
}

pub fn delete() -> DeleteRequest {
    DeleteRequest::default()
}

impl DeleteRequest {
    pub fn query(mut self, query: impl Mappable + 'static) -> Self {
        self.query = Some(Box::new(query));
        self
    }

    pub fn index<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices.extend(indices.into_iter().map(Into::into));
        self
    }

    pub fn body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_map())?)
    }

    /// Deletes every document matching the query in the target indices.
    /// Fails before any I/O when no non-blank index is named here or in
    /// `options`.
    pub async fn run(&self, client: &Client, options: RequestOptions) -> Result<Response> {
        let indices: Vec<String> = self
            .indices
            .iter()
            .chain(options.index_names())
            .filter(|index| !index.trim().is_empty())
            .cloned()
            .collect();
        if indices.is_empty() {
            return Err(Error::MissingIndex(
                "delete_by_query requires at least one index".to_string(),
            ));
        }
        let body = self.body()?;
        client
            .send(Method::POST, "_delete_by_query", &indices, &options, body)
            .await
    }
}

impl Mappable for DeleteRequest {
    fn to_map(&self) -> Document {
        let mut doc = Document::new();
        put(&mut doc, "query", self.query.as_ref().map(|q| q.to_value()));
        doc
    }
}

macro_rules! serialize_via_map {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    self.to_map().serialize(serializer)
                }
            }
        )*
    };
}

serialize_via_map!(SearchRequest, CountRequest, DeleteRequest);
