//! Core contracts shared by every query and aggregation builder

use serde_json::{Map, Value};

/// Generic, insertion-ordered key-value document ready for JSON encoding
pub type Document = Map<String, Value>;

/// Implemented by every query and aggregation type. Converts the builder
/// into the generic document Elasticsearch expects.
pub trait Mappable: Send + Sync {
    fn to_map(&self) -> Document;

    /// The document wrapped as a JSON value
    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

/// A [`Mappable`] that also carries the name it is registered under in an
/// `aggs` section.
pub trait Aggregation: Mappable {
    fn name(&self) -> &str;
}

impl<T: Mappable + ?Sized> Mappable for Box<T> {
    fn to_map(&self) -> Document {
        (**self).to_map()
    }
}

impl<T: Mappable + ?Sized> Mappable for &T {
    fn to_map(&self) -> Document {
        (**self).to_map()
    }
}

impl<T: Aggregation + ?Sized> Aggregation for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Wraps `inner` in a single-key document: `{key: inner}`
pub(crate) fn wrap(key: &str, inner: impl Into<Value>) -> Document {
    let mut doc = Document::new();
    doc.insert(key.to_string(), inner.into());
    doc
}

/// Converts an ordered list of children into a JSON array, even when it holds
/// a single element.
pub(crate) fn to_array<T: Mappable + ?Sized>(items: &[Box<T>]) -> Value {
    Value::Array(items.iter().map(|q| q.to_value()).collect())
}

/// Builds the `aggs` section: an object keyed by aggregation name.
pub(crate) fn aggs_document(aggs: &[Box<dyn Aggregation>]) -> Document {
    aggs.iter()
        .map(|agg| (agg.name().to_string(), agg.to_value()))
        .collect()
}

/// Inserts `value` under `key` when it is set.
pub(crate) fn put<V: Into<Value>>(doc: &mut Document, key: &str, value: Option<V>) {
    if let Some(v) = value {
        doc.insert(key.to_string(), v.into());
    }
}
