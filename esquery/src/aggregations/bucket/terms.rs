use super::bucket_document;
use crate::mappable::{put, Aggregation, Document, Mappable};
use crate::sort::Order;
use serde_json::Value;

/// `terms` aggregation: one bucket per unique value
pub struct TermsAgg {
    name: String,
    field: String,
    size: Option<u64>,
    shard_size: Option<u64>,
    show_term_doc_count_error: Option<bool>,
    order: Document,
    include: Vec<String>,
    aggs: Vec<Box<dyn Aggregation>>,
}

pub fn terms_agg(name: impl Into<String>, field: impl Into<String>) -> TermsAgg {
    TermsAgg {
        name: name.into(),
        field: field.into(),
        size: None,
        shard_size: None,
        show_term_doc_count_error: None,
        order: Document::new(),
        include: Vec::new(),
        aggs: Vec::new(),
    }
}

impl TermsAgg {
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shard_size(mut self, size: u64) -> Self {
        self.shard_size = Some(size);
        self
    }

    pub fn show_term_doc_count_error(mut self, show: bool) -> Self {
        self.show_term_doc_count_error = Some(show);
        self
    }

    /// Orders buckets by a key such as `_count`, `_key` or a sub-aggregation name
    pub fn order(mut self, key: impl Into<String>, order: Order) -> Self {
        self.order.insert(key.into(), order.into());
        self
    }

    /// A single entry is sent as a regex pattern, several as exact values
    pub fn include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(include.into_iter().map(Into::into));
        self
    }

    pub fn aggs(mut self, agg: impl Aggregation + 'static) -> Self {
        self.aggs.push(Box::new(agg));
        self
    }
}

impl Mappable for TermsAgg {
    fn to_map(&self) -> Document {
        let mut body = Document::new();
        body.insert("field".to_string(), self.field.clone().into());
        put(&mut body, "size", self.size);
        put(&mut body, "shard_size", self.shard_size);
        put(&mut body, "show_term_doc_count_error", self.show_term_doc_count_error);
        if !self.order.is_empty() {
            body.insert("order".to_string(), Value::Object(self.order.clone()));
        }
        match self.include.as_slice() {
            [] => {}
            [pattern] => {
                body.insert("include".to_string(), pattern.clone().into());
            }
            values => {
                body.insert("include".to_string(), values.to_vec().into());
            }
        }
        bucket_document("terms", body.into(), &self.aggs)
    }
}

impl Aggregation for TermsAgg {
    fn name(&self) -> &str {
        &self.name
    }
}
