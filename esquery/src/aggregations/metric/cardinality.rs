use crate::mappable::{put, wrap, Aggregation, Document, Mappable};
use serde_json::Value;

/// `cardinality` aggregation: approximate count of distinct values
#[derive(Debug, Clone)]
pub struct CardinalityAgg {
    name: String,
    field: String,
    precision_threshold: Option<u64>,
    missing: Option<Value>,
}

pub fn cardinality(name: impl Into<String>, field: impl Into<String>) -> CardinalityAgg {
    CardinalityAgg {
        name: name.into(),
        field: field.into(),
        precision_threshold: None,
        missing: None,
    }
}

impl CardinalityAgg {
    pub fn precision_threshold(mut self, threshold: u64) -> Self {
        self.precision_threshold = Some(threshold);
        self
    }

    pub fn missing(mut self, value: impl Into<Value>) -> Self {
        self.missing = Some(value.into());
        self
    }
}

impl Mappable for CardinalityAgg {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("field".to_string(), self.field.clone().into());
        put(&mut params, "precision_threshold", self.precision_threshold);
        put(&mut params, "missing", self.missing.clone());
        wrap("cardinality", params)
    }
}

impl Aggregation for CardinalityAgg {
    fn name(&self) -> &str {
        &self.name
    }
}
