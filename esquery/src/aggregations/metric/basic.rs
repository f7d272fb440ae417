//! Single-field metrics: avg, max, min, sum, value_count and stats

use crate::mappable::{put, wrap, Aggregation, Document, Mappable};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Avg,
    Max,
    Min,
    Sum,
    ValueCount,
    Stats,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Max => "max",
            Self::Min => "min",
            Self::Sum => "sum",
            Self::ValueCount => "value_count",
            Self::Stats => "stats",
        }
    }
}

/// A metric aggregation over one field
#[derive(Debug, Clone)]
pub struct MetricAgg {
    name: String,
    kind: MetricKind,
    field: String,
    missing: Option<Value>,
}

impl MetricAgg {
    pub fn new(kind: MetricKind, name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            field: field.into(),
            missing: None,
        }
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Value used for documents that lack the field
    pub fn missing(mut self, value: impl Into<Value>) -> Self {
        self.missing = Some(value.into());
        self
    }
}

impl Mappable for MetricAgg {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("field".to_string(), self.field.clone().into());
        put(&mut params, "missing", self.missing.clone());
        wrap(self.kind.as_str(), params)
    }
}

impl Aggregation for MetricAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn avg(name: impl Into<String>, field: impl Into<String>) -> MetricAgg {
    MetricAgg::new(MetricKind::Avg, name, field)
}

pub fn max(name: impl Into<String>, field: impl Into<String>) -> MetricAgg {
    MetricAgg::new(MetricKind::Max, name, field)
}

pub fn min(name: impl Into<String>, field: impl Into<String>) -> MetricAgg {
    MetricAgg::new(MetricKind::Min, name, field)
}

pub fn sum(name: impl Into<String>, field: impl Into<String>) -> MetricAgg {
    MetricAgg::new(MetricKind::Sum, name, field)
}

pub fn value_count(name: impl Into<String>, field: impl Into<String>) -> MetricAgg {
    MetricAgg::new(MetricKind::ValueCount, name, field)
}

pub fn stats(name: impl Into<String>, field: impl Into<String>) -> MetricAgg {
    MetricAgg::new(MetricKind::Stats, name, field)
}
