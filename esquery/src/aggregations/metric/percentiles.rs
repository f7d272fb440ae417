use crate::mappable::{put, wrap, Aggregation, Document, Mappable};
use serde_json::Value;

/// `percentiles` aggregation
#[derive(Debug, Clone)]
pub struct PercentilesAgg {
    name: String,
    field: String,
    percents: Vec<f64>,
    keyed: Option<bool>,
    compression: Option<f64>,
    missing: Option<Value>,
}

pub fn percentiles(name: impl Into<String>, field: impl Into<String>) -> PercentilesAgg {
    PercentilesAgg {
        name: name.into(),
        field: field.into(),
        percents: Vec::new(),
        keyed: None,
        compression: None,
        missing: None,
    }
}

impl PercentilesAgg {
    pub fn percents(mut self, percents: impl IntoIterator<Item = f64>) -> Self {
        self.percents = percents.into_iter().collect();
        self
    }

    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }

    /// TDigest compression, trading memory for accuracy
    pub fn compression(mut self, compression: f64) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn missing(mut self, value: impl Into<Value>) -> Self {
        self.missing = Some(value.into());
        self
    }
}

impl Mappable for PercentilesAgg {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("field".to_string(), self.field.clone().into());
        if !self.percents.is_empty() {
            params.insert("percents".to_string(), self.percents.clone().into());
        }
        put(&mut params, "keyed", self.keyed);
        put(
            &mut params,
            "tdigest",
            self.compression.map(|c| wrap("compression", c)),
        );
        put(&mut params, "missing", self.missing.clone());
        wrap("percentiles", params)
    }
}

impl Aggregation for PercentilesAgg {
    fn name(&self) -> &str {
        &self.name
    }
}
