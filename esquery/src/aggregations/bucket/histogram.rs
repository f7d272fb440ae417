use super::bucket_document;
use crate::mappable::{put, Aggregation, Document, Mappable};
use serde_json::json;

/// `histogram` aggregation with a fixed numeric interval
pub struct HistogramAgg {
    name: String,
    field: String,
    interval: f64,
    min_doc_count: Option<u64>,
    extended_bounds: Option<(f64, f64)>,
    aggs: Vec<Box<dyn Aggregation>>,
}

pub fn histogram_agg(name: impl Into<String>, field: impl Into<String>, interval: f64) -> HistogramAgg {
    HistogramAgg {
        name: name.into(),
        field: field.into(),
        interval,
        min_doc_count: None,
        extended_bounds: None,
        aggs: Vec::new(),
    }
}

impl HistogramAgg {
    pub fn min_doc_count(mut self, n: u64) -> Self {
        self.min_doc_count = Some(n);
        self
    }

    pub fn extended_bounds(mut self, min: f64, max: f64) -> Self {
        self.extended_bounds = Some((min, max));
        self
    }

    pub fn aggs(mut self, agg: impl Aggregation + 'static) -> Self {
        self.aggs.push(Box::new(agg));
        self
    }
}

impl Mappable for HistogramAgg {
    fn to_map(&self) -> Document {
        let mut body = Document::new();
        body.insert("field".to_string(), self.field.clone().into());
        body.insert("interval".to_string(), self.interval.into());
        put(&mut body, "min_doc_count", self.min_doc_count);
        put(
            &mut body,
            "extended_bounds",
            self.extended_bounds.map(|(min, max)| json!({"min": min, "max": max})),
        );
        bucket_document("histogram", body.into(), &self.aggs)
    }
}

impl Aggregation for HistogramAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

/// `date_histogram` aggregation
pub struct DateHistogramAgg {
    name: String,
    field: String,
    calendar_interval: Option<String>,
    fixed_interval: Option<String>,
    format: Option<String>,
    time_zone: Option<String>,
    min_doc_count: Option<u64>,
    aggs: Vec<Box<dyn Aggregation>>,
}

pub fn date_histogram_agg(name: impl Into<String>, field: impl Into<String>) -> DateHistogramAgg {
    DateHistogramAgg {
        name: name.into(),
        field: field.into(),
        calendar_interval: None,
        fixed_interval: None,
        format: None,
        time_zone: None,
        min_doc_count: None,
        aggs: Vec::new(),
    }
}

impl DateHistogramAgg {
    /// Calendar-aware interval such as `1d` or `month`
    pub fn calendar_interval(mut self, interval: impl Into<String>) -> Self {
        self.calendar_interval = Some(interval.into());
        self
    }

    /// Fixed SI interval such as `30s` or `12h`
    pub fn fixed_interval(mut self, interval: impl Into<String>) -> Self {
        self.fixed_interval = Some(interval.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    pub fn min_doc_count(mut self, n: u64) -> Self {
        self.min_doc_count = Some(n);
        self
    }

    pub fn aggs(mut self, agg: impl Aggregation + 'static) -> Self {
        self.aggs.push(Box::new(agg));
        self
    }
}

impl Mappable for DateHistogramAgg {
    fn to_map(&self) -> Document {
        let mut body = Document::new();
        body.insert("field".to_string(), self.field.clone().into());
        put(&mut body, "calendar_interval", self.calendar_interval.clone());
        put(&mut body, "fixed_interval", self.fixed_interval.clone());
        put(&mut body, "format", self.format.clone());
        put(&mut body, "time_zone", self.time_zone.clone());
        put(&mut body, "min_doc_count", self.min_doc_count);
        bucket_document("date_histogram", body.into(), &self.aggs)
    }
}

impl Aggregation for DateHistogramAgg {
    fn name(&self) -> &str {
        &self.name
    }
}
