use super::bucket_document;
use crate::mappable::{wrap, Aggregation, Document, Mappable};

/// `nested` aggregation over nested documents at `path`
pub struct NestedAgg {
    name: String,
    path: String,
    aggs: Vec<Box<dyn Aggregation>>,
}

pub fn nested_agg(name: impl Into<String>, path: impl Into<String>) -> NestedAgg {
    NestedAgg {
        name: name.into(),
        path: path.into(),
        aggs: Vec::new(),
    }
}

impl NestedAgg {
    pub fn aggs(mut self, agg: impl Aggregation + 'static) -> Self {
        self.aggs.push(Box::new(agg));
        self
    }
}

impl Mappable for NestedAgg {
    fn to_map(&self) -> Document {
        bucket_document("nested", wrap("path", self.path.clone()).into(), &self.aggs)
    }
}

impl Aggregation for NestedAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::min;
    use serde_json::json;

    #[test]
    fn test_nested_agg() {
        let agg = nested_agg("resellers", "resellers").aggs(min("min_price", "resellers.price"));
        assert_eq!(
            agg.to_value(),
            json!({
                "nested": {"path": "resellers"},
                "aggs": {"min_price": {"min": {"field": "resellers.price"}}}
            })
        );
    }

    #[test]
    fn test_nested_agg_without_children() {
        assert_eq!(
            nested_agg("r", "resellers").to_value(),
            json!({"nested": {"path": "resellers"}})
        );
    }
}
