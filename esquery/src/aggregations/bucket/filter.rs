use super::bucket_document;
use crate::mappable::{Aggregation, Document, Mappable};

/// `filter` aggregation: a single bucket of documents matching a query
pub struct FilterAgg {
    name: String,
    filter: Box<dyn Mappable>,
    aggs: Vec<Box<dyn Aggregation>>,
}

pub fn filter_agg(name: impl Into<String>, filter: impl Mappable + 'static) -> FilterAgg {
    FilterAgg {
        name: name.into(),
        filter: Box::new(filter),
        aggs: Vec::new(),
    }
}

impl FilterAgg {
    pub fn filter(mut self, filter: impl Mappable + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn aggs(mut self, agg: impl Aggregation + 'static) -> Self {
        self.aggs.push(Box::new(agg));
        self
    }
}

impl Mappable for FilterAgg {
    fn to_map(&self) -> Document {
        bucket_document("filter", self.filter.to_value(), &self.aggs)
    }
}

impl Aggregation for FilterAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::avg;
    use crate::query::term;
    use serde_json::json;

    #[test]
    fn test_filter_agg() {
        let agg = filter_agg("t_shirts", term("type", "t-shirt")).aggs(avg("avg_price", "price"));
        assert_eq!(agg.name(), "t_shirts");
        assert_eq!(
            agg.to_value(),
            json!({
                "filter": {"term": {"type": {"value": "t-shirt"}}},
                "aggs": {"avg_price": {"avg": {"field": "price"}}}
            })
        );
    }

    #[test]
    fn test_filter_agg_replace_filter() {
        let agg = filter_agg("f", term("a", 1)).filter(term("b", 2));
        assert_eq!(agg.to_value(), json!({"filter": {"term": {"b": {"value": 2}}}}));
    }
}
