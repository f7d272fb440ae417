use crate::mappable::{put, wrap, Aggregation, Document, Mappable};
use serde_json::Value;

#[derive(Debug, Clone)]
struct WeightedSource {
    field: String,
    missing: Option<Value>,
}

impl WeightedSource {
    fn to_value(&self) -> Value {
        let mut doc = Document::new();
        doc.insert("field".to_string(), self.field.clone().into());
        put(&mut doc, "missing", self.missing.clone());
        Value::Object(doc)
    }
}

/// `weighted_avg` aggregation
#[derive(Debug, Clone)]
pub struct WeightedAvgAgg {
    name: String,
    value: Option<WeightedSource>,
    weight: Option<WeightedSource>,
}

pub fn weighted_avg(name: impl Into<String>) -> WeightedAvgAgg {
    WeightedAvgAgg {
        name: name.into(),
        value: None,
        weight: None,
    }
}

impl WeightedAvgAgg {
    pub fn value(mut self, field: impl Into<String>, missing: Option<Value>) -> Self {
        self.value = Some(WeightedSource {
            field: field.into(),
            missing,
        });
        self
    }

    pub fn weight(mut self, field: impl Into<String>, missing: Option<Value>) -> Self {
        self.weight = Some(WeightedSource {
            field: field.into(),
            missing,
        });
        self
    }
}

impl Mappable for WeightedAvgAgg {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        put(&mut params, "value", self.value.as_ref().map(WeightedSource::to_value));
        put(&mut params, "weight", self.weight.as_ref().map(WeightedSource::to_value));
        wrap("weighted_avg", params)
    }
}

impl Aggregation for WeightedAvgAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weighted_avg() {
        let agg = weighted_avg("weighted_grade")
            .value("grade", Some(json!(2)))
            .weight("weight", None);
        assert_eq!(agg.name(), "weighted_grade");
        assert_eq!(
            agg.to_value(),
            json!({
                "weighted_avg": {
                    "value": {"field": "grade", "missing": 2},
                    "weight": {"field": "weight"}
                }
            })
        );
    }

    #[test]
    fn test_weighted_avg_empty() {
        assert_eq!(weighted_avg("w").to_value(), json!({"weighted_avg": {}}));
    }
}
