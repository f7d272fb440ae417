use crate::mappable::{Aggregation, Document, Mappable};

/// Escape hatch for aggregation shapes without a dedicated builder
#[derive(Debug, Clone)]
pub struct CustomAgg {
    name: String,
    body: Document,
}

pub fn custom_agg(name: impl Into<String>, body: Document) -> CustomAgg {
    CustomAgg {
        name: name.into(),
        body,
    }
}

impl Mappable for CustomAgg {
    fn to_map(&self) -> Document {
        self.body.clone()
    }
}

impl Aggregation for CustomAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_custom_agg_passthrough() {
        let body = json!({"geo_bounds": {"field": "location", "wrap_longitude": true}});
        let agg = custom_agg("viewport", body.as_object().unwrap().clone());
        assert_eq!(agg.name(), "viewport");
        assert_eq!(agg.to_value(), body);
    }
}
