use crate::mappable::{put, wrap, Aggregation, Document, Mappable};
use crate::sort::{sort_array, Order, SortField};

/// `top_hits` aggregation: the most relevant documents per bucket
#[derive(Debug, Clone)]
pub struct TopHitsAgg {
    name: String,
    from: Option<u64>,
    size: Option<u64>,
    sort: Vec<SortField>,
    source_includes: Vec<String>,
}

pub fn top_hits(name: impl Into<String>) -> TopHitsAgg {
    TopHitsAgg {
        name: name.into(),
        from: None,
        size: None,
        sort: Vec::new(),
        source_includes: Vec::new(),
    }
}

impl TopHitsAgg {
    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: Order) -> Self {
        self.sort.push(SortField::new(field, order));
        self
    }

    pub fn source_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_includes.extend(fields.into_iter().map(Into::into));
        self
    }
}

impl Mappable for TopHitsAgg {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        put(&mut params, "from", self.from);
        put(&mut params, "size", self.size);
        if !self.sort.is_empty() {
            params.insert("sort".to_string(), sort_array(&self.sort));
        }
        if !self.source_includes.is_empty() {
            params.insert(
                "_source".to_string(),
                wrap("includes", self.source_includes.clone()).into(),
            );
        }
        wrap("top_hits", params)
    }
}

impl Aggregation for TopHitsAgg {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_hits() {
        let agg = top_hits("top_sales_hits")
            .size(1)
            .sort("date", Order::Desc)
            .source_includes(["date", "price"]);
        assert_eq!(
            agg.to_value(),
            json!({
                "top_hits": {
                    "size": 1,
                    "sort": [{"date": {"order": "desc"}}],
                    "_source": {"includes": ["date", "price"]}
                }
            })
        );
    }

    #[test]
    fn test_top_hits_from() {
        assert_eq!(
            top_hits("t").from(5).to_value(),
            json!({"top_hits": {"from": 5}})
        );
    }
}
