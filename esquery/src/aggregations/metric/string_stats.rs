use crate::mappable::{put, wrap, Aggregation, Document, Mappable};

/// `string_stats` aggregation over a keyword field
#[derive(Debug, Clone)]
pub struct StringStatsAgg {
    name: String,
    field: String,
    show_distribution: Option<bool>,
}

pub fn string_stats(name: impl Into<String>, field: impl Into<String>) -> StringStatsAgg {
    StringStatsAgg {
        name: name.into(),
        field: field.into(),
        show_distribution: None,
    }
}

impl StringStatsAgg {
    pub fn show_distribution(mut self, show: bool) -> Self {
        self.show_distribution = Some(show);
        self
    }
}

impl Mappable for StringStatsAgg {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("field".to_string(), self.field.clone().into());
        put(&mut params, "show_distribution", self.show_distribution);
        wrap("string_stats", params)
    }
}

impl Aggregation for StringStatsAgg {
    fn name(&self) -> &str {
        &self.name
    }
}
