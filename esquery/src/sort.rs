//! Sort clauses shared by search requests and top_hits aggregations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::mappable::{wrap, Document};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{}', expected asc or desc", other)),
        }
    }
}

impl From<Order> for Value {
    fn from(o: Order) -> Value {
        Value::String(o.as_str().to_string())
    }
}

/// One entry of a `sort` array: `{field: {"order": order}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub field: String,
    pub order: Order,
}

impl SortField {
    pub fn new(field: impl Into<String>, order: Order) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    pub fn to_map(&self) -> Document {
        wrap(&self.field, wrap("order", self.order))
    }
}

pub(crate) fn sort_array(sort: &[SortField]) -> Value {
    Value::Array(sort.iter().map(|s| Value::Object(s.to_map())).collect())
}
