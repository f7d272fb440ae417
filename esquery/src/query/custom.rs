use crate::mappable::{Document, Mappable};
use crate::{Error, Result};
use serde_json::Value;

/// Escape hatch for query shapes without a dedicated builder. The document is
/// emitted exactly as given.
#[derive(Debug, Clone, Default)]
pub struct CustomQuery(Document);

pub fn custom_query(document: Document) -> CustomQuery {
    CustomQuery(document)
}

impl CustomQuery {
    /// Builds from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::InvalidQuery(format!(
                "custom query expects a JSON object, got {}",
                other
            ))),
        }
    }
}

impl TryFrom<Value> for CustomQuery {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Mappable for CustomQuery {
    fn to_map(&self) -> Document {
        self.0.clone()
    }
}
