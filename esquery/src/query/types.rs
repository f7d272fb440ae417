//! Enumerated option values used by the query builders

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Boolean logic used to interpret text in a match query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOperator {
    Or,
    And,
}

/// What a match query returns when the analyzer removes every token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroTerms {
    None,
    All,
}

/// How a multi_match query is executed internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiMatchType {
    BestFields,
    MostFields,
    CrossFields,
    Phrase,
    PhrasePrefix,
    BoolPrefix,
}

/// How a range query matches values of range fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RangeRelation {
    Intersects,
    Contains,
    Within,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
        }
    }
}

impl ZeroTerms {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
        }
    }
}

impl MultiMatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BestFields => "best_fields",
            Self::MostFields => "most_fields",
            Self::CrossFields => "cross_fields",
            Self::Phrase => "phrase",
            Self::PhrasePrefix => "phrase_prefix",
            Self::BoolPrefix => "bool_prefix",
        }
    }
}

impl RangeRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intersects => "INTERSECTS",
            Self::Contains => "CONTAINS",
            Self::Within => "WITHIN",
        }
    }
}

macro_rules! str_enum_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Value {
                    Value::String(v.as_str().to_string())
                }
            }
        )*
    };
}

str_enum_conversions!(MatchOperator, ZeroTerms, MultiMatchType, RangeRelation);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_strings() {
        assert_eq!(Value::from(MatchOperator::And), json!("AND"));
        assert_eq!(MatchOperator::Or.to_string(), "OR");
    }

    #[test]
    fn test_multi_match_type_serde_matches_as_str() {
        for t in [
            MultiMatchType::BestFields,
            MultiMatchType::MostFields,
            MultiMatchType::CrossFields,
            MultiMatchType::Phrase,
            MultiMatchType::PhrasePrefix,
            MultiMatchType::BoolPrefix,
        ] {
            assert_eq!(serde_json::to_value(t).unwrap(), Value::from(t));
        }
    }

    #[test]
    fn test_range_relation_deserialize() {
        let r: RangeRelation = serde_json::from_value(json!("WITHIN")).unwrap();
        assert_eq!(r, RangeRelation::Within);
    }

    #[test]
    fn test_zero_terms() {
        assert_eq!(Value::from(ZeroTerms::All), json!("all"));
        assert_eq!(ZeroTerms::None.as_str(), "none");
    }
}
