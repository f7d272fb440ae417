//! Term-level queries: exact matching on structured values

use crate::mappable::{put, wrap, Document, Mappable};
use crate::query::types::RangeRelation;
use serde_json::Value;

/// `term` query
#[derive(Debug, Clone)]
pub struct TermQuery {
    field: String,
    value: Value,
    boost: Option<f64>,
}

pub fn term(field: impl Into<String>, value: impl Into<Value>) -> TermQuery {
    TermQuery {
        field: field.into(),
        value: value.into(),
        boost: None,
    }
}

impl TermQuery {
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Mappable for TermQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("value".to_string(), self.value.clone());
        put(&mut params, "boost", self.boost);
        wrap("term", wrap(&self.field, params))
    }
}

/// `terms` query: matches any of several exact values
#[derive(Debug, Clone)]
pub struct TermsQuery {
    field: String,
    values: Vec<Value>,
    boost: Option<f64>,
}

pub fn terms<I, V>(field: impl Into<String>, values: I) -> TermsQuery
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    TermsQuery {
        field: field.into(),
        values: values.into_iter().map(Into::into).collect(),
        boost: None,
    }
}

impl TermsQuery {
    /// Appends another accepted value
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Mappable for TermsQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert(self.field.clone(), Value::Array(self.values.clone()));
        put(&mut params, "boost", self.boost);
        wrap("terms", params)
    }
}

/// `terms_set` query: matches a minimum number of exact terms
#[derive(Debug, Clone)]
pub struct TermsSetQuery {
    field: String,
    terms: Vec<Value>,
    minimum_should_match_field: Option<String>,
    minimum_should_match_script: Option<String>,
}

pub fn terms_set<I, V>(field: impl Into<String>, terms: I) -> TermsSetQuery
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    TermsSetQuery {
        field: field.into(),
        terms: terms.into_iter().map(Into::into).collect(),
        minimum_should_match_field: None,
        minimum_should_match_script: None,
    }
}

impl TermsSetQuery {
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.terms.push(value.into());
        self
    }

    pub fn minimum_should_match_field(mut self, field: impl Into<String>) -> Self {
        self.minimum_should_match_field = Some(field.into());
        self
    }

    /// Script source, e.g. `Math.min(params.num_terms, doc['required'].value)`
    pub fn minimum_should_match_script(mut self, source: impl Into<String>) -> Self {
        self.minimum_should_match_script = Some(source.into());
        self
    }
}

impl Mappable for TermsSetQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("terms".to_string(), Value::Array(self.terms.clone()));
        put(
            &mut params,
            "minimum_should_match_field",
            self.minimum_should_match_field.clone(),
        );
        put(
            &mut params,
            "minimum_should_match_script",
            self.minimum_should_match_script
                .as_ref()
                .map(|source| Value::Object(wrap("source", source.clone()))),
        );
        wrap("terms_set", wrap(&self.field, params))
    }
}

/// `range` query
#[derive(Debug, Clone)]
pub struct RangeQuery {
    field: String,
    gt: Option<Value>,
    gte: Option<Value>,
    lt: Option<Value>,
    lte: Option<Value>,
    format: Option<String>,
    relation: Option<RangeRelation>,
    time_zone: Option<String>,
    boost: Option<f64>,
}

pub fn range(field: impl Into<String>) -> RangeQuery {
    RangeQuery {
        field: field.into(),
        gt: None,
        gte: None,
        lt: None,
        lte: None,
        format: None,
        relation: None,
        time_zone: None,
        boost: None,
    }
}

impl RangeQuery {
    pub fn gt(mut self, v: impl Into<Value>) -> Self {
        self.gt = Some(v.into());
        self
    }

    pub fn gte(mut self, v: impl Into<Value>) -> Self {
        self.gte = Some(v.into());
        self
    }

    pub fn lt(mut self, v: impl Into<Value>) -> Self {
        self.lt = Some(v.into());
        self
    }

    pub fn lte(mut self, v: impl Into<Value>) -> Self {
        self.lte = Some(v.into());
        self
    }

    /// Date format used to parse date values
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn relation(mut self, relation: RangeRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Mappable for RangeQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        put(&mut params, "gt", self.gt.clone());
        put(&mut params, "gte", self.gte.clone());
        put(&mut params, "lt", self.lt.clone());
        put(&mut params, "lte", self.lte.clone());
        put(&mut params, "format", self.format.clone());
        put(&mut params, "relation", self.relation);
        put(&mut params, "time_zone", self.time_zone.clone());
        put(&mut params, "boost", self.boost);
        wrap("range", wrap(&self.field, params))
    }
}

/// `exists` query
#[derive(Debug, Clone)]
pub struct ExistsQuery {
    field: String,
}

pub fn exists(field: impl Into<String>) -> ExistsQuery {
    ExistsQuery {
        field: field.into(),
    }
}

impl Mappable for ExistsQuery {
    fn to_map(&self) -> Document {
        wrap("exists", wrap("field", self.field.clone()))
    }
}

/// `ids` query
#[derive(Debug, Clone)]
pub struct IdsQuery {
    values: Vec<String>,
}

pub fn ids<I, S>(values: I) -> IdsQuery
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    IdsQuery {
        values: values.into_iter().map(Into::into).collect(),
    }
}

impl Mappable for IdsQuery {
    fn to_map(&self) -> Document {
        wrap("ids", wrap("values", self.values.clone()))
    }
}

/// `prefix` query
#[derive(Debug, Clone)]
pub struct PrefixQuery {
    field: String,
    value: String,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

pub fn prefix(field: impl Into<String>, value: impl Into<String>) -> PrefixQuery {
    PrefixQuery {
        field: field.into(),
        value: value.into(),
        rewrite: None,
        case_insensitive: None,
    }
}

impl PrefixQuery {
    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = Some(enabled);
        self
    }
}

impl Mappable for PrefixQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("value".to_string(), self.value.clone().into());
        put(&mut params, "rewrite", self.rewrite.clone());
        put(&mut params, "case_insensitive", self.case_insensitive);
        wrap("prefix", wrap(&self.field, params))
    }
}

/// `wildcard` query
#[derive(Debug, Clone)]
pub struct WildcardQuery {
    field: String,
    value: String,
    boost: Option<f64>,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

pub fn wildcard(field: impl Into<String>, value: impl Into<String>) -> WildcardQuery {
    WildcardQuery {
        field: field.into(),
        value: value.into(),
        boost: None,
        rewrite: None,
        case_insensitive: None,
    }
}

impl WildcardQuery {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = Some(enabled);
        self
    }
}

impl Mappable for WildcardQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("value".to_string(), self.value.clone().into());
        put(&mut params, "boost", self.boost);
        put(&mut params, "rewrite", self.rewrite.clone());
        put(&mut params, "case_insensitive", self.case_insensitive);
        wrap("wildcard", wrap(&self.field, params))
    }
}

/// `regexp` query
#[derive(Debug, Clone)]
pub struct RegexpQuery {
    field: String,
    value: String,
    flags: Option<String>,
    max_determinized_states: Option<u32>,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

pub fn regexp(field: impl Into<String>, value: impl Into<String>) -> RegexpQuery {
    RegexpQuery {
        field: field.into(),
        value: value.into(),
        flags: None,
        max_determinized_states: None,
        rewrite: None,
        case_insensitive: None,
    }
}

impl RegexpQuery {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Operator flags such as `ALL` or `COMPLEMENT|INTERVAL`
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn max_determinized_states(mut self, n: u32) -> Self {
        self.max_determinized_states = Some(n);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = Some(enabled);
        self
    }
}

impl Mappable for RegexpQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("value".to_string(), self.value.clone().into());
        put(&mut params, "flags", self.flags.clone());
        put(&mut params, "max_determinized_states", self.max_determinized_states);
        put(&mut params, "rewrite", self.rewrite.clone());
        put(&mut params, "case_insensitive", self.case_insensitive);
        wrap("regexp", wrap(&self.field, params))
    }
}

/// `fuzzy` query
#[derive(Debug, Clone)]
pub struct FuzzyQuery {
    field: String,
    value: String,
    fuzziness: Option<String>,
    max_expansions: Option<u32>,
    prefix_length: Option<u32>,
    transpositions: Option<bool>,
    rewrite: Option<String>,
}

pub fn fuzzy(field: impl Into<String>, value: impl Into<String>) -> FuzzyQuery {
    FuzzyQuery {
        field: field.into(),
        value: value.into(),
        fuzziness: None,
        max_expansions: None,
        prefix_length: None,
        transpositions: None,
        rewrite: None,
    }
}

impl FuzzyQuery {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<String>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn max_expansions(mut self, n: u32) -> Self {
        self.max_expansions = Some(n);
        self
    }

    pub fn prefix_length(mut self, n: u32) -> Self {
        self.prefix_length = Some(n);
        self
    }

    pub fn transpositions(mut self, enabled: bool) -> Self {
        self.transpositions = Some(enabled);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }
}

impl Mappable for FuzzyQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("value".to_string(), self.value.clone().into());
        put(&mut params, "fuzziness", self.fuzziness.clone());
        put(&mut params, "max_expansions", self.max_expansions);
        put(&mut params, "prefix_length", self.prefix_length);
        put(&mut params, "transpositions", self.transpositions);
        put(&mut params, "rewrite", self.rewrite.clone());
        wrap("fuzzy", wrap(&self.field, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_expanded_form() {
        assert_eq!(
            term("user", "Kimchy").to_value(),
            json!({"term": {"user": {"value": "Kimchy"}}})
        );
        assert_eq!(
            term("user", "Kimchy").boost(1.0).to_value(),
            json!({"term": {"user": {"value": "Kimchy", "boost": 1.0}}})
        );
    }

    #[test]
    fn test_term_value_replaced() {
        let q = term("count", 1).value(2);
        assert_eq!(q.to_value(), json!({"term": {"count": {"value": 2}}}));
    }

    #[test]
    fn test_terms() {
        let q = terms("user", ["kimchy", "elkbee"]).value("bob").boost(1.0);
        assert_eq!(
            q.to_value(),
            json!({"terms": {"user": ["kimchy", "elkbee", "bob"], "boost": 1.0}})
        );
    }

    #[test]
    fn test_terms_set() {
        let q = terms_set("programming_languages", ["c++", "java"])
            .value("php")
            .minimum_should_match_field("required_matches");
        assert_eq!(
            q.to_value(),
            json!({
                "terms_set": {
                    "programming_languages": {
                        "terms": ["c++", "java", "php"],
                        "minimum_should_match_field": "required_matches"
                    }
                }
            })
        );
    }

    #[test]
    fn test_terms_set_script() {
        let q = terms_set("tags", ["a"]).minimum_should_match_script("params.num_terms");
        assert_eq!(
            q.to_value()["terms_set"]["tags"]["minimum_should_match_script"],
            json!({"source": "params.num_terms"})
        );
    }

    #[test]
    fn test_range() {
        let q = range("timestamp")
            .gte("now-1d/d")
            .lt("now/d")
            .format("strict_date_optional_time")
            .relation(RangeRelation::Within)
            .time_zone("+01:00")
            .boost(2.0);
        assert_eq!(
            q.to_value(),
            json!({
                "range": {
                    "timestamp": {
                        "gte": "now-1d/d",
                        "lt": "now/d",
                        "format": "strict_date_optional_time",
                        "relation": "WITHIN",
                        "time_zone": "+01:00",
                        "boost": 2.0
                    }
                }
            })
        );
    }

    #[test]
    fn test_range_key_order() {
        let q = range("age").lte(20).gt(10);
        let doc = q.to_map();
        let keys: Vec<&String> = doc["range"]["age"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["gt", "lte"]);
    }

    #[test]
    fn test_range_numeric_bounds() {
        assert_eq!(
            range("age").gt(10).lte(20).to_value(),
            json!({"range": {"age": {"gt": 10, "lte": 20}}})
        );
    }

    #[test]
    fn test_exists_and_ids() {
        assert_eq!(exists("user").to_value(), json!({"exists": {"field": "user"}}));
        assert_eq!(
            ids(["1", "4", "100"]).to_value(),
            json!({"ids": {"values": ["1", "4", "100"]}})
        );
    }

    #[test]
    fn test_prefix() {
        assert_eq!(
            prefix("user", "ki").rewrite("constant_score").to_value(),
            json!({"prefix": {"user": {"value": "ki", "rewrite": "constant_score"}}})
        );
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(
            wildcard("user", "ki*y").boost(1.0).case_insensitive(true).to_value(),
            json!({"wildcard": {"user": {"value": "ki*y", "boost": 1.0, "case_insensitive": true}}})
        );
    }

    #[test]
    fn test_regexp() {
        let q = regexp("user", "k.*y")
            .flags("ALL")
            .max_determinized_states(10000)
            .rewrite("constant_score");
        assert_eq!(
            q.to_value(),
            json!({
                "regexp": {
                    "user": {
                        "value": "k.*y",
                        "flags": "ALL",
                        "max_determinized_states": 10000,
                        "rewrite": "constant_score"
                    }
                }
            })
        );
    }

    #[test]
    fn test_fuzzy() {
        let q = fuzzy("user", "ki")
            .fuzziness("AUTO")
            .max_expansions(50)
            .prefix_length(0)
            .transpositions(true);
        assert_eq!(
            q.to_value(),
            json!({
                "fuzzy": {
                    "user": {
                        "value": "ki",
                        "fuzziness": "AUTO",
                        "max_expansions": 50,
                        "prefix_length": 0,
                        "transpositions": true
                    }
                }
            })
        );
    }
}
