//! Full-text queries: match, match_bool_prefix, match_phrase,
//! match_phrase_prefix and multi_match

use crate::mappable::{put, wrap, Document, Mappable};
use crate::query::types::{MatchOperator, MultiMatchType, ZeroTerms};
use serde_json::Value;

/// Which member of the match family a [`MatchQuery`] renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Match,
    BoolPrefix,
    Phrase,
    PhrasePrefix,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::BoolPrefix => "match_bool_prefix",
            Self::Phrase => "match_phrase",
            Self::PhrasePrefix => "match_phrase_prefix",
        }
    }
}

/// Options shared by match and multi_match queries
#[derive(Debug, Clone, Default)]
struct MatchOptions {
    analyzer: Option<String>,
    auto_generate_synonyms_phrase_query: Option<bool>,
    boost: Option<f64>,
    fuzziness: Option<String>,
    max_expansions: Option<u32>,
    prefix_length: Option<u32>,
    fuzzy_transpositions: Option<bool>,
    fuzzy_rewrite: Option<String>,
    lenient: Option<bool>,
    operator: Option<MatchOperator>,
    minimum_should_match: Option<String>,
    slop: Option<u32>,
    zero_terms_query: Option<ZeroTerms>,
}

impl MatchOptions {
    fn write(&self, doc: &mut Document) {
        put(doc, "analyzer", self.analyzer.clone());
        put(
            doc,
            "auto_generate_synonyms_phrase_query",
            self.auto_generate_synonyms_phrase_query,
        );
        put(doc, "boost", self.boost);
        put(doc, "fuzziness", self.fuzziness.clone());
        put(doc, "max_expansions", self.max_expansions);
        put(doc, "prefix_length", self.prefix_length);
        put(doc, "fuzzy_transpositions", self.fuzzy_transpositions);
        put(doc, "fuzzy_rewrite", self.fuzzy_rewrite.clone());
        put(doc, "lenient", self.lenient);
        put(doc, "operator", self.operator);
        put(doc, "minimum_should_match", self.minimum_should_match.clone());
        put(doc, "slop", self.slop);
        put(doc, "zero_terms_query", self.zero_terms_query);
    }
}

// The option setters are identical for match and multi_match.
macro_rules! match_option_setters {
    () => {
        pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
            self.options.analyzer = Some(analyzer.into());
            self
        }

        pub fn auto_generate_synonyms_phrase_query(mut self, enabled: bool) -> Self {
            self.options.auto_generate_synonyms_phrase_query = Some(enabled);
            self
        }

        pub fn boost(mut self, boost: f64) -> Self {
            self.options.boost = Some(boost);
            self
        }

        pub fn fuzziness(mut self, fuzziness: impl Into<String>) -> Self {
            self.options.fuzziness = Some(fuzziness.into());
            self
        }

        pub fn max_expansions(mut self, n: u32) -> Self {
            self.options.max_expansions = Some(n);
            self
        }

        pub fn prefix_length(mut self, n: u32) -> Self {
            self.options.prefix_length = Some(n);
            self
        }

        pub fn fuzzy_transpositions(mut self, enabled: bool) -> Self {
            self.options.fuzzy_transpositions = Some(enabled);
            self
        }

        pub fn fuzzy_rewrite(mut self, rewrite: impl Into<String>) -> Self {
            self.options.fuzzy_rewrite = Some(rewrite.into());
            self
        }

        pub fn lenient(mut self, lenient: bool) -> Self {
            self.options.lenient = Some(lenient);
            self
        }

        pub fn operator(mut self, operator: MatchOperator) -> Self {
            self.options.operator = Some(operator);
            self
        }

        pub fn minimum_should_match(mut self, msm: impl Into<String>) -> Self {
            self.options.minimum_should_match = Some(msm.into());
            self
        }

        pub fn slop(mut self, slop: u32) -> Self {
            self.options.slop = Some(slop);
            self
        }

        pub fn zero_terms_query(mut self, zero_terms: ZeroTerms) -> Self {
            self.options.zero_terms_query = Some(zero_terms);
            self
        }
    };
}

/// A query of the match family against a single field
#[derive(Debug, Clone)]
pub struct MatchQuery {
    kind: MatchType,
    field: String,
    query: Option<Value>,
    options: MatchOptions,
}

impl MatchQuery {
    pub fn new(kind: MatchType, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            query: None,
            options: MatchOptions::default(),
        }
    }

    pub fn kind(&self) -> MatchType {
        self.kind
    }

    /// Replaces the text (or value) being searched for
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.query = Some(query.into());
        self
    }

    match_option_setters!();
}

/// `match` query
pub fn match_query(field: impl Into<String>, query: impl Into<Value>) -> MatchQuery {
    MatchQuery::new(MatchType::Match, field).query(query)
}

/// `match_bool_prefix` query
pub fn match_bool_prefix(field: impl Into<String>, query: impl Into<Value>) -> MatchQuery {
    MatchQuery::new(MatchType::BoolPrefix, field).query(query)
}

/// `match_phrase` query
pub fn match_phrase(field: impl Into<String>, query: impl Into<Value>) -> MatchQuery {
    MatchQuery::new(MatchType::Phrase, field).query(query)
}

/// `match_phrase_prefix` query
pub fn match_phrase_prefix(field: impl Into<String>, query: impl Into<Value>) -> MatchQuery {
    MatchQuery::new(MatchType::PhrasePrefix, field).query(query)
}

impl Mappable for MatchQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        put(&mut params, "query", self.query.clone());
        self.options.write(&mut params);
        wrap(self.kind.as_str(), wrap(&self.field, params))
    }
}

/// `multi_match` query: a match query over several fields
#[derive(Debug, Clone)]
pub struct MultiMatchQuery {
    query: Value,
    fields: Vec<String>,
    match_type: Option<MultiMatchType>,
    tie_breaker: Option<f64>,
    options: MatchOptions,
}

pub fn multi_match(query: impl Into<Value>) -> MultiMatchQuery {
    MultiMatchQuery {
        query: query.into(),
        fields: Vec::new(),
        match_type: None,
        tie_breaker: None,
        options: MatchOptions::default(),
    }
}

impl MultiMatchQuery {
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.query = query.into();
        self
    }

    /// Adds a field; `^` boosts such as `title^3` are passed through
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn match_type(mut self, match_type: MultiMatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }

    match_option_setters!();
}

impl Mappable for MultiMatchQuery {
    fn to_map(&self) -> Document {
        let mut params = Document::new();
        params.insert("query".to_string(), self.query.clone());
        if !self.fields.is_empty() {
            params.insert("fields".to_string(), self.fields.clone().into());
        }
        put(&mut params, "type", self.match_type);
        put(&mut params, "tie_breaker", self.tie_breaker);
        self.options.write(&mut params);
        wrap("multi_match", params)
    }
}
