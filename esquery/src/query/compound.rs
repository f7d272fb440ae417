//! Compound queries: containers that wrap other queries
//!
//! Clause lists are always emitted as JSON arrays, even when they hold a single
//! query. Elasticsearch also accepts a bare object there, but this builder never
//! produces that short form.

use crate::mappable::{put, to_array, wrap, Document, Mappable};

/// `bool` query combining clauses with must/filter/must_not/should logic
#[derive(Default)]
pub struct BoolQuery {
    must: Vec<Box<dyn Mappable>>,
    filter: Vec<Box<dyn Mappable>>,
    must_not: Vec<Box<dyn Mappable>>,
    should: Vec<Box<dyn Mappable>>,
    minimum_should_match: Option<i64>,
    boost: Option<f64>,
}

/// Creates an empty `bool` query
pub fn bool_query() -> BoolQuery {
    BoolQuery::default()
}

impl BoolQuery {
    pub fn must(mut self, query: impl Mappable + 'static) -> Self {
        self.must.push(Box::new(query));
        self
    }

    pub fn filter(mut self, query: impl Mappable + 'static) -> Self {
        self.filter.push(Box::new(query));
        self
    }

    pub fn must_not(mut self, query: impl Mappable + 'static) -> Self {
        self.must_not.push(Box::new(query));
        self
    }

    pub fn should(mut self, query: impl Mappable + 'static) -> Self {
        self.should.push(Box::new(query));
        self
    }

    pub fn minimum_should_match(mut self, n: i64) -> Self {
        self.minimum_should_match = Some(n);
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// True when no clause has been added
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.filter.is_empty()
            && self.must_not.is_empty()
            && self.should.is_empty()
    }
}

impl Mappable for BoolQuery {
    fn to_map(&self) -> Document {
        let mut inner = Document::new();
        for (key, clauses) in [
            ("must", &self.must),
            ("filter", &self.filter),
            ("must_not", &self.must_not),
            ("should", &self.should),
        ] {
            if !clauses.is_empty() {
                inner.insert(key.to_string(), to_array(clauses));
            }
        }
        put(&mut inner, "minimum_should_match", self.minimum_should_match);
        put(&mut inner, "boost", self.boost);
        wrap("bool", inner)
    }
}

/// `boosting` query: demotes documents matching a negative query
#[derive(Default)]
pub struct BoostingQuery {
    positive: Option<Box<dyn Mappable>>,
    negative: Option<Box<dyn Mappable>>,
    negative_boost: Option<f64>,
}

pub fn boosting() -> BoostingQuery {
    BoostingQuery::default()
}

impl BoostingQuery {
    pub fn positive(mut self, query: impl Mappable + 'static) -> Self {
        self.positive = Some(Box::new(query));
        self
    }

    pub fn negative(mut self, query: impl Mappable + 'static) -> Self {
        self.negative = Some(Box::new(query));
        self
    }

    pub fn negative_boost(mut self, boost: f64) -> Self {
        self.negative_boost = Some(boost);
        self
    }
}

impl Mappable for BoostingQuery {
    fn to_map(&self) -> Document {
        let mut inner = Document::new();
        put(&mut inner, "positive", self.positive.as_ref().map(|q| q.to_value()));
        put(&mut inner, "negative", self.negative.as_ref().map(|q| q.to_value()));
        put(&mut inner, "negative_boost", self.negative_boost);
        wrap("boosting", inner)
    }
}

/// `constant_score` query: wraps a filter and gives every hit the same score
pub struct ConstantScoreQuery {
    filter: Box<dyn Mappable>,
    boost: Option<f64>,
}

pub fn constant_score(filter: impl Mappable + 'static) -> ConstantScoreQuery {
    ConstantScoreQuery {
        filter: Box::new(filter),
        boost: None,
    }
}

impl ConstantScoreQuery {
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Mappable for ConstantScoreQuery {
    fn to_map(&self) -> Document {
        let mut inner = Document::new();
        inner.insert("filter".to_string(), self.filter.to_value());
        put(&mut inner, "boost", self.boost);
        wrap("constant_score", inner)
    }
}

/// `dis_max` query: scores by the best matching sub-query
#[derive(Default)]
pub struct DisMaxQuery {
    queries: Vec<Box<dyn Mappable>>,
    tie_breaker: Option<f64>,
}

pub fn dis_max() -> DisMaxQuery {
    DisMaxQuery::default()
}

impl DisMaxQuery {
    pub fn query(mut self, query: impl Mappable + 'static) -> Self {
        self.queries.push(Box::new(query));
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }
}

impl Mappable for DisMaxQuery {
    fn to_map(&self) -> Document {
        let mut inner = Document::new();
        inner.insert("queries".to_string(), to_array(&self.queries));
        put(&mut inner, "tie_breaker", self.tie_breaker);
        wrap("dis_max", inner)
    }
}
