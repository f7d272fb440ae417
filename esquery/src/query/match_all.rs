use crate::mappable::{put, wrap, Document, Mappable};

/// `match_all` / `match_none` query
#[derive(Debug, Clone, Copy)]
pub struct MatchAllQuery {
    all: bool,
    boost: Option<f64>,
}

pub fn match_all() -> MatchAllQuery {
    MatchAllQuery {
        all: true,
        boost: None,
    }
}

pub fn match_none() -> MatchAllQuery {
    MatchAllQuery {
        all: false,
        boost: None,
    }
}

impl MatchAllQuery {
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Mappable for MatchAllQuery {
    fn to_map(&self) -> Document {
        let mut inner = Document::new();
        put(&mut inner, "boost", self.boost);
        let key = if self.all { "match_all" } else { "match_none" };
        wrap(key, inner)
    }
}
