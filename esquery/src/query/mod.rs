//! Query builders
//!
//! Every builder implements [`Mappable`](crate::Mappable) and can be nested
//! inside any compound query:
//!
//! - compound: `bool`, `boosting`, `constant_score`, `dis_max`
//! - full text: `match`, `match_bool_prefix`, `match_phrase`,
//!   `match_phrase_prefix`, `multi_match`
//! - term level: `term`, `terms`, `terms_set`, `range`, `exists`, `ids`,
//!   `prefix`, `wildcard`, `regexp`, `fuzzy`
//! - `match_all`, `match_none`, and [`custom_query`] for anything else

pub mod compound;
pub mod custom;
pub mod full_text;
pub mod match_all;
pub mod term_level;
pub mod types;

pub use compound::{
    bool_query, boosting, constant_score, dis_max, BoolQuery, BoostingQuery,
    ConstantScoreQuery, DisMaxQuery,
};
pub use custom::{custom_query, CustomQuery};
pub use full_text::{
    match_bool_prefix, match_phrase, match_phrase_prefix, match_query, multi_match,
    MatchQuery, MatchType, MultiMatchQuery,
};
pub use match_all::{match_all, match_none, MatchAllQuery};
pub use term_level::{
    exists, fuzzy, ids, prefix, range, regexp, term, terms, terms_set, wildcard, ExistsQuery,
    FuzzyQuery, IdsQuery, PrefixQuery, RangeQuery, RegexpQuery, TermQuery, TermsQuery,
    TermsSetQuery, WildcardQuery,
};
pub use types::{MatchOperator, MultiMatchType, RangeRelation, ZeroTerms};
