//! Builder for the `highlight` section of a search request

use crate::mappable::{put, Document, Mappable};
use serde_json::Value;

/// Highlighter implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlighterType {
    Unified,
    Plain,
    Fvh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryScanner {
    Chars,
    Sentence,
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEncoder {
    Default,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragmenter {
    Simple,
    Span,
}

/// Sort order of highlighted fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightOrder {
    None,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagsSchema {
    Styled,
}

impl HighlighterType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Unified => "unified",
            Self::Plain => "plain",
            Self::Fvh => "fvh",
        }
    }
}

impl BoundaryScanner {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Chars => "chars",
            Self::Sentence => "sentence",
            Self::Word => "word",
        }
    }
}

impl HighlightEncoder {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Html => "html",
        }
    }
}

impl Fragmenter {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Span => "span",
        }
    }
}

impl HighlightOrder {
    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Score => "score",
        }
    }
}

impl TagsSchema {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Styled => "styled",
        }
    }
}

/// Highlighting options, either for the whole request or for a single field
#[derive(Default)]
pub struct Highlight {
    pre_tags: Vec<String>,
    post_tags: Vec<String>,
    fields: Vec<(String, Option<Highlight>)>,
    highlight_type: Option<HighlighterType>,
    boundary_chars: Option<String>,
    boundary_max_scan: Option<u32>,
    boundary_scanner: Option<BoundaryScanner>,
    boundary_scanner_locale: Option<String>,
    encoder: Option<HighlightEncoder>,
    force_source: Option<bool>,
    fragmenter: Option<Fragmenter>,
    fragment_offset: Option<u32>,
    fragment_size: Option<u32>,
    highlight_query: Option<Box<dyn Mappable>>,
    matched_fields: Vec<String>,
    no_match_size: Option<u32>,
    number_of_fragments: Option<u32>,
    order: Option<HighlightOrder>,
    phrase_limit: Option<u32>,
    require_field_match: Option<bool>,
    tags_schema: Option<TagsSchema>,
}

pub fn highlight() -> Highlight {
    Highlight::default()
}

impl Highlight {
    pub fn pre_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pre_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn post_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Highlights `name` with the request-level options
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), None));
        self
    }

    /// Highlights `name` with options of its own
    pub fn field_with(mut self, name: impl Into<String>, options: Highlight) -> Self {
        self.fields.push((name.into(), Some(options)));
        self
    }

    pub fn highlight_type(mut self, t: HighlighterType) -> Self {
        self.highlight_type = Some(t);
        self
    }

    pub fn boundary_chars(mut self, chars: impl Into<String>) -> Self {
        self.boundary_chars = Some(chars.into());
        self
    }

    pub fn boundary_max_scan(mut self, n: u32) -> Self {
        self.boundary_max_scan = Some(n);
        self
    }

    pub fn boundary_scanner(mut self, scanner: BoundaryScanner) -> Self {
        self.boundary_scanner = Some(scanner);
        self
    }

    pub fn boundary_scanner_locale(mut self, locale: impl Into<String>) -> Self {
        self.boundary_scanner_locale = Some(locale.into());
        self
    }

    pub fn encoder(mut self, encoder: HighlightEncoder) -> Self {
        self.encoder = Some(encoder);
        self
    }

    pub fn force_source(mut self, force: bool) -> Self {
        self.force_source = Some(force);
        self
    }

    pub fn fragmenter(mut self, fragmenter: Fragmenter) -> Self {
        self.fragmenter = Some(fragmenter);
        self
    }

    pub fn fragment_offset(mut self, offset: u32) -> Self {
        self.fragment_offset = Some(offset);
        self
    }

    pub fn fragment_size(mut self, size: u32) -> Self {
        self.fragment_size = Some(size);
        self
    }

    /// Highlights matches of a query other than the search query
    pub fn highlight_query(mut self, query: impl Mappable + 'static) -> Self {
        self.highlight_query = Some(Box::new(query));
        self
    }

    pub fn matched_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matched_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn no_match_size(mut self, size: u32) -> Self {
        self.no_match_size = Some(size);
        self
    }

    pub fn number_of_fragments(mut self, n: u32) -> Self {
        self.number_of_fragments = Some(n);
        self
    }

    pub fn order(mut self, order: HighlightOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn phrase_limit(mut self, limit: u32) -> Self {
        self.phrase_limit = Some(limit);
        self
    }

    pub fn require_field_match(mut self, require: bool) -> Self {
        self.require_field_match = Some(require);
        self
    }

    pub fn tags_schema(mut self, schema: TagsSchema) -> Self {
        self.tags_schema = Some(schema);
        self
    }
}

fn tag_list(tags: &[String]) -> Option<Value> {
    (!tags.is_empty()).then(|| tags.to_vec().into())
}

impl Mappable for Highlight {
    /// The section body itself; the search request places it under `highlight`.
    fn to_map(&self) -> Document {
        let mut doc = Document::new();
        put(&mut doc, "pre_tags", tag_list(&self.pre_tags));
        put(&mut doc, "post_tags", tag_list(&self.post_tags));
        if !self.fields.is_empty() {
            let fields: Document = self
                .fields
                .iter()
                .map(|(name, options)| {
                    let body = options.as_ref().map(|h| h.to_map()).unwrap_or_default();
                    (name.clone(), Value::Object(body))
                })
                .collect();
            doc.insert("fields".to_string(), Value::Object(fields));
        }
        put(&mut doc, "type", self.highlight_type.map(|t| t.as_str()));
        put(&mut doc, "boundary_chars", self.boundary_chars.clone());
        put(&mut doc, "boundary_max_scan", self.boundary_max_scan);
        put(&mut doc, "boundary_scanner", self.boundary_scanner.map(|b| b.as_str()));
        put(&mut doc, "boundary_scanner_locale", self.boundary_scanner_locale.clone());
        put(&mut doc, "encoder", self.encoder.map(|e| e.as_str()));
        put(&mut doc, "force_source", self.force_source);
        put(&mut doc, "fragmenter", self.fragmenter.map(|f| f.as_str()));
        put(&mut doc, "fragment_offset", self.fragment_offset);
        put(&mut doc, "fragment_size", self.fragment_size);
        put(
            &mut doc,
            "highlight_query",
            self.highlight_query.as_ref().map(|q| q.to_value()),
        );
        put(&mut doc, "matched_fields", tag_list(&self.matched_fields));
        put(&mut doc, "no_match_size", self.no_match_size);
        put(&mut doc, "number_of_fragments", self.number_of_fragments);
        put(&mut doc, "order", self.order.map(|o| o.as_str()));
        put(&mut doc, "phrase_limit", self.phrase_limit);
        put(&mut doc, "require_field_match", self.require_field_match);
        put(&mut doc, "tags_schema", self.tags_schema.map(|t| t.as_str()));
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::match_query;
    use serde_json::json;

    #[test]
    fn test_empty_highlight() {
        assert_eq!(highlight().to_value(), json!({}));
    }

    #[test]
    fn test_highlight_fields() {
        let h = highlight()
            .pre_tags(["<em>"])
            .post_tags(["</em>"])
            .field("title")
            .field_with(
                "body",
                highlight().fragment_size(150).number_of_fragments(3),
            );
        assert_eq!(
            h.to_value(),
            json!({
                "pre_tags": ["<em>"],
                "post_tags": ["</em>"],
                "fields": {
                    "title": {},
                    "body": {"fragment_size": 150, "number_of_fragments": 3}
                }
            })
        );
    }

    #[test]
    fn test_highlight_field_order_preserved() {
        let h = highlight().field("zeta").field("alpha").field("mid");
        let doc = h.to_map();
        let keys: Vec<&String> = doc["fields"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_highlight_options() {
        let h = highlight()
            .highlight_type(HighlighterType::Fvh)
            .boundary_scanner(BoundaryScanner::Sentence)
            .boundary_scanner_locale("en-US")
            .boundary_chars(".,!?")
            .boundary_max_scan(20)
            .encoder(HighlightEncoder::Html)
            .fragmenter(Fragmenter::Span)
            .fragment_offset(2)
            .force_source(true)
            .matched_fields(["comment", "comment.plain"])
            .no_match_size(150)
            .order(HighlightOrder::Score)
            .phrase_limit(256)
            .require_field_match(false)
            .tags_schema(TagsSchema::Styled)
            .highlight_query(match_query("comment", "foo bar"));
        assert_eq!(
            h.to_value(),
            json!({
                "type": "fvh",
                "boundary_chars": ".,!?",
                "boundary_max_scan": 20,
                "boundary_scanner": "sentence",
                "boundary_scanner_locale": "en-US",
                "encoder": "html",
                "force_source": true,
                "fragmenter": "span",
                "fragment_offset": 2,
                "highlight_query": {"match": {"comment": {"query": "foo bar"}}},
                "matched_fields": ["comment", "comment.plain"],
                "no_match_size": 150,
                "order": "score",
                "phrase_limit": 256,
                "require_field_match": false,
                "tags_schema": "styled"
            })
        );
    }
}
