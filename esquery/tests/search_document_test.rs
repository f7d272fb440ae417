//! End-to-end shape of realistic request bodies built through the public API.

use esquery::{
    avg, bool_query, cardinality, custom_agg, custom_query, date_histogram_agg, exists,
    filter_agg, highlight, match_phrase, multi_match, nested_agg, percentiles, range, search,
    term, terms, terms_agg, top_hits, Mappable, MultiMatchType, Order,
};
use serde_json::json;

#[test]
fn test_storefront_search() {
    let req = search()
        .query(
            bool_query()
                .must(
                    multi_match("wireless headphones")
                        .fields(["title^3", "description"])
                        .match_type(MultiMatchType::BestFields),
                )
                .filter(terms("brand", ["acme", "globex"]))
                .filter(range("price").gte(20).lte(300))
                .must_not(exists("discontinued_at")),
        )
        .aggs(
            terms_agg("brands", "brand")
                .size(10)
                .aggs(avg("avg_price", "price")),
        )
        .aggs(
            filter_agg("in_stock", term("stock.available", true))
                .aggs(cardinality("sellers", "seller_id").precision_threshold(100)),
        )
        .post_filter(term("color", "black"))
        .from(0)
        .size(24)
        .sort("_score", Order::Desc)
        .sort("price", Order::Asc)
        .source_includes(["title", "price", "brand"])
        .highlight(
            highlight()
                .pre_tags(["<mark>"])
                .post_tags(["</mark>"])
                .field("title"),
        );

    assert_eq!(
        req.to_value(),
        json!({
            "query": {
                "bool": {
                    "must": [{
                        "multi_match": {
                            "query": "wireless headphones",
                            "fields": ["title^3", "description"],
                            "type": "best_fields"
                        }
                    }],
                    "filter": [
                        {"terms": {"brand": ["acme", "globex"]}},
                        {"range": {"price": {"gte": 20, "lte": 300}}}
                    ],
                    "must_not": [{"exists": {"field": "discontinued_at"}}]
                }
            },
            "aggs": {
                "brands": {
                    "terms": {"field": "brand", "size": 10},
                    "aggs": {"avg_price": {"avg": {"field": "price"}}}
                },
                "in_stock": {
                    "filter": {"term": {"stock.available": {"value": true}}},
                    "aggs": {
                        "sellers": {
                            "cardinality": {"field": "seller_id", "precision_threshold": 100}
                        }
                    }
                }
            },
            "post_filter": {"term": {"color": {"value": "black"}}},
            "from": 0,
            "size": 24,
            "sort": [
                {"_score": {"order": "desc"}},
                {"price": {"order": "asc"}}
            ],
            "_source": {"includes": ["title", "price", "brand"]},
            "highlight": {
                "pre_tags": ["<mark>"],
                "post_tags": ["</mark>"],
                "fields": {"title": {}}
            }
        })
    );
}

#[test]
fn test_log_analytics_aggregations() {
    let req = search()
        .query(range("@timestamp").gte("now-1d/d").lt("now/d"))
        .size(0)
        .aggs(
            date_histogram_agg("per_hour", "@timestamp")
                .fixed_interval("1h")
                .min_doc_count(0)
                .aggs(percentiles("latency", "duration_ms").percents([50.0, 95.0, 99.0])),
        )
        .aggs(
            nested_agg("by_tag", "tags").aggs(
                terms_agg("tag_names", "tags.name").aggs(
                    top_hits("latest")
                        .size(1)
                        .sort("@timestamp", Order::Desc),
                ),
            ),
        );

    let body = req.to_value();
    assert_eq!(body["size"], json!(0));
    assert_eq!(
        body["aggs"]["per_hour"],
        json!({
            "date_histogram": {
                "field": "@timestamp",
                "fixed_interval": "1h",
                "min_doc_count": 0
            },
            "aggs": {
                "latency": {
                    "percentiles": {"field": "duration_ms", "percents": [50.0, 95.0, 99.0]}
                }
            }
        })
    );
    assert_eq!(
        body["aggs"]["by_tag"],
        json!({
            "nested": {"path": "tags"},
            "aggs": {
                "tag_names": {
                    "terms": {"field": "tags.name"},
                    "aggs": {
                        "latest": {
                            "top_hits": {
                                "size": 1,
                                "sort": [{"@timestamp": {"order": "desc"}}]
                            }
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn test_custom_escape_hatches_mix_with_builders() {
    let geo = json!({
        "geo_distance": {"distance": "12km", "pin.location": {"lat": 40.0, "lon": -70.0}}
    });
    let significant = json!({"significant_terms": {"field": "crime_type"}});

    let req = search()
        .query(
            bool_query()
                .must(match_phrase("title", "pizza place"))
                .filter(custom_query(geo.as_object().cloned().unwrap_or_default())),
        )
        .aggs(custom_agg(
            "significant_crime_types",
            significant.as_object().cloned().unwrap_or_default(),
        ));

    assert_eq!(
        req.to_value(),
        json!({
            "query": {
                "bool": {
                    "must": [{"match_phrase": {"title": {"query": "pizza place"}}}],
                    "filter": [geo]
                }
            },
            "aggs": {"significant_crime_types": significant}
        })
    );
}

#[test]
fn test_body_bytes_are_compact_and_ordered() {
    let req = search()
        .size(5)
        .query(term("user", "kimchy"))
        .sort("date", Order::Desc);
    let body = String::from_utf8(req.body().unwrap()).unwrap();
    assert_eq!(
        body,
        r#"{"query":{"term":{"user":{"value":"kimchy"}}},"size":5,"sort":[{"date":{"order":"desc"}}]}"#
    );
}
