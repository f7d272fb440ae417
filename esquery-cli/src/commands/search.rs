use super::count::index_label;
use super::{print_body, print_response};
use crate::filters::{parse_agg, parse_sort, FilterArgs};
use anyhow::Result;
use clap::Args;
use esquery::{search, Client, RequestOptions, SearchRequest};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Number of hits to return
    #[arg(long)]
    pub size: Option<u64>,

    /// Offset of the first hit
    #[arg(long)]
    pub from: Option<u64>,

    /// Sort by field, as field[:asc|desc] (repeatable)
    #[arg(long, value_name = "FIELD[:ORDER]")]
    pub sort: Vec<String>,

    /// Aggregation, as kind:name:field (repeatable)
    #[arg(long = "agg", value_name = "KIND:NAME:FIELD")]
    pub aggs: Vec<String>,
}

impl SearchArgs {
    pub fn to_request(&self) -> Result<SearchRequest> {
        let mut request = search().query(self.filters.to_query()?);
        for raw in &self.aggs {
            request = request.aggs(parse_agg(raw)?);
        }
        if let Some(from) = self.from {
            request = request.from(from);
        }
        if let Some(size) = self.size {
            request = request.size(size);
        }
        for raw in &self.sort {
            let (field, order) = parse_sort(raw)?;
            request = request.sort(field, order);
        }
        Ok(request)
    }
}

/// Run a search and print the raw response
pub async fn run_search(client: &Client, args: &SearchArgs) -> Result<()> {
    let request = args.to_request()?;
    if args.filters.dry_run {
        return print_body(&request);
    }

    tracing::info!("Searching {}", index_label(&args.filters.indices));
    let response = request
        .run(
            client,
            RequestOptions::new().indices(args.filters.indices.iter().cloned()),
        )
        .await?;
    print_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use esquery::Mappable;
    use serde_json::json;

    #[test]
    fn test_search_args_to_request() {
        let args = SearchArgs {
            filters: FilterArgs {
                terms: vec!["user=kimchy".into()],
                ..Default::default()
            },
            size: Some(0),
            from: None,
            sort: vec!["date:desc".into()],
            aggs: vec!["max:latest:date".into()],
        };
        assert_eq!(
            args.to_request().unwrap().to_value(),
            json!({
                "query": {"bool": {"filter": [{"term": {"user": {"value": "kimchy"}}}]}},
                "aggs": {"latest": {"max": {"field": "date"}}},
                "size": 0,
                "sort": [{"date": {"order": "desc"}}]
            })
        );
    }

    #[test]
    fn test_bad_agg_rejected() {
        let args = SearchArgs {
            filters: FilterArgs::default(),
            size: None,
            from: None,
            sort: vec![],
            aggs: vec!["bogus".into()],
        };
        assert!(args.to_request().is_err());
    }
}
