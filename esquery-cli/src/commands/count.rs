use super::{print_body, print_response};
use crate::filters::FilterArgs;
use anyhow::Result;
use esquery::{count, Client, RequestOptions};

/// Count documents matching the filters
pub async fn run_count(client: &Client, args: &FilterArgs) -> Result<()> {
    let request = count(args.to_query()?);
    if args.dry_run {
        return print_body(&request);
    }

    tracing::info!("Counting in {}", index_label(&args.indices));
    let response = request
        .run(client, RequestOptions::new().indices(args.indices.iter().cloned()))
        .await?;
    print_response(response).await
}

pub(crate) fn index_label(indices: &[String]) -> String {
    if indices.is_empty() {
        "<default>".to_string()
    } else {
        indices.join(",")
    }
}
