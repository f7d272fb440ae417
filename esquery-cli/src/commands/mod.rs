pub mod count;
pub mod delete;
pub mod search;

pub use count::run_count;
pub use delete::run_delete;
pub use search::{run_search, SearchArgs};

use anyhow::Result;
use serde_json::Value;

/// Prints a request body as pretty JSON
pub fn print_body(body: &impl esquery::Mappable) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&body.to_value())?);
    Ok(())
}

/// Prints the response body, pretty when it is JSON. Error statuses are
/// printed too and then reported as a failure.
pub async fn print_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    if !status.is_success() {
        anyhow::bail!("Elasticsearch answered {}", status);
    }
    Ok(())
}
