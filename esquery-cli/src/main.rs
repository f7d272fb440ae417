use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use esquery::{Client, ClientConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod filters;

use filters::FilterArgs;

#[derive(Parser, Debug)]
#[command(name = "esq")]
#[command(about = "esq - build and run Elasticsearch queries from the command line")]
#[command(version)]
struct Cli {
    /// Path to a TOML client config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Elasticsearch URL, overriding the config file
    #[arg(long, env = "ELASTICSEARCH_URL", global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search documents
    Search(commands::SearchArgs),

    /// Count matching documents
    Count(FilterArgs),

    /// Delete matching documents
    Delete {
        #[command(flatten)]
        filters: FilterArgs,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::from_env(),
    };
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let client = Client::new(&config)
        .with_context(|| format!("Invalid Elasticsearch URL '{}'", config.url))?;
    tracing::debug!("Using {}", client.base_url());

    match &cli.command {
        Commands::Search(args) => commands::run_search(&client, args).await?,
        Commands::Count(args) => commands::run_count(&client, args).await?,
        Commands::Delete { filters, yes } => commands::run_delete(&client, filters, *yes).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "esq",
            "--url",
            "http://es:9200",
            "search",
            "-i",
            "logs-*",
            "--term",
            "level=error",
            "--sort",
            "@timestamp:desc",
            "--size",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://es:9200"));
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.filters.indices, vec!["logs-*"]);
                assert_eq!(args.filters.terms, vec!["level=error"]);
                assert_eq!(args.size, Some(5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_delete() {
        let cli =
            Cli::try_parse_from(["esq", "delete", "--index", "tweets", "--exists", "spam", "--yes"])
                .unwrap();
        match cli.command {
            Commands::Delete { filters, yes } => {
                assert!(yes);
                assert_eq!(filters.indices, vec!["tweets"]);
                assert_eq!(filters.exists, vec!["spam"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_url_flag_overrides_config() {
        let cli = Cli::try_parse_from(["esq", "--url", "http://other:9200", "count"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.url, "http://other:9200");
    }
}
