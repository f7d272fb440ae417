use super::{print_body, print_response};
use crate::filters::FilterArgs;
use anyhow::{bail, Result};
use esquery::{delete, Client, RequestOptions};

/// Delete every document matching the filters
pub async fn run_delete(client: &Client, args: &FilterArgs, yes: bool) -> Result<()> {
    let indices = args.named_indices();
    let request = delete()
        .index(indices.iter().cloned())
        .query(args.to_query()?);
    if args.dry_run {
        return print_body(&request);
    }
    check_targets(&indices, yes)?;

    tracing::warn!("Deleting by query from {}", indices.join(","));
    let response = request.run(client, RequestOptions::new()).await?;
    print_response(response).await
}

fn check_targets(indices: &[String], yes: bool) -> Result<()> {
    if indices.is_empty() {
        bail!("delete requires at least one non-blank --index");
    }
    if !yes {
        bail!(
            "refusing to delete from {} without --yes",
            indices.join(",")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_indices_do_not_count_as_targets() {
        let args = FilterArgs {
            indices: vec!["".into(), "  ".into()],
            ..Default::default()
        };
        let indices = args.named_indices();
        assert!(indices.is_empty());
        assert!(check_targets(&indices, true).is_err());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let indices = vec!["tweets".to_string()];
        assert!(check_targets(&indices, false).is_err());
        assert!(check_targets(&indices, true).is_ok());
    }
}
