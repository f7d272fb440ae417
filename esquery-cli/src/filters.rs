//! Parsing of command line filter, sort and aggregation flags into builders

use anyhow::{bail, Context, Result};
use clap::Args;
use esquery::{
    avg, bool_query, cardinality, exists, match_all, match_query, max, min, percentiles, range,
    stats, string_stats, sum, term, terms_agg, value_count, Aggregation, Mappable, Order,
};
use serde_json::Value;

/// Filters shared by every subcommand. All given filters must match.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Target index, alias or pattern (repeatable)
    #[arg(short, long = "index")]
    pub indices: Vec<String>,

    /// Full-text match, as field=text
    #[arg(long = "match", value_name = "FIELD=TEXT")]
    pub matches: Vec<String>,

    /// Exact term, as field=value
    #[arg(long = "term", value_name = "FIELD=VALUE")]
    pub terms: Vec<String>,

    /// Field must have a value
    #[arg(long = "exists", value_name = "FIELD")]
    pub exists: Vec<String>,

    /// Inclusive range, as field=gte..lte (either bound may be empty)
    #[arg(long = "range", value_name = "FIELD=FROM..TO")]
    pub ranges: Vec<String>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl FilterArgs {
    /// `--index` values with blank entries dropped
    pub fn named_indices(&self) -> Vec<String> {
        self.indices
            .iter()
            .map(|index| index.trim())
            .filter(|index| !index.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Combines all filters into one query; no filters means `match_all`
    pub fn to_query(&self) -> Result<Box<dyn Mappable>> {
        if self.matches.is_empty()
            && self.terms.is_empty()
            && self.exists.is_empty()
            && self.ranges.is_empty()
        {
            return Ok(Box::new(match_all()));
        }

        let mut query = bool_query();
        for raw in &self.matches {
            let (field, text) = split_pair(raw)?;
            query = query.must(match_query(field, text));
        }
        for raw in &self.terms {
            let (field, value) = split_pair(raw)?;
            query = query.filter(term(field, scalar(value)));
        }
        for field in &self.exists {
            query = query.filter(exists(field.as_str()));
        }
        for raw in &self.ranges {
            let (field, bounds) = split_pair(raw)?;
            let (from, to) = bounds
                .split_once("..")
                .with_context(|| format!("range '{}' must look like field=from..to", raw))?;
            if from.is_empty() && to.is_empty() {
                bail!("range '{}' needs at least one bound", raw);
            }
            let mut r = range(field);
            if !from.is_empty() {
                r = r.gte(scalar(from));
            }
            if !to.is_empty() {
                r = r.lte(scalar(to));
            }
            query = query.filter(r);
        }
        Ok(Box::new(query))
    }
}

fn split_pair(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field, value)),
        _ => bail!("expected field=value, got '{}'", raw),
    }
}

/// Numbers and booleans are sent as JSON scalars, everything else as a string
pub fn scalar(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_))) => v,
        _ => Value::String(raw.to_string()),
    }
}

/// Parses `field` or `field:asc|desc`; the order defaults to ascending
pub fn parse_sort(raw: &str) -> Result<(String, Order)> {
    match raw.rsplit_once(':') {
        Some((field, order)) if !field.is_empty() => {
            let order = order.parse::<Order>().map_err(anyhow::Error::msg)?;
            Ok((field.to_string(), order))
        }
        Some(_) => bail!("sort '{}' is missing a field", raw),
        None => Ok((raw.to_string(), Order::Asc)),
    }
}

/// Parses `kind:name:field` into an aggregation
pub fn parse_agg(raw: &str) -> Result<Box<dyn Aggregation>> {
    let mut parts = raw.splitn(3, ':');
    let (Some(kind), Some(name), Some(field)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("aggregation '{}' must look like kind:name:field", raw);
    };
    if name.is_empty() || field.is_empty() {
        bail!("aggregation '{}' must look like kind:name:field", raw);
    }

    let agg: Box<dyn Aggregation> = match kind {
        "avg" => Box::new(avg(name, field)),
        "max" => Box::new(max(name, field)),
        "min" => Box::new(min(name, field)),
        "sum" => Box::new(sum(name, field)),
        "value_count" => Box::new(value_count(name, field)),
        "stats" => Box::new(stats(name, field)),
        "cardinality" => Box::new(cardinality(name, field)),
        "string_stats" => Box::new(string_stats(name, field)),
        "percentiles" => Box::new(percentiles(name, field)),
        "terms" => Box::new(terms_agg(name, field)),
        other => bail!("unsupported aggregation kind '{}'", other),
    };
    Ok(agg)
}
