//! Thin pass-through over `reqwest` for executing assembled requests
//!
//! The client never inspects the reply: whatever Elasticsearch answers, error
//! statuses included, is handed back as the raw [`reqwest::Response`].

use crate::config::{ClientConfig, Credentials};
use crate::{Error, Result};
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use std::time::Duration;
use url::Url;

/// Per-call options supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    indices: Vec<String>,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets an index, alias or pattern; may be called repeatedly
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.indices.push(index.into());
        self
    }

    pub fn indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices.extend(indices.into_iter().map(Into::into));
        self
    }

    /// Adds a URL query parameter such as `routing` or `track_total_hits`
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Timeout for this call only, overriding the client's
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn index_names(&self) -> &[String] {
        &self.indices
    }
}

/// Elasticsearch endpoint plus the HTTP client used to reach it
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<Credentials>,
    default_index: Option<String>,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url()?,
            credentials: config.credentials(),
            default_index: config.default_index.clone(),
        })
    }

    /// Unauthenticated client for `url` with default settings
    pub fn from_url(url: &str) -> Result<Self> {
        Self::new(&ClientConfig {
            url: url.to_string(),
            ..Default::default()
        })
    }

    /// Client configured from `ELASTICSEARCH_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Wraps an existing `reqwest::Client`, e.g. one with custom TLS roots
    pub fn with_http_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            credentials: None,
            default_index: None,
        }
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn default_index(mut self, index: impl Into<String>) -> Self {
        self.default_index = Some(index.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolves `/{indices}/{api}` against the base URL. The client's default
    /// index is used when `indices` is empty. Blank index names are rejected.
    pub fn endpoint(&self, indices: &[String], api: &str) -> Result<Url> {
        if indices.iter().any(|index| index.trim().is_empty()) {
            return Err(Error::MissingIndex(format!(
                "blank index name in target for {}",
                api
            )));
        }
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Config(format!("not a base URL: {}", self.base_url)))?;
            segments.pop_if_empty();
            if !indices.is_empty() {
                segments.push(&indices.join(","));
            } else if let Some(index) = &self.default_index {
                segments.push(index);
            }
            segments.push(api);
        }
        Ok(url)
    }

    /// Sends `body` to `api` and returns the response untouched
    pub async fn send(
        &self,
        method: Method,
        api: &str,
        indices: &[String],
        options: &RequestOptions,
        body: Vec<u8>,
    ) -> Result<Response> {
        let url = self.endpoint(indices, api)?;
        tracing::debug!("{} {} ({} bytes)", method, url, body.len());
        tracing::trace!("request body: {}", String::from_utf8_lossy(&body));

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if !options.params.is_empty() {
            request = request.query(&options.params);
        }

        for (key, value) in &options.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::InvalidHeader(format!("{}: {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidHeader(format!("{}: {}", key, e)))?;
            request = request.header(name, value);
        }

        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        request = match &self.credentials {
            Some(Credentials::Basic { username, password }) => {
                request.basic_auth(username, password.as_ref())
            }
            Some(Credentials::ApiKey(key)) => request.header(AUTHORIZATION, format!("ApiKey {}", key)),
            None => request,
        };

        let response = request.send().await?;
        tracing::debug!("{} answered {}", api, response.status());
        Ok(response)
    }
}
