use std::time::Duration;

use reqwest::{Client, Proxy};
use url::Url;

use super::models::{FindWordsRequest, ResultSet};
use crate::config::ServiceConfig;
use crate::{Error, Result};

const FIND_WORDS_PATH: &str = "api/find-words";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Source of word-finding results
#[async_trait::async_trait]
pub trait WordFinder: Send + Sync {
    /// Find all words that can be built from `letters`, in service order
    async fn find_words(&self, letters: &str) -> Result<ResultSet>;
}

/// Word finder backed by the HTTP word service
pub struct HttpWordFinder {
    client: Client,
    endpoint: Url,
}

impl HttpWordFinder {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Self::build_client(config.request_timeout_secs, &config.proxy_url)?;
        let endpoint = Self::resolve_endpoint(&config.base_url)?;

        Ok(Self { client, endpoint })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true);

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for word service");
        }

        builder.build().map_err(Error::Http)
    }

    /// `base_url` may carry a path prefix; the endpoint is appended to it
    fn resolve_endpoint(base_url: &str) -> Result<Url> {
        let base = format!("{}/", base_url.trim_end_matches('/'));
        Ok(Url::parse(&base)?.join(FIND_WORDS_PATH)?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl WordFinder for HttpWordFinder {
    async fn find_words(&self, letters: &str) -> Result<ResultSet> {
        tracing::debug!(letters, endpoint = %self.endpoint, "Requesting words");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&FindWordsRequest { letters })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Service {
                status: status.as_u16(),
                message: truncate_chars(body.trim(), MAX_ERROR_BODY_CHARS).to_string(),
            });
        }

        let set: ResultSet = response.json().await?;
        tracing::debug!(letters, words = set.len(), "Word service responded");
        Ok(set)
    }
}

fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}
