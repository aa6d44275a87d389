//! News search: SerpAPI client plus the supplementary-data step built on it.

pub mod supplementary;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub use supplementary::search_supplementary_data;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API returned status {status}")]
    Api { status: u16 },

    #[error("Search API error: {0}")]
    Provider(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters for one news search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub engine: String,
    pub q: String,
    /// Result-count hint; the provider may return more or fewer.
    pub num: u32,
}

/// A single news hit, reduced to the fields the press kit uses.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsResult {
    pub title: String,
    pub source: String,
}

#[async_trait]
pub trait NewsSearch: Send + Sync {
    async fn search_news(&self, query: &SearchQuery) -> Result<Vec<NewsResult>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    news_results: Vec<RawNewsResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNewsResult {
    title: Option<String>,
    source: Option<RawSource>,
}

/// `google_news` reports the source either as a plain string or as an object with a name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSource {
    Name(String),
    Detailed { name: String },
}

impl RawSource {
    fn into_name(self) -> String {
        match self {
            RawSource::Name(name) | RawSource::Detailed { name } => name,
        }
    }
}

/// Client for the SerpAPI `search.json` endpoint.
#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NewsSearch for SerpApiClient {
    async fn search_news(&self, query: &SearchQuery) -> Result<Vec<NewsResult>, SearchError> {
        info!(engine = %query.engine, q = %query.q, "Searching news");

        let num = query.num.to_string();
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("engine", query.engine.as_str()),
                ("q", query.q.as_str()),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SerpApiResponse = serde_json::from_str(&body)?;
        if let Some(message) = parsed.error {
            return Err(SearchError::Provider(message));
        }

        Ok(parsed
            .news_results
            .into_iter()
            .filter_map(|raw| {
                Some(NewsResult {
                    title: raw.title?,
                    source: raw.source?.into_name(),
                })
            })
            .collect())
    }
}
