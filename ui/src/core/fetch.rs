//! Diagnostics API client.
//!
//! Every call goes through [`ApiClient::fetch_api`], which turns transport
//! failures, non-2xx responses and undecodable bodies into `None` so pages can
//! render a not-found state instead of failing. Successful bodies are kept for
//! [`REVALIDATE_AFTER`] and served from memory until then; the cache is
//! advisory and a miss simply refetches.

use std::collections::HashMap;
use std::sync::Mutex;

use api::dto::{InsightData, SectionData};
use api::model::{OverviewResponse, SectionOverview};
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use time::{Duration, OffsetDateTime};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api/v1";

pub const REVALIDATE_AFTER: Duration = Duration::seconds(60);

/// `/a/b/c` endpoint path with every segment percent-encoded, so ids holding
/// `/`, `?` or spaces stay a single segment.
pub fn endpoint_path(segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return format!("/{}", segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

/// Base URL baked in at build time through `FASTTRACK_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("FASTTRACK_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error: {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
struct CachedBody {
    fetched_at: OffsetDateTime,
    body: Value,
}

/// Endpoint-keyed store of raw JSON bodies with a fixed freshness window.
#[derive(Debug, Clone)]
pub struct RevalidatingCache {
    ttl: Duration,
    entries: HashMap<String, CachedBody>,
}

impl RevalidatingCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Body stored under `key` if it is younger than the window at `now`.
    pub fn get(&self, key: &str, now: OffsetDateTime) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|entry| now - entry.fetched_at < self.ttl)
            .map(|entry| &entry.body)
    }

    pub fn insert(&mut self, key: impl Into<String>, body: Value, now: OffsetDateTime) {
        self.entries.insert(
            key.into(),
            CachedBody {
                fetched_at: now,
                body,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RevalidatingCache {
    fn default() -> Self {
        Self::new(REVALIDATE_AFTER)
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    cache: Mutex<RevalidatingCache>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            cache: Mutex::new(RevalidatingCache::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// GET `endpoint` and decode it, or `None` on any failure.
    pub async fn fetch_api<T: DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        if let Some(body) = self.cached(endpoint) {
            match serde_json::from_value(body) {
                Ok(value) => {
                    debug!(endpoint, "serving cached response");
                    return Some(value);
                }
                Err(err) => debug!(endpoint, %err, "cached body no longer decodes; refetching"),
            }
        }

        match self.fetch_fresh(endpoint).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Failed to fetch {endpoint}: {err}");
                None
            }
        }
    }

    async fn fetch_fresh<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = self.url_for(endpoint);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let text = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        let body: Value = serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            url: url.clone(),
            source,
        })?;
        let decoded = serde_json::from_value(body.clone())
            .map_err(|source| FetchError::Decode { url, source })?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(endpoint, body, OffsetDateTime::now_utc());
        }
        Ok(decoded)
    }

    fn cached(&self, endpoint: &str) -> Option<Value> {
        let cache = self.cache.lock().ok()?;
        cache.get(endpoint, OffsetDateTime::now_utc()).cloned()
    }

    pub async fn sections(&self) -> Vec<SectionOverview> {
        self.fetch_api::<OverviewResponse>("/overview")
            .await
            .map(|overview| overview.sections)
            .unwrap_or_default()
    }

    pub async fn section_data(&self, section_id: &str) -> Option<SectionData> {
        self.fetch_api(&endpoint_path(&["overview", section_id])).await
    }

    pub async fn insight_data(&self, section_id: &str, insight_id: &str) -> Option<InsightData> {
        self.fetch_api(&endpoint_path(&[
            "sections",
            section_id,
            "insights",
            insight_id,
        ]))
        .await
    }

    pub async fn section_insights(&self, section_id: &str) -> Vec<InsightData> {
        self.fetch_api(&endpoint_path(&["sections", section_id, "insights"]))
            .await
            .unwrap_or_default()
    }
}

static CLIENT: Lazy<ApiClient> = Lazy::new(|| ApiClient::new(api_base_url()));

/// Process-wide client pointed at [`api_base_url`].
pub fn client() -> &'static ApiClient {
    &CLIENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(seconds: i64) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(seconds)
    }

    #[test]
    fn cache_serves_fresh_bodies_only() {
        let mut cache = RevalidatingCache::default();
        cache.insert("/overview", json!({ "sections": [] }), at(0));

        assert!(cache.get("/overview", at(59)).is_some());
        assert!(cache.get("/overview", at(60)).is_none());
        assert!(cache.get("/other", at(1)).is_none());
    }

    #[test]
    fn reinserting_restarts_the_window() {
        let mut cache = RevalidatingCache::new(Duration::seconds(10));
        cache.insert("/overview", json!(1), at(0));
        cache.insert("/overview", json!(2), at(8));
        assert_eq!(cache.get("/overview", at(15)), Some(&json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn base_url_is_joined_without_double_slash() {
        let client = ApiClient::new("http://localhost:4000/api/v1/");
        assert_eq!(
            client.url_for("/overview"),
            "http://localhost:4000/api/v1/overview"
        );
    }

    #[test]
    fn endpoint_ids_are_percent_encoded() {
        assert_eq!(
            endpoint_path(&["sections", "execution-habits", "insights"]),
            "/sections/execution-habits/insights"
        );
        assert_eq!(
            endpoint_path(&["overview", "a b/c?d"]),
            "/overview/a%20b%2Fc%3Fd"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_degrades_to_none() {
        let client = ApiClient::new("http://127.0.0.1:1/api/v1");
        assert!(client.section_data("strategy-in-action").await.is_none());
        assert!(client.sections().await.is_empty());
        assert!(client.section_insights("strategy-in-action").await.is_empty());
    }
}
