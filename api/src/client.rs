//! HTTP access to the verse and search endpoints.

use futures_util::future::try_join;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::edition::{Edition, ARABIC_EDITION};
use crate::error::ApiError;
use crate::model::{
    AyahPayload, Envelope, ErrorBody, Position, SearchMatch, SearchPayload, VerseData,
};

/// Where the reader gets verses and search hits from.
///
/// Futures are not required to be `Send`: the reader drives them on the UI
/// executor (a single thread on both web and desktop).
#[allow(async_fn_in_trait)]
pub trait QuranSource {
    async fn fetch_verse(&self, position: Position, edition: Edition)
        -> Result<VerseData, ApiError>;

    async fn search(&self, query: &str, edition: Edition) -> Result<Vec<SearchMatch>, ApiError>;
}

/// `GET {api}/ayah/{surah}:{verse}/{edition}`
pub fn verse_url(
    config: &ApiConfig,
    position: Position,
    edition_id: &str,
) -> Result<Url, ApiError> {
    let reference = position.to_string();
    endpoint(config, &["ayah", reference.as_str(), edition_id])
}

/// `GET {api}/search/{query}/{edition}` with the query percent-encoded as one path segment.
pub fn search_url(config: &ApiConfig, query: &str, edition_id: &str) -> Result<Url, ApiError> {
    endpoint(config, &["search", query, edition_id])
}

fn endpoint(config: &ApiConfig, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = Url::parse(&config.api_base).map_err(|err| ApiError::Url(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Url(format!("{} cannot be a base", config.api_base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Error for a non-2xx reply. Prefers the service's own message from the
/// JSON body and falls back to the status reason phrase.
pub fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[derive(Debug, Clone)]
pub struct QuranClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl QuranClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "api request");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = status_error(status, &body);
            warn!(%url, status = status.as_u16(), %err, "api request failed");
            return Err(err);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for QuranClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl QuranSource for QuranClient {
    async fn fetch_verse(
        &self,
        position: Position,
        edition: Edition,
    ) -> Result<VerseData, ApiError> {
        let arabic_url = verse_url(&self.config, position, ARABIC_EDITION)?;
        let translation_url = verse_url(&self.config, position, edition.id())?;

        let (arabic, translation) = try_join(
            self.get_json::<Envelope<AyahPayload>>(arabic_url),
            self.get_json::<Envelope<AyahPayload>>(translation_url),
        )
        .await?;

        VerseData::from_payloads(arabic.data, translation.data, edition)
    }

    async fn search(&self, query: &str, edition: Edition) -> Result<Vec<SearchMatch>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        let url = search_url(&self.config, query, edition.id())?;
        // The service answers a search without hits with 404.
        let payload = match self.get_json::<Envelope<SearchPayload>>(url).await {
            Ok(payload) => payload,
            Err(ApiError::Status { status: 404, .. }) => {
                debug!(query, "search found nothing");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        debug!(query, hits = payload.data.matches.len(), "search finished");
        Ok(payload.data.matches.into_iter().map(SearchMatch::from).collect())
    }
}
