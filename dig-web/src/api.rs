//! HTTP client for the album proxy

use crate::config::AppConfig;
use dig_common::{Album, AlbumCollection, AlbumProvider, CrateQuery, FetchError, Genre};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Talks to `/genres`, `/albums/{random,chart,search}` and `/albums/{id}`
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn genres_url(&self) -> String {
        format!("{}/genres", self.base_url)
    }

    pub fn crate_url(&self, query: &CrateQuery) -> String {
        query.url(&self.base_url)
    }

    /// GET and decode JSON. Non-2xx statuses are errors.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        self.get_json_optional(url)
            .await?
            .ok_or_else(|| format!("Server error: {}", StatusCode::NOT_FOUND))
    }

    /// Like `get_json`, but a 404 is `Ok(None)`
    async fn get_json_optional<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, String> {
        debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(format!("Server error: {}", resp.status()));
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| format!("Parse error: {e}"))
    }
}

impl AlbumProvider for ApiClient {
    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
        self.get_json(&self.genres_url())
            .await
            .map_err(FetchError::Genres)
    }

    async fn fetch_random_albums(
        &self,
        count: u32,
        genre_ids: &[u32],
        min_tracks: Option<u32>,
    ) -> Result<AlbumCollection, FetchError> {
        let query = CrateQuery::random(count, genre_ids.iter().copied(), min_tracks);
        self.get_json(&self.crate_url(&query))
            .await
            .map_err(FetchError::Albums)
    }

    async fn fetch_chart_albums(&self, count: u32) -> Result<AlbumCollection, FetchError> {
        self.get_json(&self.crate_url(&CrateQuery::chart(count)))
            .await
            .map_err(FetchError::Albums)
    }

    async fn fetch_search_albums(
        &self,
        q: &str,
        count: u32,
    ) -> Result<AlbumCollection, FetchError> {
        let query = CrateQuery::search(q, count)
            .ok_or_else(|| FetchError::Albums("Empty search query".to_string()))?;
        self.get_json(&self.crate_url(&query))
            .await
            .map_err(FetchError::Albums)
    }

    async fn fetch_album(&self, id: u64) -> Result<Option<Album>, FetchError> {
        self.get_json_optional(&self.crate_url(&CrateQuery::album(id)))
            .await
            .map_err(FetchError::Albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&AppConfig::with_api_base_url(Some("https://dig.example/")))
    }

    #[test]
    fn test_genres_url() {
        assert_eq!(client().genres_url(), "https://dig.example/genres");
    }

    #[test]
    fn test_random_crate_url() {
        let query = CrateQuery::random(10, [152, 129], Some(2));
        assert_eq!(
            client().crate_url(&query),
            "https://dig.example/albums/random?count=10&genres=129,152&min_tracks=2"
        );
    }

    #[test]
    fn test_chart_crate_url() {
        assert_eq!(
            client().crate_url(&CrateQuery::chart(99)),
            "https://dig.example/albums/chart?count=50"
        );
    }

    #[test]
    fn test_search_crate_url() {
        let query = CrateQuery::search("a tribe called quest", 10).unwrap();
        assert_eq!(
            client().crate_url(&query),
            "https://dig.example/albums/search?q=a%20tribe%20called%20quest&count=10"
        );
    }

    #[test]
    fn test_album_url() {
        assert_eq!(
            client().crate_url(&CrateQuery::album(302127)),
            "https://dig.example/albums/302127"
        );
    }

    #[tokio::test]
    async fn test_blank_search_fails_without_request() {
        let result = client().fetch_search_albums("  ", 10).await;
        assert!(matches!(result, Err(FetchError::Albums(_))));
    }
}
