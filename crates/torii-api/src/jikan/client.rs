use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::JikanError;
use super::types::{episodes_from_payload, Envelope, JikanAnime, JikanEpisode, JikanGenre};
use crate::traits::{Episode, Genre, MediaItem, MetadataService};

pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Jikan v4 REST client (primary metadata provider).
pub struct JikanClient {
    base_url: String,
    http: Client,
}

impl JikanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Build with a preconfigured HTTP client (timeouts, user agent).
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, JikanError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Jikan request");

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "Jikan API error");
            return Err(JikanError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| JikanError::Parse(e.to_string()))
    }

    /// Convert a search-result page, dropping entries that fail boundary
    /// validation rather than poisoning the whole page.
    fn collect_items(raw: Vec<JikanAnime>) -> Vec<MediaItem> {
        raw.into_iter()
            .filter_map(|anime| match anime.into_media_item() {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(error = %e, "dropping malformed search entry");
                    None
                }
            })
            .collect()
    }
}

impl MetadataService for JikanClient {
    type Error = JikanError;

    async fn get_media(&self, id: u64) -> Result<MediaItem, JikanError> {
        let resp: Envelope<JikanAnime> = self.get_json(&format!("/anime/{id}/full"), &[]).await?;
        resp.data.into_media_item()
    }

    async fn search_media(&self, query: &str, limit: u32) -> Result<Vec<MediaItem>, JikanError> {
        let resp: Envelope<Vec<JikanAnime>> = self
            .get_json(
                "/anime",
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(Self::collect_items(resp.data))
    }

    async fn get_episodes(&self, id: u64) -> Result<Vec<Episode>, JikanError> {
        let resp: Envelope<Vec<JikanEpisode>> =
            self.get_json(&format!("/anime/{id}/episodes"), &[]).await?;
        Ok(episodes_from_payload(resp.data))
    }

    async fn get_genres(&self) -> Result<Vec<Genre>, JikanError> {
        let resp: Envelope<Vec<JikanGenre>> = self.get_json("/genres/anime", &[]).await?;
        Ok(resp
            .data
            .into_iter()
            .map(|g| Genre {
                id: g.mal_id,
                name: g.name,
            })
            .collect())
    }

    async fn search_by_genre(
        &self,
        genre_id: u64,
        page: u32,
        limit: u32,
        exclude_id: Option<u64>,
    ) -> Result<Vec<MediaItem>, JikanError> {
        let mut query = vec![
            ("genres", genre_id.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        // Forwarded as the original deployment did; callers still filter
        // locally, so the exclusion never depends on provider support.
        if let Some(id) = exclude_id {
            query.push(("exclude_ids", id.to_string()));
        }

        let resp: Envelope<Vec<JikanAnime>> = self.get_json("/anime", &query).await?;
        Ok(Self::collect_items(resp.data))
    }
}
