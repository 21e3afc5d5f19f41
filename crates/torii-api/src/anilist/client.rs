use reqwest::Client;

use super::error::AniListError;
use super::types::{GraphQLResponse, MediaResponse};
use crate::traits::{TitleLookup, TitleRecord};

pub const DEFAULT_URL: &str = "https://graphql.anilist.co";

const MEDIA_BY_TITLE_QUERY: &str = r#"
query ($search: String) {
    Media(search: $search, type: ANIME) {
        title { romaji english native userPreferred }
        episodes
    }
}
"#;

/// AniList GraphQL client (secondary metadata provider, unauthenticated).
pub struct AniListClient {
    url: String,
    http: Client,
}

impl AniListClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    /// Build with a preconfigured HTTP client (timeouts, user agent).
    pub fn with_client(url: impl Into<String>, http: Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }
}

impl TitleLookup for AniListClient {
    type Error = AniListError;

    async fn media_by_title(&self, title: &str) -> Result<TitleRecord, AniListError> {
        let resp: GraphQLResponse<MediaResponse> = self
            .graphql_request(
                "MediaByTitle",
                MEDIA_BY_TITLE_QUERY,
                serde_json::json!({ "search": title }),
            )
            .await?;

        match resp.data.and_then(|d| d.media) {
            Some(media) => media.into_title_record(),
            None => Err(AniListError::NotFound(title.to_string())),
        }
    }
}
