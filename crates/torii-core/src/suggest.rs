//! Suggestion Set Builder: bounded genre-scoped recommendations.

use torii_api::traits::{Genre, MediaItem, MetadataService};

use crate::error::CoreError;

/// Fixed size of the suggestion set.
pub const SUGGESTION_LIMIT: usize = 5;

/// Fetch up to [`SUGGESTION_LIMIT`] media sharing `genre`, excluding the
/// item the suggestions are for.
///
/// An absent genre yields an empty set, not an error, as does a query with
/// no results. The exclusion is applied locally even though the provider
/// is asked to exclude too, so the property never depends on provider
/// support.
pub async fn suggest<P>(
    provider: &P,
    genre: Option<&Genre>,
    exclude_id: u64,
) -> Result<Vec<MediaItem>, CoreError>
where
    P: MetadataService,
    P::Error: Into<CoreError>,
{
    let Some(genre) = genre else {
        tracing::debug!(exclude_id, "no genre to suggest from");
        return Ok(Vec::new());
    };

    let results = provider
        .search_by_genre(genre.id, 1, SUGGESTION_LIMIT as u32, Some(exclude_id))
        .await
        .map_err(Into::into)?;

    Ok(results
        .into_iter()
        .filter(|item| item.id != exclude_id)
        .take(SUGGESTION_LIMIT)
        .collect())
}

#[cfg(test)]
mod tests {
    use torii_api::traits::Episode;

    use super::*;

    #[derive(Debug)]
    struct FakeError;

    impl std::fmt::Display for FakeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake failure")
        }
    }

    impl std::error::Error for FakeError {}

    impl From<FakeError> for CoreError {
        fn from(e: FakeError) -> Self {
            CoreError::Transport(e.to_string())
        }
    }

    /// Provider returning a fixed genre-search page, ignoring exclude hints
    /// the way a real catalog endpoint might.
    struct FakeCatalog {
        page: Result<Vec<MediaItem>, ()>,
    }

    impl MetadataService for FakeCatalog {
        type Error = FakeError;

        async fn get_media(&self, _id: u64) -> Result<MediaItem, FakeError> {
            Err(FakeError)
        }

        async fn search_media(&self, _query: &str, _limit: u32) -> Result<Vec<MediaItem>, FakeError> {
            Err(FakeError)
        }

        async fn get_episodes(&self, _id: u64) -> Result<Vec<Episode>, FakeError> {
            Err(FakeError)
        }

        async fn get_genres(&self) -> Result<Vec<Genre>, FakeError> {
            Err(FakeError)
        }

        async fn search_by_genre(
            &self,
            _genre_id: u64,
            _page: u32,
            _limit: u32,
            _exclude_id: Option<u64>,
        ) -> Result<Vec<MediaItem>, FakeError> {
            self.page.clone().map_err(|_| FakeError)
        }
    }

    fn media(id: u64) -> MediaItem {
        MediaItem {
            id,
            title: format!("Title {id}"),
            title_english: None,
            title_native: None,
            synonyms: vec![],
            genres: vec![],
            synopsis: None,
            image_url: None,
            episodes: None,
            relations: vec![],
        }
    }

    fn action() -> Genre {
        Genre {
            id: 1,
            name: "Action".into(),
        }
    }

    #[tokio::test]
    async fn excluded_item_never_appears() {
        let catalog = FakeCatalog {
            page: Ok(vec![media(7), media(8), media(9)]),
        };
        let out = suggest(&catalog, Some(&action()), 8).await.unwrap();
        assert!(out.iter().all(|m| m.id != 8));
        assert_eq!(out.len(), 2);
    }

    #[tokio::test]
    async fn result_is_capped_at_the_limit() {
        let catalog = FakeCatalog {
            page: Ok((1..=10).map(media).collect()),
        };
        let out = suggest(&catalog, Some(&action()), 99).await.unwrap();
        assert_eq!(out.len(), SUGGESTION_LIMIT);
    }

    #[tokio::test]
    async fn absent_genre_yields_empty_not_error() {
        let catalog = FakeCatalog { page: Err(()) };
        let out = suggest(&catalog, None, 1).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_transport_error() {
        let catalog = FakeCatalog { page: Err(()) };
        let err = suggest(&catalog, Some(&action()), 1).await.unwrap_err();
        assert!(matches!(err, CoreError::Transport(_)));
    }
}
