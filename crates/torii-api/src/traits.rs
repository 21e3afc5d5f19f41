//! Service traits and the shared data model for external providers.
//!
//! All provider clients (Jikan, AniList) and the mirror probe implement
//! these traits, allowing the resolution cascades and the UI to be
//! backend-agnostic.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// The primary metadata provider: catalog search, detail, episodes, genres.
///
/// All calls are idempotent reads and may fail with a transport or parse
/// error; how failures propagate is the caller's policy, not the provider's.
pub trait MetadataService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one media item by its provider-assigned identifier.
    fn get_media(&self, id: u64) -> impl Future<Output = Result<MediaItem, Self::Error>> + Send;

    /// Search the catalog by free-text query.
    fn search_media(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<MediaItem>, Self::Error>> + Send;

    /// Fetch the provider's own episode list for a media item.
    fn get_episodes(&self, id: u64)
        -> impl Future<Output = Result<Vec<Episode>, Self::Error>> + Send;

    /// Fetch the provider's genre catalog.
    fn get_genres(&self) -> impl Future<Output = Result<Vec<Genre>, Self::Error>> + Send;

    /// Search the catalog scoped to a genre.
    fn search_by_genre(
        &self,
        genre_id: u64,
        page: u32,
        limit: u32,
        exclude_id: Option<u64>,
    ) -> impl Future<Output = Result<Vec<MediaItem>, Self::Error>> + Send;
}

/// The secondary metadata provider: structured title lookup only.
pub trait TitleLookup: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up a media item by title, returning its title variants and
    /// episode count.
    fn media_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<TitleRecord, Self::Error>> + Send;
}

/// Mirror existence check: header-only request, no body transfer.
///
/// Transport failures count as unreachable rather than propagating — inside
/// the stream cascade every error means "try the next candidate".
pub trait StreamProbe: Send + Sync {
    fn probe(&self, url: &str) -> impl Future<Output = bool> + Send;
}

/// A media item as fetched from a provider.
///
/// Immutable once fetched; a re-fetch replaces the whole value, fields are
/// never patched individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    /// Primary (romanized) title. Non-empty, validated at the provider
    /// boundary.
    pub title: String,
    pub title_english: Option<String>,
    pub title_native: Option<String>,
    pub synonyms: Vec<String>,
    pub genres: Vec<Genre>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    /// Provider-reported episode count, when the provider knows one.
    pub episodes: Option<u32>,
    pub relations: Vec<Relation>,
}

/// A genre id/name pair, in the provider's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A single entry of a media item's relation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub target_id: u64,
    pub target_title: Option<String>,
}

/// Relation-kind tag, parsed case-insensitively from the provider's string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    Sequel,
    Prequel,
    SideStory,
    Other(String),
}

impl RelationKind {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sequel" => Self::Sequel,
            "prequel" => Self::Prequel,
            "side story" | "side-story" | "side_story" => Self::SideStory,
            _ => Self::Other(tag.to_string()),
        }
    }
}

/// One episode of a media item.
///
/// Ordinals are 1-based and contiguous: they are assigned from sequence
/// position at the provider boundary, so the invariant holds even when the
/// upstream numbering has gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub ordinal: u32,
    pub provider_id: Option<u64>,
}

/// A secondary-provider title lookup result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRecord {
    /// Title variants in provider priority order, empties dropped.
    pub variants: Vec<String>,
    pub episode_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_kind_parses_case_insensitively() {
        assert_eq!(RelationKind::parse("Sequel"), RelationKind::Sequel);
        assert_eq!(RelationKind::parse("sequel"), RelationKind::Sequel);
        assert_eq!(RelationKind::parse("PREQUEL"), RelationKind::Prequel);
        assert_eq!(RelationKind::parse("Side Story"), RelationKind::SideStory);
        assert_eq!(
            RelationKind::parse("Alternative Version"),
            RelationKind::Other("Alternative Version".into())
        );
    }
}
