//! External provider clients for the torii resolution core.
//!
//! Two metadata providers (Jikan REST, AniList GraphQL) and the mirror
//! existence probe live here, behind the traits in [`traits`], so the
//! cascades in `torii-core` never depend on a concrete backend.

pub mod anilist;
pub mod jikan;
pub mod mirror;
pub mod traits;

pub use anilist::AniListClient;
pub use jikan::JikanClient;
pub use mirror::HeadProbe;
pub use traits::{
    Episode, Genre, MediaItem, MetadataService, Relation, RelationKind, StreamProbe, TitleLookup,
    TitleRecord,
};
