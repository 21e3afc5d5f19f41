//! Raw AniList GraphQL payload types and their validated conversions.

use serde::Deserialize;

use super::error::AniListError;
use crate::traits::TitleRecord;

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    #[serde(rename = "Media")]
    pub media: Option<AniListMedia>,
}

#[derive(Debug, Deserialize)]
pub struct AniListMedia {
    pub title: AniListTitle,
    #[serde(default)]
    pub episodes: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AniListTitle {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(rename = "userPreferred")]
    #[serde(default)]
    pub user_preferred: Option<String>,
}

impl AniListMedia {
    /// Validate and convert into a [`TitleRecord`].
    ///
    /// Variant order is the provider's priority order: romaji, english,
    /// native, user-preferred. Empties are dropped and case-insensitive
    /// duplicates collapsed keeping the first occurrence.
    pub fn into_title_record(self) -> Result<TitleRecord, AniListError> {
        let episode_count = match self.episodes {
            None => None,
            Some(n) if n < 0 => {
                return Err(AniListError::Parse(format!(
                    "negative episode count {n} in Media payload"
                )));
            }
            Some(n) => Some(n as u32),
        };

        let mut variants: Vec<String> = Vec::new();
        for candidate in [
            self.title.romaji,
            self.title.english,
            self.title.native,
            self.title.user_preferred,
        ]
        .into_iter()
        .flatten()
        {
            let trimmed = candidate.trim();
            if trimmed.is_empty() {
                continue;
            }
            if variants
                .iter()
                .any(|seen| seen.eq_ignore_ascii_case(trimmed))
            {
                continue;
            }
            variants.push(trimmed.to_string());
        }

        if variants.is_empty() {
            return Err(AniListError::Parse(
                "Media payload carries no usable title variant".into(),
            ));
        }

        Ok(TitleRecord {
            variants,
            episode_count,
        })
    }
}
