//! Raw Jikan v4 payload types and their validated conversions.
//!
//! Provider responses are not trusted: conversion into the shared model
//! rejects shape violations (missing primary title, negative episode count)
//! instead of letting partial data reach the resolution cascade.

use serde::Deserialize;

use super::error::JikanError;
use crate::traits::{Episode, Genre, MediaItem, Relation, RelationKind};

/// Jikan wraps every payload in a `data` envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct JikanAnime {
    pub mal_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_synonyms: Vec<String>,
    #[serde(default)]
    pub episodes: Option<i64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub images: Option<JikanImages>,
    #[serde(default)]
    pub genres: Vec<JikanGenre>,
    #[serde(default)]
    pub relations: Vec<JikanRelationGroup>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImages {
    #[serde(default)]
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImageSet {
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanGenre {
    pub mal_id: u64,
    pub name: String,
}

/// Relations come grouped by kind, each group carrying its target entries.
#[derive(Debug, Deserialize)]
pub struct JikanRelationGroup {
    pub relation: String,
    #[serde(default)]
    pub entry: Vec<JikanRelationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct JikanRelationEntry {
    pub mal_id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanEpisode {
    #[serde(default)]
    pub mal_id: Option<u64>,
}

impl JikanAnime {
    /// Validate and convert into the shared model.
    pub fn into_media_item(self) -> Result<MediaItem, JikanError> {
        let id = self.mal_id;
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| JikanError::Parse(format!("media {id} missing primary title")))?;

        let episodes = match self.episodes {
            None => None,
            Some(n) if n < 0 => {
                return Err(JikanError::Parse(format!(
                    "media {id} reports negative episode count {n}"
                )));
            }
            Some(n) => Some(n as u32),
        };

        let relations = self
            .relations
            .into_iter()
            .flat_map(|group| {
                let kind = RelationKind::parse(&group.relation);
                group.entry.into_iter().map(move |entry| Relation {
                    kind: kind.clone(),
                    target_id: entry.mal_id,
                    target_title: entry.name,
                })
            })
            .collect();

        Ok(MediaItem {
            id,
            title,
            title_english: self.title_english.filter(|t| !t.is_empty()),
            title_native: self.title_japanese.filter(|t| !t.is_empty()),
            synonyms: self.title_synonyms,
            genres: self
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.mal_id,
                    name: g.name,
                })
                .collect(),
            synopsis: self.synopsis,
            image_url: self
                .images
                .and_then(|i| i.jpg)
                .and_then(|j| j.large_image_url),
            episodes,
            relations,
        })
    }
}

/// Re-number a provider episode list into strictly contiguous ordinals.
pub fn episodes_from_payload(raw: Vec<JikanEpisode>) -> Vec<Episode> {
    raw.into_iter()
        .enumerate()
        .map(|(i, ep)| Episode {
            ordinal: i as u32 + 1,
            provider_id: ep.mal_id,
        })
        .collect()
}
