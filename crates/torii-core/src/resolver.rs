//! Episode Resolver: best-effort cascade from direct lookup to alias
//! search, never an error to the caller.
//!
//! The cascade is an explicit ordered iteration with a typed per-tier
//! outcome, not failure-driven control transfer: every tier either
//! resolves or hands over to the next candidate, and only total
//! exhaustion produces the empty list.

use torii_api::traits::{Episode, MediaItem, MetadataService, TitleLookup};

use crate::alias::aliases;

/// Outcome of one cascade tier.
enum Tier {
    Resolved(Vec<Episode>),
    TryNext,
}

/// Resolves an episode list across the primary and secondary providers.
pub struct EpisodeResolver<'a, P, S> {
    primary: &'a P,
    secondary: &'a S,
}

impl<'a, P: MetadataService, S: TitleLookup> EpisodeResolver<'a, P, S> {
    pub fn new(primary: &'a P, secondary: &'a S) -> Self {
        Self { primary, secondary }
    }

    /// Resolve the ordered episode list for `item`.
    ///
    /// Tiers, in order: direct lookup by provider id, alias search against
    /// the primary provider, alias lookup against the secondary provider.
    /// Per-candidate failures are logged and swallowed; exhaustion yields
    /// an empty list, which callers render as "no episodes available".
    pub async fn resolve_episodes(&self, item: &MediaItem) -> Vec<Episode> {
        if let Tier::Resolved(episodes) = self.direct(item).await {
            return episodes;
        }

        let titles = aliases(item);

        if let Tier::Resolved(episodes) = self.primary_search(&titles).await {
            return episodes;
        }
        if let Tier::Resolved(episodes) = self.secondary_lookup(&titles).await {
            return episodes;
        }

        tracing::debug!(id = item.id, "episode cascade exhausted");
        Vec::new()
    }

    async fn direct(&self, item: &MediaItem) -> Tier {
        match self.primary.get_episodes(item.id).await {
            Ok(episodes) if !episodes.is_empty() => Tier::Resolved(episodes),
            Ok(_) => {
                tracing::debug!(id = item.id, "direct episode lookup came back empty");
                Tier::TryNext
            }
            Err(e) => {
                tracing::warn!(id = item.id, error = %e, "direct episode lookup failed");
                Tier::TryNext
            }
        }
    }

    async fn primary_search(&self, titles: &[String]) -> Tier {
        for title in titles {
            match self.primary.search_media(title, 1).await {
                Ok(results) => {
                    if let Some(count) = results
                        .first()
                        .and_then(|found| found.episodes)
                        .filter(|count| *count > 0)
                    {
                        return Tier::Resolved(synthesize(count));
                    }
                    tracing::debug!(%title, "alias search yielded no episodes");
                }
                Err(e) => {
                    tracing::warn!(%title, error = %e, "alias search failed");
                }
            }
        }
        Tier::TryNext
    }

    async fn secondary_lookup(&self, titles: &[String]) -> Tier {
        for title in titles {
            match self.secondary.media_by_title(title).await {
                Ok(record) => {
                    if let Some(count) = record.episode_count.filter(|count| *count > 0) {
                        return Tier::Resolved(synthesize(count));
                    }
                    tracing::debug!(%title, "secondary lookup reports no episodes");
                }
                Err(e) => {
                    tracing::warn!(%title, error = %e, "secondary lookup failed");
                }
            }
        }
        Tier::TryNext
    }
}

/// Ordinal sequence `1..=count` when only a count is known.
fn synthesize(count: u32) -> Vec<Episode> {
    (1..=count)
        .map(|ordinal| Episode {
            ordinal,
            provider_id: None,
        })
        .collect()
}
