//! Stream Probe: ordered mirror candidates and first-live selection.

use torii_api::traits::StreamProbe;

use crate::slug::{episode_tag, slugify};

/// Known mirror hosts, in priority order.
pub const DEFAULT_MIRROR_HOSTS: &[&str] = &[
    "https://cdn01-s1.mywallpaper-cdn-4k.com",
    "https://cdn-s01.mywallpaper-4k-image.net",
];

/// An ordered, non-empty set of mirror hosts.
#[derive(Debug, Clone)]
pub struct MirrorSet {
    hosts: Vec<String>,
}

impl MirrorSet {
    /// Build from an ordered host list. An empty list falls back to the
    /// built-in mirrors so candidate construction can always produce a URL.
    pub fn new(hosts: Vec<String>) -> Self {
        if hosts.is_empty() {
            return Self::default();
        }
        Self { hosts }
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Candidate URLs for a slug and episode ordinal, in mirror priority
    /// order. Each is parameterized by the slug's first character (shard
    /// path segment), the full slug, and the padded episode number.
    pub fn candidates(&self, slug: &str, ordinal: u32) -> Vec<StreamCandidate> {
        let ep = episode_tag(ordinal);
        let shard: String = slug.chars().take(1).collect();
        self.hosts
            .iter()
            .map(|host| StreamCandidate {
                url: format!("{host}/stream/{shard}/{slug}/{ep}.mp4/index.m3u8"),
                mirror: host.clone(),
            })
            .collect()
    }
}

impl Default for MirrorSet {
    fn default() -> Self {
        Self {
            hosts: DEFAULT_MIRROR_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// A constructed candidate URL. Ephemeral, built per playback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCandidate {
    pub url: String,
    pub mirror: String,
}

/// The probe cascade's answer: always a URL, possibly unverified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStream {
    pub url: String,
    pub mirror: String,
    /// False only for the last-resort URL returned when every probe
    /// failed. The caller gets something to hand the player either way;
    /// this flag is what tells best-effort output apart from a confirmed
    /// stream.
    pub verified: bool,
}

/// Probe mirror candidates strictly in order and return the first one
/// confirmed live.
///
/// The slug comes from the first alias that produces a non-empty slug.
/// When every probe fails, the last mirror's URL is returned unverified —
/// the caller always gets a URL, and the playback widget surfaces the
/// runtime error if that one is dead too. Lowest-index success always
/// wins; a later candidate is never probed before an earlier one's
/// outcome is known.
pub async fn resolve_stream<P: StreamProbe>(
    probe: &P,
    titles: &[String],
    ordinal: u32,
    mirrors: &MirrorSet,
) -> ResolvedStream {
    let slug = titles
        .iter()
        .map(|title| slugify(title))
        .find(|slug| !slug.is_empty())
        .unwrap_or_default();

    let candidates = mirrors.candidates(&slug, ordinal);
    let probed = candidates.len();

    let mut last_resort = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        if probe.probe(&candidate.url).await {
            tracing::debug!(mirror = %candidate.mirror, index, "stream candidate confirmed live");
            return ResolvedStream {
                url: candidate.url,
                mirror: candidate.mirror,
                verified: true,
            };
        }
        tracing::debug!(mirror = %candidate.mirror, index, "stream candidate dead");
        last_resort = Some(candidate);
    }

    match last_resort {
        Some(candidate) => {
            tracing::warn!(
                mirror = %candidate.mirror,
                probed,
                "all mirror probes failed, returning unverified last resort"
            );
            ResolvedStream {
                url: candidate.url,
                mirror: candidate.mirror,
                verified: false,
            }
        }
        // Mirror sets are non-empty by construction; this arm is inert.
        None => ResolvedStream {
            url: String::new(),
            mirror: String::new(),
            verified: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    /// Probe that reports only the listed URLs as live; records probe order.
    struct ScriptedProbe {
        live: HashSet<String>,
        log: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn live(urls: &[&str]) -> Self {
            Self {
                live: urls.iter().map(|u| u.to_string()).collect(),
                log: Mutex::new(Vec::new()),
            }
        }

        fn probed(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    impl StreamProbe for ScriptedProbe {
        async fn probe(&self, url: &str) -> bool {
            self.log.lock().unwrap().push(url.to_string());
            self.live.contains(url)
        }
    }

    fn mirrors() -> MirrorSet {
        MirrorSet::new(vec![
            "https://m1.example".into(),
            "https://m2.example".into(),
        ])
    }

    #[test]
    fn candidates_carry_shard_slug_and_padding() {
        let candidates = mirrors().candidates("attack-titan", 9);
        assert_eq!(
            candidates[0].url,
            "https://m1.example/stream/a/attack-titan/09.mp4/index.m3u8"
        );
        assert_eq!(
            candidates[1].url,
            "https://m2.example/stream/a/attack-titan/09.mp4/index.m3u8"
        );
    }

    #[test]
    fn empty_host_list_falls_back_to_defaults() {
        let set = MirrorSet::new(Vec::new());
        assert_eq!(set.hosts().len(), DEFAULT_MIRROR_HOSTS.len());
    }

    #[tokio::test]
    async fn first_live_mirror_wins() {
        let m = mirrors();
        let live_url = "https://m2.example/stream/a/attack-titan/01.mp4/index.m3u8";
        let probe = ScriptedProbe::live(&[live_url]);

        let resolved = resolve_stream(&probe, &["Attack Titan".to_string()], 1, &m).await;

        assert_eq!(resolved.url, live_url);
        assert_eq!(resolved.mirror, "https://m2.example");
        assert!(resolved.verified);
    }

    #[tokio::test]
    async fn earlier_mirror_takes_priority_over_later() {
        let m = mirrors();
        let first = "https://m1.example/stream/a/attack-titan/01.mp4/index.m3u8";
        let second = "https://m2.example/stream/a/attack-titan/01.mp4/index.m3u8";
        let probe = ScriptedProbe::live(&[first, second]);

        let resolved = resolve_stream(&probe, &["Attack Titan".to_string()], 1, &m).await;

        assert_eq!(resolved.url, first);
        // Short-circuit: the second mirror is never probed.
        assert_eq!(probe.probed(), vec![first.to_string()]);
    }

    #[tokio::test]
    async fn all_dead_returns_last_mirror_unverified() {
        let m = mirrors();
        let probe = ScriptedProbe::live(&[]);

        let resolved = resolve_stream(&probe, &["Attack Titan".to_string()], 13, &m).await;

        assert_eq!(
            resolved.url,
            "https://m2.example/stream/a/attack-titan/13.mp4/index.m3u8"
        );
        assert!(!resolved.verified);
        assert!(!resolved.url.is_empty());
        assert_eq!(probe.probed().len(), 2);
    }

    #[tokio::test]
    async fn first_alias_with_usable_slug_is_chosen() {
        let m = mirrors();
        let probe = ScriptedProbe::live(&[]);
        let titles = vec!["   ".to_string(), "One Piece".to_string()];

        let resolved = resolve_stream(&probe, &titles, 2, &m).await;

        assert!(resolved.url.contains("/stream/o/one-piece/02.mp4/"));
    }
}
