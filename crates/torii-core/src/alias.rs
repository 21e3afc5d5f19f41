//! Title Alias Set: ordered candidate titles for one media item.
//!
//! Both the episode resolver and the stream probe consume this, so the two
//! cascades always try titles in the same priority order.

use torii_api::traits::MediaItem;

/// Derive the ordered alias list for a media item.
///
/// Order is `[primary, english?, native?, ...synonyms]` with empty entries
/// dropped and case-insensitive duplicates collapsed keeping the first
/// occurrence (case preserved). Never empty when the primary title is
/// non-empty, which the provider boundary guarantees.
pub fn aliases(item: &MediaItem) -> Vec<String> {
    let mut out = Vec::new();
    push_unique(&mut out, &item.title);
    if let Some(title) = &item.title_english {
        push_unique(&mut out, title);
    }
    if let Some(title) = &item.title_native {
        push_unique(&mut out, title);
    }
    for synonym in &item.synonyms {
        push_unique(&mut out, synonym);
    }
    out
}

fn push_unique(out: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return;
    }
    if out.iter().any(|seen| seen.eq_ignore_ascii_case(trimmed)) {
        return;
    }
    out.push(trimmed.to_string());
}
