//! URL slug formatting and episode-number padding for mirror paths.

/// Normalize a title into the mirrors' slug form: lower-cased, split on
/// whitespace, joined with single hyphens.
///
/// Punctuation passes through untouched ("Re:Zero" keeps its colon). This
/// is a known weak point when matching real-world mirror naming, kept
/// as-is deliberately: mirrors were provisioned against exactly this
/// scheme, and changing it would break external compatibility.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Zero-pad an episode ordinal to two digits when below 10.
///
/// Ordinals are 1-based. The padding rule is fixed for mirror path
/// compatibility: `9 → "09"`, `10 → "10"`, `100 → "100"`.
pub fn episode_tag(ordinal: u32) -> String {
    debug_assert!(ordinal >= 1, "episode ordinals are 1-based");
    if ordinal < 10 {
        format!("0{ordinal}")
    } else {
        ordinal.to_string()
    }
}
