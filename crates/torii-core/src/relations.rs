//! Relation Navigator: forward (sequel) navigation over the relation graph.

use torii_api::traits::{MediaItem, RelationKind};

/// Locate the first relation tagged as a sequel and return its target
/// identifier. Navigating there is the caller's job.
pub fn find_sequel(item: &MediaItem) -> Option<u64> {
    item.relations
        .iter()
        .find(|relation| relation.kind == RelationKind::Sequel)
        .map(|relation| relation.target_id)
}
