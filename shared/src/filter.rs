use crate::snapshot::Snapshot;

/// Keeps facilities whose name contains `query` (case-insensitive, literal) and
/// that have at least `min_free` free places. An empty query matches every name.
pub fn apply(snapshot: &Snapshot, query: &str, min_free: u32) -> Snapshot {
    let needle = query.to_lowercase();
    snapshot
        .facilities()
        .iter()
        .filter(|f| f.free_places >= min_free)
        .filter(|f| needle.is_empty() || f.facility_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
