use super::flatten::LeafEntry;
use super::index::RemoteKeyIndex;

/// Keep only the entries whose key is not yet known to the remote project,
/// preserving their relative order.
///
/// Values are never compared: a key that exists remotely is settled even if
/// the local value differs.
pub fn new_entries(entries: Vec<LeafEntry>, index: &RemoteKeyIndex) -> Vec<LeafEntry> {
    entries
        .into_iter()
        .filter(|entry| !index.contains(&entry.key))
        .collect()
}
