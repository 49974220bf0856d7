use std::collections::HashSet;

use crate::lokalise::RemoteKey;

/// Set of flat key names already present in the remote project.
///
/// Built once from the key listing response, read-only afterwards. The
/// configured `key_name_property` selects which field of the structured
/// `key_name` object is compared against local flat keys.
#[derive(Debug, Default)]
pub struct RemoteKeyIndex {
    keys: HashSet<String>,
    skipped: usize,
}

impl RemoteKeyIndex {
    /// Build the index from remote keys, extracting `property` from each
    /// key's `key_name` object.
    ///
    /// Projects without per-platform key names return `key_name` as a plain
    /// string, which is used as-is. Entries where the property is absent
    /// are skipped and counted in [`skipped`](Self::skipped).
    pub fn build(remote_keys: &[RemoteKey], property: &str) -> Self {
        let mut keys = HashSet::with_capacity(remote_keys.len());
        let mut skipped = 0;

        for remote_key in remote_keys {
            match remote_key.name_for(property) {
                Some(name) => {
                    keys.insert(name.to_string());
                }
                None => skipped += 1,
            }
        }

        Self { keys, skipped }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of remote entries whose key name lacked the configured
    /// property and were left out of the index.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
