use std::collections::BTreeMap;

use super::flatten::LeafEntry;

/// New keys grouped across languages: flat key -> language tag -> value.
///
/// `BTreeMap` keeps both levels deterministically ordered, so upload
/// payloads and reports are stable across runs.
pub type TranslationsByKey = BTreeMap<String, BTreeMap<String, String>>;

/// Merge per-file diff results into one record per key covering every
/// language the key was discovered in.
///
/// If the same (key, language) pair occurs more than once (a file matched
/// twice by the glob, or a duplicate leaf), the last value wins.
pub fn aggregate<I>(per_file: I) -> TranslationsByKey
where
    I: IntoIterator<Item = (String, Vec<LeafEntry>)>,
{
    let mut merged = TranslationsByKey::new();

    for (language, entries) in per_file {
        for entry in entries {
            merged
                .entry(entry.key)
                .or_default()
                .insert(language.clone(), entry.value);
        }
    }

    merged
}
