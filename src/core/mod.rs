//! Key reconciliation pipeline.
//!
//! The three pure stages between file I/O and the Lokalise API:
//! - `flatten`: nested message document -> ordered `::`-joined leaf entries
//! - `diff`: drop entries whose key already exists remotely
//! - `aggregate`: regroup the survivors by key across languages
//!
//! All three operate on plain values with no shared state, so the async
//! orchestration in `cli::commands::push` can run file reads concurrently
//! and fold the results once every file has been parsed.

pub mod aggregate;
pub mod diff;
pub mod flatten;
pub mod index;

pub use aggregate::{TranslationsByKey, aggregate};
pub use diff::new_entries;
pub use flatten::{KEY_SEPARATOR, LeafEntry, flatten};
pub use index::RemoteKeyIndex;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lokalise::{NewKey, NewTranslation, build_upload_keys};
    use pretty_assertions::assert_eq;

    // The whole pipeline minus I/O: two languages, one shared key, empty
    // remote inventory.
    #[test]
    fn test_pipeline_two_languages_one_record() {
        let en: serde_json::Value = serde_json::from_str(r#"{"a": {"b": "1"}}"#).unwrap();
        let fr: serde_json::Value = serde_json::from_str(r#"{"a": {"b": "2"}}"#).unwrap();
        let index = RemoteKeyIndex::build(&[], "web");

        let per_file = vec![
            ("en".to_string(), new_entries(flatten(&en), &index)),
            ("fr".to_string(), new_entries(flatten(&fr), &index)),
        ];
        let keys = build_upload_keys(aggregate(per_file), &["web".to_string()]);

        assert_eq!(
            keys,
            vec![NewKey {
                key_name: "a::b".to_string(),
                platforms: vec!["web".to_string()],
                translations: vec![
                    NewTranslation {
                        language_iso: "en".to_string(),
                        translation: "1".to_string(),
                    },
                    NewTranslation {
                        language_iso: "fr".to_string(),
                        translation: "2".to_string(),
                    },
                ],
            }]
        );
    }

    // Keys the remote already has never reach the upload payload, even
    // when the local value differs.
    #[test]
    fn test_pipeline_no_new_keys_builds_no_records() {
        let en: serde_json::Value =
            serde_json::from_str(r#"{"greeting": "Hi there"}"#).unwrap();
        let remote = vec![crate::lokalise::RemoteKey {
            key_id: 1,
            key_name: serde_json::json!({"web": "greeting"}),
        }];
        let index = RemoteKeyIndex::build(&remote, "web");

        let per_file = vec![("en".to_string(), new_entries(flatten(&en), &index))];
        let keys = build_upload_keys(aggregate(per_file), &["web".to_string()]);

        assert!(keys.is_empty());
    }
}
