//! Discovery and reading of local message files.
//!
//! Files are selected by a glob pattern resolved against the workspace
//! root; the file name up to the first `.` becomes the language tag the
//! file's values are uploaded under.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{LeafEntry, flatten};

/// One discovered message file and the language tag derived from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFile {
    pub path: PathBuf,
    pub language: String,
}

/// Per-file flatten output, ready for diffing.
#[derive(Debug)]
pub struct FlattenedFile {
    pub file: MessageFile,
    pub entries: Vec<LeafEntry>,
}

/// Extract the language tag from a file name: the substring before the
/// first `.`.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "messages/en.messages.json" -> Some("en")
pub fn language_tag(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
}

/// Resolve `pattern` relative to `root` and return every matching file
/// with its language tag, in the glob crate's sorted order.
pub fn discover_message_files(root: &Path, pattern: &str) -> Result<Vec<MessageFile>> {
    let full_pattern = root.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .with_context(|| format!("Glob pattern is not valid UTF-8: {:?}", full_pattern))?;

    let paths = glob::glob(full_pattern)
        .with_context(|| format!("Invalid glob pattern: \"{pattern}\""))?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.with_context(|| format!("Failed to resolve glob pattern \"{pattern}\""))?;
        if !path.is_file() {
            continue;
        }

        let Some(language) = language_tag(&path) else {
            bail!(
                "Cannot derive a language tag from file name: {}",
                path.display()
            );
        };

        files.push(MessageFile { path, language });
    }

    Ok(files)
}

/// Read and flatten one message file.
///
/// The document must be a JSON object at the top level; anything else is
/// malformed input and fails the run.
pub async fn read_message_file(file: MessageFile) -> Result<FlattenedFile> {
    let content = tokio::fs::read_to_string(&file.path)
        .await
        .with_context(|| format!("Failed to read message file: {}", file.path.display()))?;

    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse message file: {}", file.path.display()))?;

    if !document.is_object() {
        bail!(
            "Message file is not a JSON object at the top level: {}",
            file.path.display()
        );
    }

    let entries = flatten(&document);
    Ok(FlattenedFile { file, entries })
}
