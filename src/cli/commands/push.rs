use std::path::PathBuf;

use anyhow::{Result, bail};
use futures::future;

use super::{CommandResult, CommandSummary, FileStat, PushSummary};
use crate::{
    cli::args::{PushArgs, PushCommand},
    config::{Config, load_config},
    core::{RemoteKeyIndex, aggregate, new_entries},
    lokalise::{self, build_upload_keys},
    messages::{FlattenedFile, discover_message_files, read_message_file},
};

/// Effective push settings after merging CLI flags over the config file.
#[derive(Debug)]
struct PushSettings {
    root: PathBuf,
    glob_pattern: String,
    project_id: String,
    key_name_property: String,
    platforms: Vec<String>,
    api_token: String,
    apply: bool,
}

impl PushSettings {
    fn resolve(args: PushArgs, config: Config) -> Result<Self> {
        let Some(project_id) = args.project_id.or(config.project_id) else {
            bail!(
                "No project id provided. Pass --project-id or set \"projectId\" in {}.",
                crate::config::CONFIG_FILE_NAME
            );
        };

        Ok(Self {
            root: args.common.root,
            glob_pattern: args.common.glob_pattern.unwrap_or(config.glob_pattern),
            project_id,
            key_name_property: args.key_name_property.unwrap_or(config.key_name_property),
            platforms: config.platforms,
            api_token: args.api_token,
            apply: args.apply,
        })
    }
}

/// Run the push pipeline: discover message files, fetch the remote key
/// inventory, flatten and diff every file, aggregate the new keys across
/// languages, and (with `--apply`) create them in one batch.
pub async fn push(cmd: PushCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let load = load_config(&args.common.root)?;
    let settings = PushSettings::resolve(args, load.config)?;

    let files = discover_message_files(&settings.root, &settings.glob_pattern)?;
    if files.is_empty() {
        return Ok(result(PushSummary {
            files: Vec::new(),
            remote_key_count: 0,
            remote_skipped_count: 0,
            new_keys: Vec::new(),
            is_apply: settings.apply,
        }));
    }

    let client = lokalise::Client::new(&settings.api_token)?;
    let remote_keys = client.list_keys(&settings.project_id).await?;
    let index = RemoteKeyIndex::build(&remote_keys, &settings.key_name_property);

    // All files are read and parsed concurrently; the barrier guarantees
    // every file has been flattened before anything is aggregated.
    let flattened = future::try_join_all(files.into_iter().map(read_message_file)).await?;

    let mut file_stats = Vec::with_capacity(flattened.len());
    let mut per_file_new = Vec::with_capacity(flattened.len());
    for FlattenedFile { file, entries } in flattened {
        let key_count = entries.len();
        let new = new_entries(entries, &index);

        let display_path = file
            .path
            .strip_prefix(&settings.root)
            .map(|p| p.to_path_buf())
            .unwrap_or(file.path);
        file_stats.push(FileStat {
            path: display_path,
            language: file.language.clone(),
            key_count,
            new_count: new.len(),
        });
        per_file_new.push((file.language, new));
    }

    let aggregated = aggregate(per_file_new);
    let new_keys = build_upload_keys(aggregated, &settings.platforms);

    if settings.apply && !new_keys.is_empty() {
        client.create_keys(&settings.project_id, &new_keys).await?;
    }

    Ok(result(PushSummary {
        files: file_stats,
        remote_key_count: index.len(),
        remote_skipped_count: index.skipped(),
        new_keys,
        is_apply: settings.apply,
    }))
}

fn result(summary: PushSummary) -> CommandResult {
    CommandResult {
        summary: CommandSummary::Push(summary),
    }
}
