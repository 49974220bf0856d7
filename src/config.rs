use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glotpushrc.json";

/// Platform labels Lokalise accepts on a key.
pub const KNOWN_PLATFORMS: &[&str] = &["ios", "android", "web", "other"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Lokalise project the keys are pushed to.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Glob pattern selecting message files, relative to the workspace root.
    #[serde(default = "default_glob_pattern")]
    pub glob_pattern: String,
    /// Which field of the remote key-name object is compared against local keys.
    #[serde(default = "default_key_name_property")]
    pub key_name_property: String,
    /// Platforms every created key is tagged with.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
}

fn default_glob_pattern() -> String {
    "messages/*.json".to_string()
}

fn default_key_name_property() -> String {
    "web".to_string()
}

fn default_platforms() -> Vec<String> {
    KNOWN_PLATFORMS.iter().map(|p| p.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_id: None,
            glob_pattern: default_glob_pattern(),
            key_name_property: default_key_name_property(),
            platforms: default_platforms(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the glob pattern is malformed or a platform
    /// label is not one Lokalise accepts.
    pub fn validate(&self) -> Result<()> {
        Pattern::new(&self.glob_pattern).with_context(|| {
            format!(
                "Invalid glob pattern in 'globPattern': \"{}\"",
                self.glob_pattern
            )
        })?;

        if self.platforms.is_empty() {
            bail!("'platforms' must contain at least one platform");
        }
        for platform in &self.platforms {
            if !KNOWN_PLATFORMS.contains(&platform.as_str()) {
                bail!(
                    "Unknown platform in 'platforms': \"{}\" (expected one of: {})",
                    platform,
                    KNOWN_PLATFORMS.join(", ")
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
