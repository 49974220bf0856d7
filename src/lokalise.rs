//! Minimal Lokalise API v2 client.
//!
//! Two endpoints only: list the keys of a project and batch-create new
//! ones. Both are single round trips; listing uses the maximum page size
//! instead of paginating.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::TranslationsByKey;

pub const API_BASE_URL: &str = "https://api.lokalise.com/api2";

/// Maximum page size the keys endpoint accepts.
const LIST_KEYS_LIMIT: u32 = 5000;

/// One key from the project key listing.
///
/// `key_name` is a structured object with one name per platform when the
/// project uses per-platform key names, and a plain string otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteKey {
    pub key_id: u64,
    pub key_name: Value,
}

impl RemoteKey {
    /// The key's name under `property`, or the name itself if the remote
    /// stores it as a plain string.
    pub fn name_for(&self, property: &str) -> Option<&str> {
        match &self.key_name {
            Value::String(name) => Some(name),
            other => other.get(property).and_then(Value::as_str),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListKeysResponse {
    keys: Vec<RemoteKey>,
}

/// One key to create, with every translation discovered for it locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewKey {
    pub key_name: String,
    pub platforms: Vec<String>,
    pub translations: Vec<NewTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTranslation {
    pub language_iso: String,
    pub translation: String,
}

#[derive(Serialize)]
struct CreateKeysRequest<'a> {
    keys: &'a [NewKey],
}

/// Turn the aggregated key -> language -> value map into upload records,
/// one per key, each tagged with the configured platform set.
pub fn build_upload_keys(aggregated: TranslationsByKey, platforms: &[String]) -> Vec<NewKey> {
    aggregated
        .into_iter()
        .map(|(key_name, translations)| NewKey {
            key_name,
            platforms: platforms.to_vec(),
            translations: translations
                .into_iter()
                .map(|(language_iso, translation)| NewTranslation {
                    language_iso,
                    translation,
                })
                .collect(),
        })
        .collect()
}

pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Client against a non-default API host.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to construct HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Fetch the project's existing keys in one call.
    pub async fn list_keys(&self, project_id: &str) -> Result<Vec<RemoteKey>> {
        let url = format!("{}/projects/{}/keys", self.base_url, project_id);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", LIST_KEYS_LIMIT)])
            .header("X-Api-Token", &self.token)
            .send()
            .await
            .with_context(|| format!("Failed to fetch existing keys for project '{project_id}'"))?
            .error_for_status()
            .with_context(|| format!("Lokalise rejected the key listing for project '{project_id}'"))?;

        let body: ListKeysResponse = response
            .json()
            .await
            .context("Failed to decode the key listing response")?;

        Ok(body.keys)
    }

    /// Create all keys in a single batch call.
    pub async fn create_keys(&self, project_id: &str, keys: &[NewKey]) -> Result<()> {
        let url = format!("{}/projects/{}/keys", self.base_url, project_id);

        self.http
            .post(&url)
            .header("X-Api-Token", &self.token)
            .json(&CreateKeysRequest { keys })
            .send()
            .await
            .with_context(|| format!("Failed to create keys in project '{project_id}'"))?
            .error_for_status()
            .with_context(|| format!("Lokalise rejected the key creation for project '{project_id}'"))?;

        Ok(())
    }
}
