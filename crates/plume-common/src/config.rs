use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PlumeError;

/// Prompt sent to the generation endpoint when the user asks for a draft.
pub const DEFAULT_GENERATION_PROMPT: &str = "Write a short, engaging community post in Markdown. \
Start with a one-line hook, follow with two or three short paragraphs, and end with a question \
that invites replies.";

/// Settings for the composer and the services it talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Base URL of the internal API (points, generation).
    pub api_base: String,
    /// PDS the content protocol client writes records to.
    pub pds_url: String,
    /// Media upload endpoint.
    pub upload_url: String,
    /// Gateway used to build content-addressed media links.
    pub gateway_url: String,
    /// Points awarded for creating a post.
    pub points_per_post: u32,
    /// How long transient status text stays visible.
    pub status_delay_ms: u64,
    pub generation_prompt: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8080/api".to_owned(),
            pds_url: "https://bsky.social".to_owned(),
            upload_url: "http://localhost:8080/api/upload".to_owned(),
            gateway_url: "https://ipfs.io".to_owned(),
            points_per_post: 10,
            status_delay_ms: 1500,
            generation_prompt: DEFAULT_GENERATION_PROMPT.to_owned(),
        }
    }
}

impl ComposerConfig {
    /// Load config from environment variables, falling back to defaults.
    ///
    /// - `PLUME_API_BASE`, `PLUME_PDS_URL`, `PLUME_UPLOAD_URL`, `PLUME_GATEWAY_URL`
    /// - `PLUME_POINTS_PER_POST`, `PLUME_STATUS_DELAY_MS`
    /// - `PLUME_GENERATION_PROMPT`
    pub fn from_env() -> Result<Self, PlumeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlumeError> {
        let mut config = Self::default();
        if let Some(v) = lookup("PLUME_API_BASE") {
            config.api_base = v;
        }
        if let Some(v) = lookup("PLUME_PDS_URL") {
            config.pds_url = v;
        }
        if let Some(v) = lookup("PLUME_UPLOAD_URL") {
            config.upload_url = v;
        }
        if let Some(v) = lookup("PLUME_GATEWAY_URL") {
            config.gateway_url = v;
        }
        if let Some(v) = lookup("PLUME_POINTS_PER_POST") {
            config.points_per_post = v
                .parse()
                .map_err(|_| PlumeError::Config(format!("PLUME_POINTS_PER_POST: {v:?}")))?;
        }
        if let Some(v) = lookup("PLUME_STATUS_DELAY_MS") {
            config.status_delay_ms = v
                .parse()
                .map_err(|_| PlumeError::Config(format!("PLUME_STATUS_DELAY_MS: {v:?}")))?;
        }
        if let Some(v) = lookup("PLUME_GENERATION_PROMPT") {
            config.generation_prompt = v;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PlumeError> {
        for (name, url) in [
            ("api_base", &self.api_base),
            ("pds_url", &self.pds_url),
            ("upload_url", &self.upload_url),
            ("gateway_url", &self.gateway_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(PlumeError::Config(format!("{name} must be an http(s) URL")));
            }
        }
        Ok(())
    }

    pub fn status_delay(&self) -> Duration {
        Duration::from_millis(self.status_delay_ms)
    }

    pub fn points_url(&self) -> String {
        format!("{}/points", self.api_base.trim_end_matches('/'))
    }

    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.api_base.trim_end_matches('/'))
    }

    /// Content-addressed link for an uploaded blob.
    pub fn media_link(&self, cid: &str) -> String {
        content_link(&self.gateway_url, cid)
    }
}

/// `{gateway}/ipfs/{cid}`
pub fn content_link(gateway: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", gateway.trim_end_matches('/'), cid)
}

/// The trait for loading configuration data.
pub trait Loader {
    fn load(&self) -> impl Future<Output = Result<ComposerConfig, PlumeError>>;
}

/// The trait for saving configuration data.
pub trait Saver {
    fn save(&self, config: &ComposerConfig) -> impl Future<Output = Result<(), PlumeError>>;
}

/// An implementation of [`Loader`] and [`Saver`] that reads and writes a JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn check_extension(&self) -> Result<(), PlumeError> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(()),
            _ => Err(PlumeError::Config(format!(
                "unsupported config format: {}",
                self.path.display()
            ))),
        }
    }
}

impl Loader for FileStore {
    async fn load(&self) -> Result<ComposerConfig, PlumeError> {
        self.check_extension()?;
        let config: ComposerConfig = serde_json::from_str(&std::fs::read_to_string(&self.path)?)?;
        config.validate()?;
        Ok(config)
    }
}

impl Saver for FileStore {
    async fn save(&self, config: &ComposerConfig) -> Result<(), PlumeError> {
        self.check_extension()?;
        std::fs::write(&self.path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }
}
