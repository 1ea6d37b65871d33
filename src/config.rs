//! Client configuration and loading logic

use crate::types::Repo;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr, time::Duration};

/// How `user`, `name` and `id` are placed into the request path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathEncoding {
    /// Interpolated as given. A `/` in a segment changes the request path.
    #[default]
    Verbatim,
    /// Percent-encoded, so every value stays a single path segment.
    Percent,
}

impl FromStr for PathEncoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "verbatim" => Ok(PathEncoding::Verbatim),
            "percent" => Ok(PathEncoding::Percent),
            other => anyhow::bail!("Unknown path encoding `{other}` (expected verbatim or percent)"),
        }
    }
}

/// Registry client configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub scheme: String,

    /// Whole-request deadline. Unset means the transport never gives up on its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    pub path_encoding: PathEncoding,

    /// Repository used by the CLI when `--repo` is not given, as `host/user/name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_repo: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            timeout_secs: None,
            path_encoding: PathEncoding::default(),
            default_repo: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content).context("Failed to parse TOML config")?
        } else {
            Self::default()
        };

        if let Ok(scheme) = std::env::var("MODEL_REGISTRY_SCHEME") {
            config.scheme = scheme;
        }
        if let Ok(timeout) = std::env::var("MODEL_REGISTRY_TIMEOUT_SECS") {
            config.timeout_secs = Some(
                timeout
                    .parse()
                    .context("Invalid MODEL_REGISTRY_TIMEOUT_SECS value")?,
            );
        }
        if let Ok(encoding) = std::env::var("MODEL_REGISTRY_PATH_ENCODING") {
            config.path_encoding = encoding
                .parse()
                .context("Invalid MODEL_REGISTRY_PATH_ENCODING value")?;
        }
        if let Ok(repo) = std::env::var("MODEL_REGISTRY_REPO") {
            config.default_repo = Some(repo);
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scheme != "http" && self.scheme != "https" {
            anyhow::bail!("Scheme must be http or https (got {})", self.scheme);
        }

        if self.timeout_secs == Some(0) {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        if let Some(repo) = &self.default_repo {
            repo.parse::<Repo>()
                .with_context(|| format!("Invalid default_repo: {repo}"))?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_scheme() -> String {
    "http".to_string()
}
