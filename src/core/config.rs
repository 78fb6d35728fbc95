//! Exporter configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the yt-dlp binary
pub const YTDLP_ENV_VAR: &str = "PLAYLIST_EXPORTER_YTDLP";

/// Main exporter configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExporterConfig {
    /// yt-dlp executable name or path
    pub ytdlp_binary: String,
    /// Extra arguments passed to yt-dlp before the playlist URL
    pub extra_ytdlp_args: Vec<String>,
    /// "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            ytdlp_binary: "yt-dlp".to_string(),
            extra_ytdlp_args: Vec::new(),
            log_level: None,
        }
    }
}

impl ExporterConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// read when present and defaults are used otherwise. The yt-dlp binary can
    /// always be overridden through [`YTDLP_ENV_VAR`].
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::load_from(path)?,
            None => match Self::get_config_path() {
                Ok(path) if path.exists() => Self::load_from(&path)?,
                Ok(_) => Self::default(),
                Err(err) => {
                    tracing::debug!("No config directory available: {}", err);
                    Self::default()
                }
            },
        };

        if let Ok(binary) = std::env::var(YTDLP_ENV_VAR) {
            if !binary.trim().is_empty() {
                tracing::debug!("Using yt-dlp binary from {}: {}", YTDLP_ENV_VAR, binary);
                config.ytdlp_binary = binary;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: ExporterConfig =
            serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

        tracing::debug!("Loaded configuration from: {:?}", path);
        Ok(config)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "videodownloader", "playlist-exporter")
            .with_context(|| "Failed to get project directories")?;

        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ytdlp_binary.trim().is_empty() {
            anyhow::bail!("ytdlp_binary must not be empty");
        }

        if let Some(level) = &self.log_level {
            if !["error", "warn", "info", "debug", "trace"].contains(&level.as_str()) {
                anyhow::bail!("Invalid log level: {}", level);
            }
        }

        Ok(())
    }
}
