//! Site configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{TimelineError, TimelineResult};
use crate::presentation::{PLACEHOLDER_IMAGE, SITE_SUBTITLE, SITE_TITLE};

pub const DEFAULT_PORT: u16 = 4096;

fn default_title() -> String {
    SITE_TITLE.to_string()
}

fn default_subtitle() -> String {
    SITE_SUBTITLE.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Configuration at ~/.config/hoalog/config.toml
///
/// Every key can also be set through an `HOALOG_` prefixed environment
/// variable, e.g. `HOALOG_PORT=8080`.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// JSON file with the timeline. The bundled dataset is used when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Shown instead of a gallery for events without images.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_file: None,
            title: default_title(),
            subtitle: default_subtitle(),
            port: default_port(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl SiteConfig {
    pub fn config_path() -> TimelineResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimelineError::Config("Could not determine config directory".into()))?
            .join("hoalog");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating a commented default on first run)
    /// and overlay `HOALOG_*` environment variables.
    pub fn load() -> TimelineResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> TimelineResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("HOALOG").try_parsing(true))
            .build()
            .map_err(|e| TimelineError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimelineError::Config(e.to_string()))
    }

    /// The data file with `~` expanded, if one is configured.
    pub fn data_path(&self) -> Option<PathBuf> {
        let data_file = self.data_file.as_ref()?;
        let expanded = shellexpand::tilde(&data_file.to_string_lossy()).into_owned();

        Some(PathBuf::from(expanded))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimelineResult<()> {
        let contents = format!(
            "\
# hoalog configuration

# Timeline data (defaults to the dataset bundled with hoalog):
# data_file = \"~/hoalog/timeline.json\"

# Page heading and tagline:
# title = \"{SITE_TITLE}\"
# subtitle = \"{SITE_SUBTITLE}\"

# Port for hoalog-server:
# port = {DEFAULT_PORT}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimelineError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimelineError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
