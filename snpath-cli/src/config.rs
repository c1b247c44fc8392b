// SPDX-License-Identifier: AGPL-3.0-or-later
//! CLI configuration
//!
//! Read from `config.toml` in the platform config directory unless
//! `--config` names another file. Every field is optional.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use snpath_core::{PathError, PathResult, Separator};
use std::path::{Path, PathBuf};

/// Separator choice as written in config files and on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorSetting {
    /// Platform separator
    #[default]
    Native,
    Slash,
    Backslash,
}

impl SeparatorSetting {
    pub fn resolve(self) -> Separator {
        match self {
            SeparatorSetting::Native => Separator::NATIVE,
            SeparatorSetting::Slash => Separator::Slash,
            SeparatorSetting::Backslash => Separator::Backslash,
        }
    }
}

/// Upper bound accepted for `max_path_len` (1 MiB)
pub const MAX_PATH_LEN_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separator written by `join` and `normalize`
    pub separator: SeparatorSetting,
    /// Longest path `join` will produce, in bytes
    pub max_path_len: usize,
    /// Normalize the output of `join` without `--normalize`
    pub normalize_joined: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: SeparatorSetting::Native,
            max_path_len: 4096,
            normalize_joined: false,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "snpath", "snpath")
            .map(|d| d.config_dir().join("config.toml"))
    }

    pub fn from_toml(text: &str) -> PathResult<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| PathError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `explicit`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicit file is an error.
    pub async fn load(explicit: Option<&Path>) -> PathResult<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::from_toml(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(PathError::Config(format!("{}: {e}", path.display()))),
        }
    }

    fn validate(&self) -> PathResult<()> {
        if self.max_path_len == 0 {
            return Err(PathError::Config("max_path_len must be at least 1".into()));
        }
        if self.max_path_len > MAX_PATH_LEN_LIMIT {
            return Err(PathError::Config(format!(
                "max_path_len must be at most {MAX_PATH_LEN_LIMIT}, got {}",
                self.max_path_len
            )));
        }
        Ok(())
    }
}
