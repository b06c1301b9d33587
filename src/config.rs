use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::ScanOptions;
use crate::core::source::GENERATED_BUNDLE_FILE;

pub const CONFIG_FILE_NAME: &str = ".gosiftrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base-name glob patterns of directory entries that are never read.
    #[serde(default = "default_skip_files")]
    pub skip_files: Vec<String>,
    /// Scan target used when `scan` gets no source argument.
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_skip_files() -> Vec<String> {
    vec![GENERATED_BUNDLE_FILE.to_string()]
}

fn default_source_root() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_files: default_skip_files(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `skipFiles` is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.skip_files {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'skipFiles': \"{}\"", pattern))?;
        }
        Ok(())
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        ScanOptions::with_skip_files(self.skip_files.as_slice())
            .context("Invalid glob pattern in 'skipFiles'")
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
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

/// Load the nearest config file above `start_dir`, or the defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Load an explicitly named config file.
pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: Some(path.to_path_buf()),
    })
}
