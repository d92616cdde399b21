use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".callauditrc.json";

/// Methods on the receiver that must forward the required marker.
pub const DEFAULT_METHODS: &[&str] = &[
    "connect",
    "disconnect",
    "refreshStatus",
    "forceStopProcesses",
    "testConnection",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_receiver")]
    pub receiver: String,
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
    #[serde(default = "default_required_marker")]
    pub required_marker: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_receiver() -> String {
    "mountManager".to_string()
}

fn default_methods() -> Vec<String> {
    DEFAULT_METHODS.iter().map(|m| m.to_string()).collect()
}

fn default_required_marker() -> String {
    "operationID:".to_string()
}

fn default_source_root() -> String {
    "macfuseGui".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["swift".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            receiver: default_receiver(),
            methods: default_methods(),
            required_marker: default_required_marker(),
            source_root: default_source_root(),
            extensions: default_extensions(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a watched name or the marker is empty, or if any
    /// glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.receiver.trim().is_empty() {
            bail!("'receiver' must not be empty");
        }
        if self.methods.is_empty() {
            bail!("'methods' must list at least one method name");
        }
        if let Some(pos) = self.methods.iter().position(|m| m.trim().is_empty()) {
            bail!("'methods' entry #{} is empty", pos + 1);
        }
        if self.required_marker.is_empty() {
            bail!("'requiredMarker' must not be empty");
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Marker text used in report lines, e.g. `operationID` for `operationID:`.
    pub fn marker_label(&self) -> &str {
        let label = self.required_marker.trim().trim_end_matches(':');
        if label.is_empty() {
            &self.required_marker
        } else {
            label
        }
    }
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
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
