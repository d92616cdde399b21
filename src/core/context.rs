use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    config::{Config, load_config},
    core::collect::CallLocator,
    rules::RequiredMarker,
};

/// Everything an audit run needs, resolved once before scanning.
///
/// The watched receiver, methods and marker come from configuration and are
/// compiled into the locator and rule here; nothing about them changes while
/// files are scanned.
pub struct AuditContext {
    pub config: Config,
    /// Root directory (or single file) to scan.
    pub root: PathBuf,
    pub locator: CallLocator,
    pub rule: RequiredMarker,
    pub verbose: bool,
}

impl AuditContext {
    /// Load configuration starting from `start_dir` and apply the CLI root
    /// override, if any.
    pub fn new(start_dir: &Path, root_override: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let loaded = load_config(start_dir)?;

        if verbose {
            match &loaded.path {
                Some(path) => eprintln!(
                    "{} Using config file {}",
                    "note:".bold().cyan(),
                    path.display()
                ),
                None => eprintln!(
                    "{} No {} found, using defaults",
                    "note:".bold().cyan(),
                    crate::config::CONFIG_FILE_NAME
                ),
            }
        }

        let root = root_override.unwrap_or_else(|| PathBuf::from(&loaded.config.source_root));
        Self::from_config(loaded.config, root, verbose)
    }

    pub fn from_config(config: Config, root: PathBuf, verbose: bool) -> Result<Self> {
        let locator = CallLocator::new(&config.receiver, &config.methods)
            .context("Invalid watched receiver or method names")?;
        let rule = RequiredMarker::new(config.required_marker.clone());

        Ok(Self {
            config,
            root,
            locator,
            rule,
            verbose,
        })
    }
}
