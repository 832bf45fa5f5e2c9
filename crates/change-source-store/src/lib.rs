use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

pub const CONFIG_DIR_NAME: &str = "change-source";
pub const CUSTOM_REGISTRIES_FILE_NAME: &str = "custom-registries.json";

/// Resolves the per-user config home: `XDG_CONFIG_HOME` when set and
/// non-empty, else `<home>/.config`.
pub fn resolve_config_home(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(xdg));
    }

    let home = home
        .filter(|value| !value.is_empty())
        .context("HOME is not set; cannot resolve config directory")?;
    Ok(PathBuf::from(home).join(".config"))
}

pub fn default_config_home() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").or_else(|| {
        if cfg!(windows) {
            std::env::var_os("USERPROFILE")
        } else {
            None
        }
    });
    resolve_config_home(std::env::var_os("XDG_CONFIG_HOME"), home)
}

pub fn custom_registries_path(config_home: &Path) -> PathBuf {
    config_home
        .join(CONFIG_DIR_NAME)
        .join(CUSTOM_REGISTRIES_FILE_NAME)
}

/// Owns the JSON file holding user-entered registry URLs.
///
/// Reads never fail: a missing, unreadable or malformed file is an empty
/// list. Writes rewrite the whole file and do propagate I/O errors.
#[derive(Debug, Clone)]
pub struct CustomRegistryStore {
    path: PathBuf,
}

impl CustomRegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config_home(config_home: &Path) -> Self {
        Self::new(custom_registries_path(config_home))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<String> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "custom registry file absent");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed reading custom registries; treating as empty"
                );
                return Vec::new();
            }
        };

        let urls = parse_custom_registries(&content);
        debug!(path = %self.path.display(), count = urls.len(), "loaded custom registries");
        urls
    }

    pub fn save(&self, urls: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(urls).with_context(|| {
            format!("failed serializing custom registries: {}", self.path.display())
        })?;
        fs::write(&self.path, content).with_context(|| {
            format!("failed writing custom registries: {}", self.path.display())
        })?;
        debug!(path = %self.path.display(), count = urls.len(), "saved custom registries");
        Ok(())
    }

    /// Appends `url` unless it is empty or already stored. Returns whether the
    /// file was rewritten.
    pub fn add(&self, url: &str) -> Result<bool> {
        if url.is_empty() {
            return Ok(false);
        }

        let mut urls = self.load();
        if urls.iter().any(|existing| existing == url) {
            return Ok(false);
        }

        urls.push(url.to_string());
        self.save(&urls)?;
        Ok(true)
    }

    /// Drops every stored entry listed in `urls` and rewrites the file even
    /// when nothing matched. Returns how many entries were dropped.
    pub fn remove(&self, urls: &[String]) -> Result<usize> {
        let mut stored = self.load();
        let before = stored.len();
        stored.retain(|existing| !urls.contains(existing));
        self.save(&stored)?;
        Ok(before - stored.len())
    }
}

fn parse_custom_registries(content: &str) -> Vec<String> {
    let value = match serde_json::from_str::<Value>(content) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "custom registry file is not valid JSON; treating as empty");
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("custom registry file is not a JSON array; treating as empty");
        return Vec::new();
    };

    let mut urls: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if let Value::String(url) = item {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }
    urls
}

#[cfg(test)]
mod tests;
