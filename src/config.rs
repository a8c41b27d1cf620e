//! Run configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags. The merged result is validated once, before the
//! project document is touched.
//!
//! ```toml
//! input = "src/plugins/7zip/vcxproj/7ZA/7za.dll.vcxproj"
//! name = "7ZA_SOURCES"
//! item = "ClCompile"
//!
//! [rewrite]
//! prefix = "../../7za/"
//! placeholder = "${SEVENZIP_7ZA}/"
//! ```

use crate::cmake::DEFAULT_LIST_NAME;
use crate::error::SourceListError;
use crate::normalize::PathRewrite;
use crate::project::DEFAULT_ITEM;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "src/plugins/7zip/vcxproj/7ZA/7za.dll.vcxproj";
pub const DEFAULT_PREFIX: &str = "../../7za/";
pub const DEFAULT_PLACEHOLDER: &str = "${SEVENZIP_7ZA}/";

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub name: Option<String>,
    pub item: Option<String>,
    pub rewrite: Option<RewriteConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RewriteConfig {
    pub prefix: Option<String>,
    pub placeholder: Option<String>,
}

/// Values given explicitly on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub name: Option<String>,
    pub item: Option<String>,
    pub prefix: Option<String>,
    pub placeholder: Option<String>,
}

/// Fully merged settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub name: String,
    pub item: String,
    pub rewrite: PathRewrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            name: DEFAULT_LIST_NAME.to_string(),
            item: DEFAULT_ITEM.to_string(),
            rewrite: PathRewrite::new(DEFAULT_PREFIX, DEFAULT_PLACEHOLDER),
        }
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(file)
}

impl Config {
    /// Merge defaults, the config file, and CLI overrides, then validate.
    pub fn resolve(
        file: Option<ConfigFile>,
        overrides: Overrides,
    ) -> Result<Self, SourceListError> {
        let file = file.unwrap_or_default();
        let rewrite = file.rewrite.unwrap_or_default();

        let prefix = overrides
            .prefix
            .or(rewrite.prefix)
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        let placeholder = overrides
            .placeholder
            .or(rewrite.placeholder)
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

        let config = Config {
            input: overrides
                .input
                .or(file.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            name: overrides
                .name
                .or(file.name)
                .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string()),
            item: overrides
                .item
                .or(file.item)
                .unwrap_or_else(|| DEFAULT_ITEM.to_string()),
            rewrite: PathRewrite::new(&prefix, &placeholder),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SourceListError> {
        if self.name.is_empty() {
            return Err(invalid("list name is empty"));
        }
        if self
            .name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '#'))
        {
            return Err(invalid(&format!(
                "list name '{}' is not a single CMake argument",
                self.name
            )));
        }

        if self.item.is_empty() {
            return Err(invalid("item type is empty"));
        }
        if !self
            .item
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(invalid(&format!(
                "item type '{}' must contain only letters, digits or '_'",
                self.item
            )));
        }

        if !self.rewrite.is_idempotent() {
            return Err(invalid(&format!(
                "placeholder '{}' would be rewritten again by prefix '{}'",
                self.rewrite.placeholder(),
                self.rewrite.prefix()
            )));
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> SourceListError {
    SourceListError::InvalidConfig(msg.to_string())
}
