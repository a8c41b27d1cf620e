//! MSBuild project reading.
//!
//! The document is never parsed as XML. Source entries are found by matching
//! the `<Item> Include="<path>"` attribute text, which is all a `.vcxproj`
//! needs for its item lists.

use crate::error::SourceListError;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default MSBuild item type holding compiled sources.
pub const DEFAULT_ITEM: &str = "ClCompile";

/// Read the whole project document in one go.
pub fn load_document(path: &Path) -> Result<String, SourceListError> {
    fs::read_to_string(path).map_err(|source| SourceListError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds `Include` paths of one item type.
#[derive(Debug, Clone)]
pub struct IncludeExtractor {
    pattern: Regex,
}

impl IncludeExtractor {
    pub fn new(item: &str) -> Result<Self, SourceListError> {
        let pattern = format!(r#"{} Include="([^"]+)""#, regex::escape(item));
        let pattern = Regex::new(&pattern)
            .map_err(|e| SourceListError::InvalidConfig(format!("item '{}': {}", item, e)))?;
        Ok(Self { pattern })
    }

    /// Captured paths in document order, duplicates included.
    pub fn extract<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}
