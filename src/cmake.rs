//! CMake `set()` rendering.
//!
//! ## Example Output
//!
//! ```text
//! set(7ZA_SOURCES
//!   "${SEVENZIP_7ZA}/C/Alloc.c"
//!   "../../spl/splthread.c"
//! )
//! ```

use std::fmt;

/// Default list variable name.
pub const DEFAULT_LIST_NAME: &str = "7ZA_SOURCES";

/// An ordered list of source paths bound to one CMake variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList {
    pub name: String,
    pub entries: Vec<String>,
}

impl SourceList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "set({}", self.name)?;
        for entry in &self.entries {
            writeln!(f, "  \"{}\"", entry)?;
        }
        writeln!(f, ")")
    }
}
