//! Path rewriting for generated lists.
//!
//! MSBuild writes paths with `\`, CMake wants `/`. After separators are fixed,
//! one known relative root is swapped for a CMake variable so the list does
//! not depend on where the project file sits.

/// Replace every backslash with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Prefix substitution applied after separator normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewrite {
    prefix: String,
    placeholder: String,
}

impl PathRewrite {
    /// The prefix may be given in either separator style.
    pub fn new(prefix: &str, placeholder: &str) -> Self {
        Self {
            prefix: normalize_separators(prefix),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// True when a rewritten path can never match the prefix again.
    pub fn is_idempotent(&self) -> bool {
        self.prefix.is_empty()
            || !(self.placeholder.contains('\\')
                || self.placeholder.starts_with(&self.prefix)
                || self.prefix.starts_with(&self.placeholder))
    }

    pub fn apply(&self, path: &str) -> String {
        let path = normalize_separators(path);
        if self.prefix.is_empty() {
            return path;
        }
        match path.strip_prefix(&self.prefix) {
            Some(rest) => format!("{}{}", self.placeholder, rest),
            None => path,
        }
    }
}
