use std::path::PathBuf;

/// Errors raised while producing a source list.
#[derive(Debug)]
pub enum SourceListError {
    /// The project document is missing, unreadable, or not valid UTF-8
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A merged configuration value failed validation
    InvalidConfig(String),
}

impl std::fmt::Display for SourceListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceListError::InputUnavailable { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            SourceListError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SourceListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceListError::InputUnavailable { source, .. } => Some(source),
            SourceListError::InvalidConfig(_) => None,
        }
    }
}
