use crate::cmake::SourceList;
use crate::config::Config;
use crate::error::SourceListError;
use crate::normalize::PathRewrite;
use crate::project::{self, IncludeExtractor};

/// Turns project text into a CMake source list.
#[derive(Debug, Clone)]
pub struct Transcoder {
    name: String,
    extractor: IncludeExtractor,
    rewrite: PathRewrite,
}

impl Transcoder {
    pub fn new(config: &Config) -> Result<Self, SourceListError> {
        Ok(Self {
            name: config.name.clone(),
            extractor: IncludeExtractor::new(&config.item)?,
            rewrite: config.rewrite.clone(),
        })
    }

    /// Pure pass: extract, rewrite each path, collect. One entry per match.
    pub fn transcode(&self, content: &str) -> SourceList {
        let mut list = SourceList::new(self.name.clone());
        for path in self.extractor.extract(content) {
            list.push(self.rewrite.apply(path));
        }
        list
    }
}

/// Load the configured document and transcode it.
pub fn run(config: &Config) -> Result<SourceList, SourceListError> {
    let transcoder = Transcoder::new(config)?;
    let content = project::load_document(&config.input)?;
    Ok(transcoder.transcode(&content))
}
