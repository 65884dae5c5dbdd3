use serde::Serialize;
use std::path::PathBuf;

/// How fetched articles are assigned to page directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Save each article in the directory of the listing page that linked it.
    #[default]
    SourcePage,
    /// The n-th fetched article goes to the n-th page directory, whatever
    /// page linked it. Articles past the last page are dropped.
    Positional,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub page_count: u32,
    pub article_type: String,
    pub output_dir: PathBuf,
    pub alignment: Alignment,
    pub force_reset: bool,
}

impl CrawlConfig {
    pub fn new(page_count: u32, article_type: &str) -> CrawlConfig {
        CrawlConfig {
            page_count,
            article_type: article_type.trim().to_string(),
            output_dir: PathBuf::from("."),
            alignment: Alignment::default(),
            force_reset: false,
        }
    }
}
