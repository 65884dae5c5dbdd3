use crate::{config::Alignment, CrawlerError};
use serde::Serialize;
use std::{fmt, fs, path::Path, path::PathBuf};

/// What a run did, including everything it skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub alignment: Alignment,
    pub pages_requested: u32,
    pub pages_unreachable: u32,
    pub links_found: usize,
    pub articles_unreachable: usize,
    pub articles_unextractable: usize,
    pub articles_unplaced: usize,
    pub saved: Vec<PathBuf>,
}

impl RunReport {
    pub fn write_json(&self, path: &Path) -> Result<(), CrawlerError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pages           : {}", self.pages_requested)?;
        writeln!(f, "Unreachable     : {}", self.pages_unreachable)?;
        writeln!(f, "Links           : {}", self.links_found)?;
        writeln!(
            f,
            "Skipped         : {} unreachable, {} unextractable, {} unplaced",
            self.articles_unreachable, self.articles_unextractable, self.articles_unplaced
        )?;
        writeln!(f, "Saved           : {}", self.saved.len())?;

        Ok(())
    }
}
