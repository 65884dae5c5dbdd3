use crate::{utils, CrawlerError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One listing page: the directory its articles go to and the links found
/// on it, `None` when the listing could not be fetched.
#[derive(Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    pub number: u32,
    pub dir: PathBuf,
    pub links: Option<Vec<String>>,
}

impl PageDescriptor {
    pub fn dir_name(number: u32) -> String {
        format!("Page_{}", number)
    }
}

/// Recreates `path` as an empty directory.
///
/// An existing path is only removed if it is a directory holding nothing but
/// `.txt` files, unless `force` is set.
pub fn reset_dir(path: &Path, force: bool) -> Result<(), CrawlerError> {
    check_dir(path, force)?;
    if path.exists() {
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        debug!("Removed {}", path.display());
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Fails with `UnsafeDirectory` when [`reset_dir`] would refuse `path`.
/// Touches nothing.
pub fn check_dir(path: &Path, force: bool) -> Result<(), CrawlerError> {
    if path.exists() && !force && !is_crawler_output(path)? {
        return Err(CrawlerError::UnsafeDirectory(path.to_path_buf()));
    }
    Ok(())
}

fn is_crawler_output(path: &Path) -> Result<bool, CrawlerError> {
    if !path.is_dir() {
        return Ok(false);
    }
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        // An empty title is saved as ".txt", which has no extension.
        let is_txt = entry
            .file_name()
            .to_string_lossy()
            .ends_with(&format!(".{}", utils::TXT_EXTENSION));
        if !is_txt || !entry.file_type()?.is_file() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Writes `content` and a trailing newline to `<dir>/<sanitized title>.txt`,
/// replacing any file already there.
pub fn save_file(dir: &Path, title: &str, content: &str) -> Result<PathBuf, CrawlerError> {
    let path = dir.join(utils::file_name(title));
    fs::write(&path, format!("{}\n", content))?;
    Ok(path)
}
