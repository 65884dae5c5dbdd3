use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("Http error")]
    HttpError(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Io error")]
    IoError(#[from] std::io::Error),

    #[error("Report serialization error")]
    ReportError(#[from] serde_json::Error),

    #[error("Refusing to reset {0}: it holds content this crawler did not write (use --force)")]
    UnsafeDirectory(PathBuf),

    #[error("Invalid page count: {0:?}")]
    InvalidPageCount(String),
}
