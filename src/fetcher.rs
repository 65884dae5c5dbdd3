use crate::CrawlerError;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait::async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlerError>;
}

/// Blocking-per-call GET with a per-request timeout. No retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<HttpFetcher, CrawlerError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlerError> {
        debug!("Visit {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlerError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Fetches and parses `url`. Failures are logged and reported as `None`.
pub async fn fetch_document<F>(fetcher: &F, url: &str) -> Option<Html>
where
    F: Fetcher + ?Sized,
{
    match fetcher.fetch(url).await {
        Ok(html) => Some(Html::parse_document(&html)),
        Err(e) => {
            warn!(%url, error = %e, "Fetch failed, skipping");
            None
        }
    }
}
