use futures::stream::{self, StreamExt};
use scraper::Html;
use std::fmt;
use tracing::{debug, info, warn};

pub mod nature;

mod config;
mod data;
mod error;
mod fetcher;
mod report;
mod utils;

pub use config::{Alignment, CrawlConfig};
pub use data::{check_dir, reset_dir, save_file, PageDescriptor};
pub use error::CrawlerError;
pub use fetcher::{fetch_document, Fetcher, HttpFetcher, DEFAULT_TIMEOUT};
pub use report::RunReport;
pub use utils::{file_name, sanitize_file_name};

pub trait Article: fmt::Display {
    fn get_title(&self) -> &str;
    fn get_content(&self) -> &str;
}

/// Site specific part of a crawl: where listings live and how to read them.
pub trait Crawler {
    type Document: Article;

    fn listing_url(&self, page: u32) -> String;
    fn article_url(&self, link: &str) -> String;
    fn extract_links(&self, doc: &Html, article_type: &str) -> Vec<String>;
    fn crawl(&self, doc: &Html) -> Option<Self::Document>;
}

struct FetchedArticle<'a, A> {
    page: usize,
    link: &'a str,
    article: Option<A>,
}

/// Runs one crawl: listings, directory reset, article fetches, files.
///
/// Unreachable pages and articles, and articles with nothing to extract, are
/// skipped and counted in the returned report. Filesystem errors abort the
/// run.
pub async fn run_crawler<C, F>(
    crawler: &C,
    fetcher: &F,
    config: &CrawlConfig,
) -> Result<RunReport, CrawlerError>
where
    C: Crawler,
    F: Fetcher + ?Sized,
{
    let mut report = RunReport {
        alignment: config.alignment,
        pages_requested: config.page_count,
        ..RunReport::default()
    };

    let mut pages = Vec::with_capacity(config.page_count as usize);
    for number in 1..=config.page_count {
        let url = crawler.listing_url(number);
        let links = fetch_document(fetcher, &url)
            .await
            .map(|doc| crawler.extract_links(&doc, &config.article_type));

        match &links {
            Some(links) => debug!("Page {} has {} matching links", number, links.len()),
            None => report.pages_unreachable += 1,
        }
        pages.push(PageDescriptor {
            number,
            dir: config.output_dir.join(PageDescriptor::dir_name(number)),
            links,
        });
    }

    // Refuse before wiping anything.
    for page in &pages {
        check_dir(&page.dir, config.force_reset)?;
    }
    for page in &pages {
        reset_dir(&page.dir, config.force_reset)?;
    }

    let links = pages
        .iter()
        .enumerate()
        .filter_map(|(i, page)| page.links.as_ref().map(|links| (i, links)))
        .flat_map(|(i, links)| links.iter().map(move |link| (i, link.as_str())))
        .collect::<Vec<_>>();
    report.links_found = links.len();
    info!(
        "Found {} {:?} links on {} pages ({} unreachable)",
        report.links_found, config.article_type, report.pages_requested, report.pages_unreachable
    );

    let fetched = stream::iter(links)
        .filter_map(|(page, link)| async move {
            let doc = fetch_document(fetcher, &crawler.article_url(link)).await?;
            let article = crawler.crawl(&doc);
            Some(FetchedArticle {
                page,
                link,
                article,
            })
        })
        .collect::<Vec<_>>()
        .await;
    report.articles_unreachable = report.links_found - fetched.len();

    for (position, fetched) in fetched.into_iter().enumerate() {
        let target = match config.alignment {
            Alignment::SourcePage => fetched.page,
            Alignment::Positional => position,
        };

        let Some(page) = pages.get(target) else {
            debug!("No page directory left for {}", fetched.link);
            report.articles_unplaced += 1;
            continue;
        };
        let Some(article) = fetched.article else {
            warn!("Nothing to extract from {}", fetched.link);
            report.articles_unextractable += 1;
            continue;
        };

        debug!("Extracted {}\n{}", fetched.link, article);
        let path = save_file(&page.dir, article.get_title(), article.get_content())?;
        info!("[{}] Saved {}", report.saved.len() + 1, path.display());
        report.saved.push(path);
    }

    Ok(report)
}
