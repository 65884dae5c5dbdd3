use clap::Parser;
use itertools::Itertools;
use nature_article_crawler::nature::{NatureCrawler, DEFAULT_YEAR};
use nature_article_crawler::{
    run_crawler, Alignment, CrawlConfig, CrawlerError, HttpFetcher, DEFAULT_TIMEOUT,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Save the teasers of Nature articles of one type as text files.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of listing pages to crawl (prompted when missing); zero or
    /// negative crawls nothing
    #[arg(short, long, allow_hyphen_values = true)]
    pages: Option<i64>,

    /// Article type label to keep, e.g. "News" (prompted when missing)
    #[arg(short = 't', long)]
    article_type: Option<String>,

    /// Publication year of the listing
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    year: u32,

    /// Directory that receives the Page_<n> directories
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Per request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// How articles are assigned to page directories
    #[arg(long, value_enum, default_value_t = Alignment::SourcePage)]
    alignment: Alignment,

    /// Reset page directories even when they hold files this tool did not write
    #[arg(long)]
    force: bool,

    /// Write the run report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn prompt(input: &mut impl BufRead, question: &str) -> Result<String, CrawlerError> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_page_count(raw: &str) -> Result<i64, CrawlerError> {
    raw.trim()
        .parse()
        .map_err(|_| CrawlerError::InvalidPageCount(raw.to_string()))
}

/// Any integer is accepted; pages run from 1 to `count`, so anything below
/// one is an empty range.
fn page_range_len(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}

impl Args {
    fn into_config(self, input: &mut impl BufRead) -> Result<CrawlConfig, CrawlerError> {
        let page_count = match self.pages {
            Some(pages) => pages,
            None => parse_page_count(&prompt(input, "Number of pages: ")?)?,
        };
        let article_type = match self.article_type {
            Some(article_type) => article_type,
            None => prompt(input, "Article type: ")?,
        };

        Ok(CrawlConfig {
            output_dir: self.output_dir,
            alignment: self.alignment,
            force_reset: self.force,
            ..CrawlConfig::new(page_range_len(page_count), &article_type)
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    debug!(?args, "Parsed arguments");

    let crawler = NatureCrawler::new(args.year);
    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout))?;
    let report_path = args.report.clone();
    let config = args.into_config(&mut io::stdin().lock())?;

    let report = run_crawler(&crawler, &fetcher, &config).await?;
    info!("Run finished\n{}", report);

    if let Some(path) = report_path {
        report.write_json(&path)?;
        info!("Report written to {}", path.display());
    }

    if !report.saved.is_empty() {
        println!("{}", report.saved.iter().map(|p| p.display()).join("\n"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_skip_prompts() {
        let args = Args::parse_from([
            "nature-article-crawler",
            "--pages",
            "3",
            "-t",
            " News ",
            "--alignment",
            "positional",
            "-o",
            "/tmp/out",
        ]);

        let config = args
            .into_config(&mut io::empty())
            .expect("No prompt expected");
        assert_eq!(config.page_count, 3);
        assert_eq!(config.article_type, "News");
        assert_eq!(config.alignment, Alignment::Positional);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert!(!config.force_reset);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["nature-article-crawler"]);

        assert_eq!(args.year, 2020);
        assert_eq!(args.timeout, 10);
        assert_eq!(args.alignment, Alignment::SourcePage);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.report, None);
    }

    #[test]
    fn test_prompts_fill_missing_values() {
        let args = Args::parse_from(["nature-article-crawler"]);
        let mut input = io::Cursor::new("2\nResearch\n");

        let config = args.into_config(&mut input).expect("Prompt failed");
        assert_eq!(config.page_count, 2);
        assert_eq!(config.article_type, "Research");
    }

    #[test]
    fn test_zero_and_negative_page_counts_crawl_nothing() {
        for raw in ["0", "-1", " -25 "] {
            let args = Args::parse_from(["nature-article-crawler", "-t", "News"]);
            let mut input = io::Cursor::new(format!("{}\n", raw));

            let config = args.into_config(&mut input).expect("Integers are accepted");
            assert_eq!(config.page_count, 0);
        }

        let args = Args::parse_from(["nature-article-crawler", "-p", "-1", "-t", "News"]);
        let config = args
            .into_config(&mut io::empty())
            .expect("No prompt expected");
        assert_eq!(config.page_count, 0);
    }

    #[test]
    fn test_invalid_page_count_is_fatal() {
        let args = Args::parse_from(["nature-article-crawler", "-t", "News"]);
        let mut input = io::Cursor::new("two\n");

        assert!(matches!(
            args.into_config(&mut input),
            Err(CrawlerError::InvalidPageCount(raw)) if raw == "two"
        ));
    }
}
