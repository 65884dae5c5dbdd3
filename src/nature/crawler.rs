use crate::{nature::NatureArticle, Crawler};
use lazy_regex::regex;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

pub const BASE_URL: &str = "https://www.nature.com";
pub const DEFAULT_YEAR: u32 = 2020;

const E: &str = "Invalid selector";
lazy_static! {
    static ref ARTICLE: Selector = Selector::parse("article").expect(E);
    static ref ARTICLE_TYPE: Selector =
        Selector::parse(r#"span[data-test="article.type"]"#).expect(E);
    static ref VIEW_ARTICLE: Selector =
        Selector::parse(r#"a[data-track-action="view article"]"#).expect(E);
    static ref TITLE: Selector = Selector::parse("title").expect(E);
    static ref WITH_CLASS: Selector = Selector::parse("[class]").expect(E);
}

#[derive(Debug, Clone)]
pub struct NatureCrawler {
    base_url: String,
    year: u32,
}

impl Default for NatureCrawler {
    fn default() -> Self {
        NatureCrawler::new(DEFAULT_YEAR)
    }
}

impl NatureCrawler {
    pub fn new(year: u32) -> NatureCrawler {
        NatureCrawler::with_base_url(BASE_URL, year)
    }

    pub fn with_base_url(base_url: &str, year: u32) -> NatureCrawler {
        NatureCrawler {
            base_url: base_url.trim_end_matches('/').to_string(),
            year,
        }
    }

    /// Links of the `<article>` cards labelled `article_type`, in document
    /// order. Cards without a "view article" link are skipped.
    pub fn article_links<'a>(
        &self,
        doc: &'a Html,
        article_type: &'a str,
    ) -> impl Iterator<Item = String> + 'a {
        let article_type = article_type.trim();
        doc.select(&ARTICLE)
            .filter(move |article| {
                article
                    .select(&ARTICLE_TYPE)
                    .next()
                    .map_or(false, |t| text_of(t).trim() == article_type)
            })
            .filter_map(|article| article.select(&VIEW_ARTICLE).next())
            .filter_map(|a| a.value().attr("href"))
            .map(ToString::to_string)
    }
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

impl Crawler for NatureCrawler {
    type Document = NatureArticle;

    fn listing_url(&self, page: u32) -> String {
        format!(
            "{}/nature/articles?sort=PubDate&year={}&page={}",
            self.base_url, self.year, page
        )
    }

    fn article_url(&self, link: &str) -> String {
        format!("{}{}", self.base_url, link)
    }

    fn extract_links(&self, doc: &Html, article_type: &str) -> Vec<String> {
        self.article_links(doc, article_type).collect()
    }

    fn crawl(&self, doc: &Html) -> Option<Self::Document> {
        let content = doc.select(&WITH_CLASS).find(|el| {
            el.value()
                .classes()
                .any(|class| regex!("article__teaser").is_match(class))
        })?;
        let title = doc.select(&TITLE).next()?;

        Some(NatureArticle {
            title: text_of(title),
            content: text_of(content),
        })
    }
}
