mod crawler;

pub use crawler::{NatureCrawler, BASE_URL, DEFAULT_YEAR};

use crate::Article;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatureArticle {
    pub title: String,
    pub content: String,
}

impl fmt::Display for NatureArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title           : {}", self.title.trim())?;
        writeln!(f, "Teaser          : ")?;
        writeln!(f, "> {}", self.content.trim().replace('\n', "\n  "))?;

        Ok(())
    }
}

impl Article for NatureArticle {
    fn get_title(&self) -> &str {
        self.title.as_str()
    }

    fn get_content(&self) -> &str {
        self.content.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let article = NatureArticle {
            title: " Coronavirus: the first three months \n".to_string(),
            content: "Line one\nLine two".to_string(),
        };

        assert_eq!(
            article.to_string(),
            "Title           : Coronavirus: the first three months\nTeaser          : \n> Line one\n  Line two\n"
        );
    }
}
