//! Trending repositories extraction

use crate::trending::records::TrendingRepository;
use crate::trending::selector::{compile, Extract, Field, FieldRule, SENTINEL};
use crate::Result;
use scraper::{Html, Selector};

/// One listing row on the repositories page
const ROW: &str = r#"article[class="Box-row"]"#;

const REPO_NAME: FieldRule = FieldRule {
    name: "repo_name",
    css: r#"h2[class="h3 lh-condensed"] > a"#,
    extract: Extract::Attr("href"),
    missing: SENTINEL,
};

const DESCRIPTION: FieldRule = FieldRule {
    name: "description",
    css: r#"p[class="col-9 color-fg-muted my-1 pr-4"]"#,
    extract: Extract::Text,
    missing: SENTINEL,
};

const STARS: FieldRule = FieldRule {
    name: "stars",
    css: r#"a[href*="stargazers"]"#,
    extract: Extract::OwnTextOfAll,
    missing: SENTINEL,
};

const LANGUAGE: FieldRule = FieldRule {
    name: "language",
    css: r#"span[itemprop="programmingLanguage"]"#,
    extract: Extract::OwnText,
    missing: SENTINEL,
};

/// Pulls [`TrendingRepository`] records out of a parsed trending page
#[derive(Debug, Clone)]
pub struct RepositoryExtractor {
    home_page: String,
    row: Selector,
    repo_name: Field,
    description: Field,
    stars: Field,
    language: Field,
}

impl RepositoryExtractor {
    /// Compiles the field table; record URLs are rooted at `home_page`
    pub fn new(home_page: impl Into<String>) -> Result<Self> {
        Ok(Self {
            home_page: home_page.into(),
            row: compile(ROW)?,
            repo_name: Field::compile(REPO_NAME)?,
            description: Field::compile(DESCRIPTION)?,
            stars: Field::compile(STARS)?,
            language: Field::compile(LANGUAGE)?,
        })
    }

    /// Extracts one record per listing row, in document order
    pub fn extract(&self, document: &Html) -> Vec<TrendingRepository> {
        let repos: Vec<_> = document
            .select(&self.row)
            .map(|row| {
                let repo_name = self.repo_name.value(row);
                TrendingRepository {
                    url: format!("{}{}", self.home_page, repo_name),
                    description: self.description.value(row),
                    stars: self.stars.value(row),
                    language: self.language.value(row),
                    repo_name,
                }
            })
            .collect();

        tracing::debug!("Extracted {} trending repositories", repos.len());
        repos
    }
}
