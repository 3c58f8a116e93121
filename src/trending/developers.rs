//! Trending developers extraction

use crate::trending::records::TrendingDeveloper;
use crate::trending::selector::{compile, Extract, Field, FieldRule, SENTINEL};
use crate::Result;
use scraper::{Html, Selector};

/// One listing row on the developers page
const ROW: &str = r#"article[class="Box-row d-flex"]"#;

const DEV_NAME: FieldRule = FieldRule {
    name: "dev_name",
    css: r#"h1[class="h3 lh-condensed"] > a"#,
    extract: Extract::OwnText,
    missing: SENTINEL,
};

/// Same anchor as `DEV_NAME`; an absent link yields an empty path
const DEV_HREF: FieldRule = FieldRule {
    name: "dev_href",
    css: r#"h1[class="h3 lh-condensed"] > a"#,
    extract: Extract::Attr("href"),
    missing: "",
};

const REPO_NAME: FieldRule = FieldRule {
    name: "repo_name",
    css: r#"h1[class="h4 lh-condensed"] > a"#,
    extract: Extract::OwnText,
    missing: SENTINEL,
};

const DESCRIPTION: FieldRule = FieldRule {
    name: "description",
    css: r#"div[class="f6 color-fg-muted mt-1"]"#,
    extract: Extract::Text,
    missing: "",
};

/// Pulls [`TrendingDeveloper`] records out of a parsed trending page
#[derive(Debug, Clone)]
pub struct DeveloperExtractor {
    home_page: String,
    row: Selector,
    dev_name: Field,
    dev_href: Field,
    repo_name: Field,
    description: Field,
}

impl DeveloperExtractor {
    /// Compiles the field table; record URLs are rooted at `home_page`
    pub fn new(home_page: impl Into<String>) -> Result<Self> {
        Ok(Self {
            home_page: home_page.into(),
            row: compile(ROW)?,
            dev_name: Field::compile(DEV_NAME)?,
            dev_href: Field::compile(DEV_HREF)?,
            repo_name: Field::compile(REPO_NAME)?,
            description: Field::compile(DESCRIPTION)?,
        })
    }

    /// Extracts one record per listing row, in document order
    pub fn extract(&self, document: &Html) -> Vec<TrendingDeveloper> {
        let devs: Vec<_> = document
            .select(&self.row)
            .map(|row| TrendingDeveloper {
                dev_name: self.dev_name.value(row),
                repo_name: self.repo_name.value(row),
                description: self.description.value(row),
                url: format!("{}{}", self.home_page, self.dev_href.value(row)),
            })
            .collect();

        tracing::debug!("Extracted {} trending developers", devs.len());
        devs
    }
}
