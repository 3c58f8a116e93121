//! Declarative field extraction
//!
//! Each listing field is described by a [`FieldRule`]: a CSS selector scoped
//! to one listing row, the way text is pulled out of the match, and the
//! value substituted when nothing matches. The extractors are tables of
//! these rules.

use crate::TrendingError;
use scraper::{ElementRef, Selector};

/// Placeholder for fields that could not be located
pub const SENTINEL: &str = "N/A";

/// How a field's value is read from the matched element(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Raw attribute of the first match
    Attr(&'static str),
    /// First non-blank direct text node of the first match, trimmed
    OwnText,
    /// Direct text of every match, concatenated and trimmed
    OwnTextOfAll,
    /// All descendant text of the first match joined by spaces, trimmed
    Text,
}

/// One row of an extractor's field table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub css: &'static str,
    pub extract: Extract,
    /// Value used when the field cannot be located
    pub missing: &'static str,
}

/// A [`FieldRule`] with its selector compiled
#[derive(Debug, Clone)]
pub struct Field {
    rule: FieldRule,
    selector: Selector,
}

/// Compiles a CSS selector, keeping the source text in the error
pub fn compile(css: &str) -> Result<Selector, TrendingError> {
    Selector::parse(css).map_err(|e| TrendingError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

impl Field {
    pub fn compile(rule: FieldRule) -> Result<Self, TrendingError> {
        Ok(Self {
            selector: compile(rule.css)?,
            rule,
        })
    }

    /// First descendant of `scope` matching the rule's selector
    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope.select(&self.selector).next()
    }

    /// Every descendant of `scope` matching the rule's selector, in document order
    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope.select(&self.selector).collect()
    }

    /// Reads the field, `None` when it cannot be located
    pub fn find(&self, scope: ElementRef<'_>) -> Option<String> {
        match self.rule.extract {
            Extract::Attr(attr) => self
                .first(scope)
                .and_then(|element| element.value().attr(attr))
                .map(str::to_string),
            Extract::OwnText => {
                let element = self.first(scope)?;
                let mut texts = own_text(element).map(str::trim).peekable();
                texts.peek()?;
                Some(texts.find(|text| !text.is_empty()).unwrap_or("").to_string())
            }
            Extract::OwnTextOfAll => {
                let matches = self.all(scope);
                if matches.is_empty() {
                    return None;
                }
                let joined: String = matches.into_iter().flat_map(own_text).collect();
                Some(joined.trim().to_string())
            }
            Extract::Text => self.first(scope).map(|element| {
                element
                    .text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            }),
        }
    }

    /// Reads the field, substituting the rule's `missing` value
    pub fn value(&self, scope: ElementRef<'_>) -> String {
        self.find(scope).unwrap_or_else(|| {
            tracing::trace!("{} not found, using {:?}", self.rule.name, self.rule.missing);
            self.rule.missing.to_string()
        })
    }
}

/// Text nodes that are direct children of `element`
fn own_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
}
