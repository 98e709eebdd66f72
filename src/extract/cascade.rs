// src/extract/cascade.rs

//! Ordered extraction strategies with first-match-wins semantics.
//!
//! The monitored markup is third-party UI that drifts between deployments,
//! so locating a post is a cascade: purpose-built selectors first, generic
//! structural fallbacks last. Each strategy is a pure lookup over the
//! parsed document and can be tested in isolation.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// A single way of locating the post container in a document.
#[derive(Debug)]
pub enum ContainerStrategy {
    /// A CSS selector; the first matching element is the candidate.
    Css(Selector),

    /// Any element whose `class` attribute contains the keyword,
    /// case-insensitive, in document order.
    ClassKeyword(String),
}

impl ContainerStrategy {
    fn find<'a>(&self, document: &'a Html, classed: &Selector) -> Option<ElementRef<'a>> {
        match self {
            ContainerStrategy::Css(selector) => document.select(selector).next(),
            ContainerStrategy::ClassKeyword(keyword) => {
                document.select(classed).find(|element| {
                    element
                        .value()
                        .attr("class")
                        .is_some_and(|class| class.to_lowercase().contains(keyword))
                })
            }
        }
    }
}

/// Ordered list of container strategies.
#[derive(Debug)]
pub struct ContainerCascade {
    strategies: Vec<ContainerStrategy>,
    /// Matches every element carrying a class attribute; shared by all
    /// keyword strategies.
    classed: Selector,
}

impl ContainerCascade {
    /// Build a cascade from selector strings followed by class keywords.
    /// Selector strings are parsed up front so a bad selector fails at
    /// startup, not mid-run.
    pub fn new(selectors: &[String], class_keywords: &[String]) -> Result<Self> {
        let mut strategies = Vec::with_capacity(selectors.len() + class_keywords.len());

        for raw in selectors {
            strategies.push(ContainerStrategy::Css(parse_selector(raw)?));
        }
        for keyword in class_keywords {
            strategies.push(ContainerStrategy::ClassKeyword(keyword.to_lowercase()));
        }

        Ok(Self {
            strategies,
            classed: parse_selector("[class]")?,
        })
    }

    /// Locate the candidate post container, first strategy that matches wins.
    pub fn find<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find(document, &self.classed))
    }
}

/// Ordered list of content selectors tried within the candidate container.
#[derive(Debug)]
pub struct ContentCascade {
    selectors: Vec<Selector>,
}

impl ContentCascade {
    pub fn new(selectors: &[String]) -> Result<Self> {
        let selectors = selectors
            .iter()
            .map(|raw| parse_selector(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { selectors })
    }

    /// Find the content element within the candidate; `None` means the
    /// caller should fall back to the container's flattened text.
    pub fn find<'a>(&self, candidate: &ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| candidate.select(selector).next())
    }
}

pub(crate) fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| AppError::selector(raw, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("article.status-card").is_ok());
        assert!(parse_selector("div.status-content, div.status-body").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_css_strategy_order_matters() {
        let html = Html::parse_document(
            r#"<body><article>generic</article><article class="status-card">specific</article></body>"#,
        );
        let cascade =
            ContainerCascade::new(&["article.status-card".into(), "article".into()], &[]).unwrap();

        let found = cascade.find(&html).unwrap();
        let text: String = found.text().collect();
        assert_eq!(text, "specific");
    }

    #[test]
    fn test_generic_fallback_used_when_specific_absent() {
        let html = Html::parse_document("<body><article>only generic</article></body>");
        let cascade =
            ContainerCascade::new(&["article.status-card".into(), "article".into()], &[]).unwrap();

        assert!(cascade.find(&html).is_some());
    }

    #[test]
    fn test_class_keyword_is_case_insensitive() {
        let html = Html::parse_document(r#"<body><div class="StatusWrapper-x7">hi</div></body>"#);
        let cascade = ContainerCascade::new(&[], &["status".into()]).unwrap();

        assert!(cascade.find(&html).is_some());
    }

    #[test]
    fn test_class_keyword_no_match() {
        let html = Html::parse_document(r#"<body><div class="sidebar">hi</div></body>"#);
        let cascade = ContainerCascade::new(&[], &["status".into()]).unwrap();

        assert!(cascade.find(&html).is_none());
    }

    #[test]
    fn test_content_cascade_prefers_specific() {
        let html = Html::parse_document(
            r#"<article><p>para</p><div class="status-content">body</div></article>"#,
        );
        let container = ContainerCascade::new(&["article".into()], &[]).unwrap();
        let content =
            ContentCascade::new(&["div.status-content".into(), "p".into()]).unwrap();

        let candidate = container.find(&html).unwrap();
        let element = content.find(&candidate).unwrap();
        let text: String = element.text().collect();
        assert_eq!(text, "body");
    }

    #[test]
    fn test_content_cascade_none_when_empty_container() {
        let html = Html::parse_document("<article><img src=\"/a.jpg\"></article>");
        let container = ContainerCascade::new(&["article".into()], &[]).unwrap();
        let content = ContentCascade::new(&["div.status-content".into()]).unwrap();

        let candidate = container.find(&html).unwrap();
        assert!(content.find(&candidate).is_none());
    }
}
