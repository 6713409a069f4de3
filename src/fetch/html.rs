// src/fetch/html.rs
// =============================================================================
// This module runs CSS selector queries against HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The selector strings come from the user, so we parse them once up front
// (see `Query::parse`) and report a bad selector before crawling anything.
//
// Rust concepts:
// - Newtype structs: Wrapping a library type to give it our own API
// - Iterators: For walking over matched elements
// - Option<T>: For attributes that may be missing
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use crate::error::ConfigError;

// A parsed CSS selector
//
// Keeps the original string around for log messages.
#[derive(Debug, Clone)]
pub struct Query {
    source: String,
    selector: Selector,
}

// One element matched by a Query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The href attribute, if the element has one
    pub href: Option<String>,
    /// All text nodes inside the element, concatenated
    pub text: String,
}

impl Query {
    // Parses a selector string such as "main h2 a" or "div.tldr"
    //
    // Returns: ConfigError::InvalidSelector if scraper rejects it
    pub fn parse(selector: &str) -> Result<Self, ConfigError> {
        let parsed = Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            source: selector.to_string(),
            selector: parsed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    // Returns every matching element, in document order
    //
    // Example:
    //   html = "<a href='/p1'>One</a><a>Two</a>"
    //   query = "a"
    //   result = [Selection { href: Some("/p1"), text: "One" },
    //             Selection { href: None, text: "Two" }]
    pub fn select(&self, html: &str) -> Vec<Selection> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .map(|element| Selection {
                href: element.value().attr("href").map(str::to_string),
                text: element_text(element),
            })
            .collect()
    }

    // Returns the text of all matching elements glued together
    //
    // An empty string when nothing matches.
    pub fn text(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        document.select(&self.selector).map(element_text).collect()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why parse the HTML inside select() and text()?
//    - scraper::Html is not Send, so it can't be held across an .await
//    - Parsing and querying in one plain (non-async) function keeps the
//      document out of our async code entirely
//
// 2. What does .text() on an element return?
//    - An iterator over every text node inside the element
//    - collect() into a String concatenates them
//    - "<a>Hello <b>world</b></a>" -> "Hello world"
//
// 3. Why map(str::to_string)?
//    - attr() returns Option<&str> borrowed from the document
//    - The document is dropped when the function returns
//    - So we copy the value into an owned String
// -----------------------------------------------------------------------------
