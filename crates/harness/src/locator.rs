//! Locator abstraction for element selection.
//!
//! A locator is a pure, declarative description of how to find an element.
//! It is re-resolved to a live handle inside each action or query call and
//! never cached across calls, which is what avoids stale-element failures
//! after a navigation or re-render.

use thirtyfour::By;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// XPath selector
    XPath(String),
    /// Element id attribute
    Id(String),
}

/// A declarative element locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    selector: Selector,
}

impl Locator {
    /// Create a CSS locator
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::Css(selector.into()),
        }
    }

    /// Create an XPath locator
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::XPath(selector.into()),
        }
    }

    /// Create an id locator
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            selector: Selector::Id(id.into()),
        }
    }

    /// The underlying selector description
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Convert to the WebDriver `By` used for a single lookup
    #[must_use]
    pub fn to_by(&self) -> By {
        match &self.selector {
            Selector::Css(s) => By::Css(s.clone()),
            Selector::XPath(s) => By::XPath(s.clone()),
            Selector::Id(s) => By::Id(s.clone()),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.selector {
            Selector::Css(s) => write!(f, "css={s}"),
            Selector::XPath(s) => write!(f, "xpath={s}"),
            Selector::Id(s) => write!(f, "id={s}"),
        }
    }
}
