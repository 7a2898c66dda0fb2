//! Locator descriptor types.

use serde::{Deserialize, Serialize};
use thirtyfour::By;

use crate::xpath;

/// Query strategy for a locator.
///
/// Explicit strategies correspond 1:1 to native WebDriver strategies. Any
/// unrecognized kind string becomes `Tag`: the kind is an HTML tag name and
/// the locator value is the element's normalized visible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Css,
    Id,
    ClassName,
    XPath,
    Name,
    LinkText,
    PartialLinkText,
    /// Tag + visible text convention.
    Tag(String),
}

impl Strategy {
    /// Map a kind string to its strategy. Never fails: unknown kinds are the
    /// tag + visible text convention by design.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "css" => Strategy::Css,
            "id" => Strategy::Id,
            "className" | "class" => Strategy::ClassName,
            "xpath" => Strategy::XPath,
            "name" => Strategy::Name,
            "linkText" => Strategy::LinkText,
            "partialLinkText" => Strategy::PartialLinkText,
            tag => Strategy::Tag(tag.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Strategy::Css => "css",
            Strategy::Id => "id",
            Strategy::ClassName => "className",
            Strategy::XPath => "xpath",
            Strategy::Name => "name",
            Strategy::LinkText => "linkText",
            Strategy::PartialLinkText => "partialLinkText",
            Strategy::Tag(tag) => tag,
        }
    }
}

/// A description of how to find a UI element: strategy + value + options.
///
/// Constructed fresh per call and never stored; every operation re-resolves
/// its locator instead of caching element handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: Strategy,
    pub value: String,
    /// Tag + visible text mode only: substring match instead of exact text.
    /// Explicit strategies ignore it.
    pub contains: bool,
}

impl Locator {
    pub fn new(kind: &str, value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::parse(kind),
            value: value.into(),
            contains: false,
        }
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::Css, value)
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::Id, value)
    }

    pub fn class_name(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::ClassName, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::XPath, value)
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::Name, value)
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::LinkText, value)
    }

    pub fn partial_link_text(value: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::PartialLinkText, value)
    }

    /// Tag + visible text locator, e.g. `Locator::text("button", "Save")`.
    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_strategy(Strategy::Tag(tag.into()), text)
    }

    fn with_strategy(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
            contains: false,
        }
    }

    pub fn contains(mut self, contains: bool) -> Self {
        self.contains = contains;
        self
    }

    /// Resolve the descriptor into a concrete query.
    pub fn to_by(&self) -> By {
        match &self.strategy {
            Strategy::Css => By::Css(self.value.as_str()),
            Strategy::Id => By::Id(self.value.as_str()),
            Strategy::ClassName => By::ClassName(self.value.as_str()),
            Strategy::XPath => By::XPath(self.value.as_str()),
            Strategy::Name => By::Name(self.value.as_str()),
            Strategy::LinkText => By::LinkText(self.value.as_str()),
            Strategy::PartialLinkText => By::PartialLinkText(self.value.as_str()),
            Strategy::Tag(tag) => {
                By::XPath(xpath::visible_text(tag, &self.value, self.contains).as_str())
            }
        }
    }
}
