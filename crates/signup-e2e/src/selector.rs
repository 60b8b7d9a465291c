//! Element locators rendered as in-page query expressions.
//!
//! The sign-up form under test is rendered by a framework that gives fields
//! no stable ids, so every field locator combines three match strategies
//! (aria-label, name substring, placeholder substring). Buttons carry no
//! attributes at all and are matched by their rendered text, which plain CSS
//! cannot express; those locators are evaluated as DOM queries instead.

use serde::{Deserialize, Serialize};

/// A locator for finding elements on the page under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector, possibly a comma-separated list of alternatives
    Css(String),
    /// Any element whose text content contains the fragment
    Text(String),
    /// CSS-selected elements filtered by text content
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a text selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Locator for a button identified by its rendered text
    #[must_use]
    pub fn button_with_text(text: impl Into<String>) -> Self {
        Self::CssWithText {
            css: "button".to_string(),
            text: text.into(),
        }
    }

    /// Locator for a form input identified by label, name fragment, or
    /// placeholder
    #[must_use]
    pub fn input_field(label: &str, name_fragment: &str) -> Self {
        Self::Css(format!(
            "input[aria-label=\"{label}\"], input[name*=\"{name_fragment}\"], input[placeholder*=\"{label}\"]"
        ))
    }

    /// Render as a DOM query expression evaluating to the first matching
    /// element or `null`
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).find(el => el.textContent.includes({t:?}))")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))")
            }
        }
    }

    /// Render as a DOM query expression counting matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).filter(el => el.textContent.includes({t:?})).length")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length")
            }
        }
    }

    /// Render as a boolean expression: does a matching element currently
    /// occupy layout space?
    #[must_use]
    pub fn to_visible_query(&self) -> String {
        match self {
            Self::Text(t) => visible_text_query(t),
            _ => format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 const r = el.getBoundingClientRect(); \
                 const s = window.getComputedStyle(el); \
                 return r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none'; }})()",
                self.to_query()
            ),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css={s}"),
            Self::Text(t) => write!(f, "text={t}"),
            Self::CssWithText { css, text } => write!(f, "{css}:text({text})"),
        }
    }
}

/// Boolean expression: is text containing `fragment` currently visible?
///
/// Matching descends to the innermost elements containing the fragment;
/// `document.documentElement` contains every fragment and would otherwise
/// always report a layout box.
#[must_use]
pub fn visible_text_query(fragment: &str) -> String {
    format!(
        "(() => {{ const needle = {fragment:?}; \
         const hits = Array.from(document.querySelectorAll('*'))\
           .filter(el => el.textContent && el.textContent.includes(needle)); \
         const leaves = hits.filter(el => !Array.from(el.children)\
           .some(c => c.textContent && c.textContent.includes(needle))); \
         return leaves.some(el => {{ \
           const r = el.getBoundingClientRect(); \
           const s = window.getComputedStyle(el); \
           return r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none'; }}); }})()"
    )
}
