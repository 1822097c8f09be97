//! Base style rule expansion.
//!
//! Expands the design token table into the fixed set of global rules applied
//! to rendered content: body text, headings, links, paragraphs, blockquotes,
//! and lists. Expansion is a pure function of the table; a dangling token
//! path aborts the whole expansion rather than emitting partial CSS.

use thiserror::Error;

use crate::tokens::{DesignTokens, TokenError};

/// Rule expansion errors.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A declared rule references a token path absent from the table.
    #[error("token lookup failed: {0}")]
    Token(#[from] TokenError),
}

/// Result type for rule expansion.
pub type Result<T> = std::result::Result<T, RuleError>;

/// A CSS declaration block applied globally to a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// CSS selector the block applies to.
    pub selector: String,

    /// Property/value pairs, in declaration order.
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    /// Create an empty rule for the given selector.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration, preserving order.
    #[must_use]
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }
}

/// Expand the base rule set from the token table.
///
/// Output order is declaration order; repeated invocations over the same
/// table produce an identical sequence.
pub fn base_rules(tokens: &DesignTokens) -> Result<Vec<StyleRule>> {
    let rules = vec![
        StyleRule::new("body").decl("color", tokens.resolve("colors.gray.900")?),
        StyleRule::new("h1, h2").decl("font-weight", tokens.resolve("font_weight.semibold")?),
        StyleRule::new("h1")
            .decl("margin-top", tokens.resolve("spacing.4")?)
            .decl("margin-bottom", tokens.resolve("spacing.6")?)
            .decl("font-size", tokens.resolve("font_size.3xl")?),
        StyleRule::new("h2")
            .decl("margin-top", tokens.resolve("spacing.2")?)
            .decl("margin-bottom", tokens.resolve("spacing.4")?)
            .decl("font-size", tokens.resolve("font_size.2xl")?),
        // Links inside the rendered-markdown wrapper.
        StyleRule::new(".nuxt-content a")
            .decl("color", tokens.resolve("colors.lime")?)
            .decl("font-weight", tokens.resolve("font_weight.semibold")?),
        StyleRule::new("p").decl("margin-bottom", tokens.resolve("spacing.4")?),
        StyleRule::new("blockquote")
            .decl("font-style", "italic")
            .decl("padding-left", tokens.resolve("spacing.4")?)
            .decl(
                "border-left",
                format!("4px solid {}", tokens.resolve("colors.haze")?),
            )
            .decl("margin-bottom", tokens.resolve("spacing.4")?)
            .decl("color", tokens.resolve("colors.gray.600")?),
        StyleRule::new("ul, ol")
            .decl("padding-left", tokens.resolve("spacing.5")?)
            .decl("margin-bottom", tokens.resolve("spacing.4")?),
        StyleRule::new("ul").decl("list-style", tokens.resolve("list_style_type.disc")?),
        StyleRule::new("ol").decl("list-style", tokens.resolve("list_style_type.decimal")?),
        StyleRule::new("ul li, ol li").decl("margin-bottom", tokens.resolve("spacing.1")?),
    ];

    Ok(rules)
}
