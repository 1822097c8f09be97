//! CSS text rendering.
//!
//! Serializes an ordered rule sequence into stylesheet text for the base
//! layer. Output order is sequence order; the selectors do not overlap, so
//! ordering only affects readability.

use crate::rules::StyleRule;

/// Render rules as CSS text.
#[must_use]
pub fn render_stylesheet(rules: &[StyleRule]) -> String {
    let mut css = String::new();

    for (index, rule) in rules.iter().enumerate() {
        if index > 0 {
            css.push('\n');
        }
        css.push_str(&rule.selector);
        css.push_str(" {\n");
        for (property, value) in &rule.declarations {
            css.push_str("  ");
            css.push_str(property);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push_str("}\n");
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rules::base_rules, tokens::DesignTokens};

    #[test]
    fn test_render_single_rule() {
        let rule = StyleRule::new("body").decl("color", "#1a202c");
        let css = render_stylesheet(&[rule]);

        assert_eq!(css, "body {\n  color: #1a202c;\n}\n");
    }

    #[test]
    fn test_render_preserves_sequence_order() {
        let rules = vec![
            StyleRule::new("ul").decl("list-style", "disc"),
            StyleRule::new("ol").decl("list-style", "decimal"),
        ];
        let css = render_stylesheet(&rules);

        let ul_at = css.find("ul {").expect("ul rule");
        let ol_at = css.find("ol {").expect("ol rule");
        assert!(ul_at < ol_at);
    }

    #[test]
    fn test_render_base_rules() {
        let tokens = DesignTokens::default();
        let rules = base_rules(&tokens).expect("expand");
        let css = render_stylesheet(&rules);

        assert!(css.contains(".nuxt-content a {\n  color: #86bb1b;\n  font-weight: 600;\n}\n"));
        assert!(css.contains("border-left: 4px solid #d4d0ab;"));

        // Deterministic output.
        assert_eq!(css, render_stylesheet(&base_rules(&tokens).expect("expand")));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_stylesheet(&[]), "");
    }
}
