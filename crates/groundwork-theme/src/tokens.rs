//! Design token table and dotted-path resolution.
//!
//! The token table is built once at startup and only read afterwards. Rules
//! address values through dotted paths (`colors.gray.900`, `spacing.4`); a
//! path that does not exist in the table is a configuration error, never a
//! silent default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lookup errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The path is well-formed but absent from the table.
    #[error("unknown design token path: {0}")]
    UnknownPath(String),

    /// The path itself cannot be parsed.
    #[error("invalid design token path: {0}")]
    InvalidPath(String),
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;

/// A color entry: a single value or a named scale of shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    /// A single color value, addressed as `colors.<name>`.
    Value(String),

    /// A shade scale, addressed as `colors.<name>.<shade>`.
    Scale(BTreeMap<String, String>),
}

/// The design token table: the visual vocabulary of the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    /// Named colors and shade scales.
    pub colors: BTreeMap<String, ColorEntry>,

    /// Spacing steps.
    pub spacing: BTreeMap<String, String>,

    /// Font sizes.
    pub font_size: BTreeMap<String, String>,

    /// Font weights.
    pub font_weight: BTreeMap<String, String>,

    /// List marker styles.
    pub list_style_type: BTreeMap<String, String>,
}

impl Default for DesignTokens {
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert("gray".to_string(), ColorEntry::Scale(table(GRAY_SCALE)));
        for (name, value) in SITE_PALETTE {
            colors.insert((*name).to_string(), ColorEntry::Value((*value).to_string()));
        }

        Self {
            colors,
            spacing: table(SPACING),
            font_size: table(FONT_SIZE),
            font_weight: table(FONT_WEIGHT),
            list_style_type: table(LIST_STYLE_TYPE),
        }
    }
}

impl DesignTokens {
    /// Merge site palette overrides over the table.
    ///
    /// Mirrors a theme `extend`: entries shadow built-in colors of the same
    /// name, everything else is kept.
    #[must_use]
    pub fn with_palette(mut self, palette: &BTreeMap<String, String>) -> Self {
        for (name, value) in palette {
            self.colors
                .insert(name.clone(), ColorEntry::Value(value.clone()));
        }
        self
    }

    /// Resolve a dotted token path to its stored value.
    ///
    /// Segments may be bracket-quoted for numeric-looking keys:
    /// `spacing.["4"]` resolves identically to `spacing.4`.
    pub fn resolve(&self, path: &str) -> Result<&str> {
        let segments = parse_path(path)?;

        let value: Option<&str> = match segments.as_slice() {
            ["colors", name] => match self.colors.get(*name) {
                Some(ColorEntry::Value(v)) => Some(v.as_str()),
                _ => None,
            },
            ["colors", name, shade] => match self.colors.get(*name) {
                Some(ColorEntry::Scale(scale)) => scale.get(*shade).map(String::as_str),
                _ => None,
            },
            [category, name] => self
                .flat_category(category)
                .and_then(|entries| entries.get(*name))
                .map(String::as_str),
            _ => None,
        };

        value.ok_or_else(|| TokenError::UnknownPath(path.to_string()))
    }

    /// Look up a single-level category by name.
    fn flat_category(&self, category: &str) -> Option<&BTreeMap<String, String>> {
        match category {
            "spacing" => Some(&self.spacing),
            "font_size" => Some(&self.font_size),
            "font_weight" => Some(&self.font_weight),
            "list_style_type" => Some(&self.list_style_type),
            _ => None,
        }
    }
}

/// Split a dotted path into segments, unquoting bracket-indexed ones.
fn parse_path(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(TokenError::InvalidPath(path.to_string()));
    }

    path.split('.')
        .map(|segment| {
            if let Some(inner) = segment
                .strip_prefix("[\"")
                .and_then(|s| s.strip_suffix("\"]"))
            {
                if inner.is_empty() {
                    return Err(TokenError::InvalidPath(path.to_string()));
                }
                Ok(inner)
            } else if segment.is_empty() || segment.starts_with('[') || segment.ends_with(']') {
                Err(TokenError::InvalidPath(path.to_string()))
            } else {
                Ok(segment)
            }
        })
        .collect()
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// Framework default values, restricted to the scale the site uses.

const GRAY_SCALE: &[(&str, &str)] = &[
    ("100", "#f7fafc"),
    ("200", "#edf2f7"),
    ("300", "#e2e8f0"),
    ("400", "#cbd5e0"),
    ("500", "#a0aec0"),
    ("600", "#718096"),
    ("700", "#4a5568"),
    ("800", "#2d3748"),
    ("900", "#1a202c"),
];

const SPACING: &[(&str, &str)] = &[
    ("1", "0.25rem"),
    ("2", "0.5rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
];

const FONT_SIZE: &[(&str, &str)] = &[("2xl", "1.5rem"), ("3xl", "1.875rem")];

const FONT_WEIGHT: &[(&str, &str)] = &[("semibold", "600")];

const LIST_STYLE_TYPE: &[(&str, &str)] = &[("disc", "disc"), ("decimal", "decimal")];

/// The site palette, merged over the framework defaults.
const SITE_PALETTE: &[(&str, &str)] = &[
    ("chalkboard", "#2b2b2b"),
    ("lime", "#86bb1b"),
    ("sky", "#00e0e0"),
    ("haze", "#d4d0ab"),
];
