//! Page head metadata.
//!
//! Declarative records describing the document head. Groundwork never renders
//! these itself; they are handed to the external rendering framework as-is.

use serde::{Deserialize, Serialize};

/// Document head configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadConfig {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Meta tag records, in document order.
    #[serde(default = "default_meta")]
    pub meta: Vec<MetaTag>,

    /// Link tag records, in document order.
    #[serde(default = "default_link")]
    pub link: Vec<LinkTag>,
}

/// A single meta tag record.
///
/// A record is either a charset declaration or a named tag. The optional
/// `hid` gives the renderer a stable key for deduplicating tags it also
/// injects itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaTag {
    /// Stable key hint for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,

    /// Tag name (e.g. "viewport", "description").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Charset declaration (e.g. "utf-8").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// Tag content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A single link tag record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTag {
    /// Link relation (e.g. "icon").
    pub rel: String,

    /// MIME type of the linked resource.
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Resource location.
    pub href: String,
}

impl MetaTag {
    /// Create a charset declaration record.
    #[must_use]
    pub fn charset(value: impl Into<String>) -> Self {
        Self {
            charset: Some(value.into()),
            ..Self::default()
        }
    }

    /// Create a named tag record.
    #[must_use]
    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Create a named tag record with a dedup key hint.
    #[must_use]
    pub fn keyed(
        hid: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            hid: Some(hid.into()),
            name: Some(name.into()),
            content: Some(content.into()),
            charset: None,
        }
    }

    /// Whether the record identifies itself at all.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.charset.is_some() || self.name.is_some() || self.hid.is_some()
    }
}

// Default head data for the portfolio site.

fn default_title() -> String {
    "Shadow Smith".to_string()
}

fn default_description() -> String {
    "Shadow Smith is a Vue developer and API designer that loves helping others \
     creatively solve problems with visual design, code, and collaboration."
        .to_string()
}

fn default_meta() -> Vec<MetaTag> {
    vec![
        MetaTag::charset("utf-8"),
        MetaTag::named("viewport", "width=device-width, initial-scale=1"),
        MetaTag::keyed("description", "description", default_description()),
    ]
}

fn default_link() -> Vec<LinkTag> {
    vec![LinkTag {
        rel: "icon".to_string(),
        mime_type: "image/x-icon".to_string(),
        href: "/favicon.ico".to_string(),
    }]
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            meta: default_meta(),
            link: default_link(),
        }
    }
}
