//! Site configuration management.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    head::HeadConfig,
};

/// Main configuration structure for Groundwork.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document head metadata.
    pub head: HeadConfig,

    /// Markdown rendering settings.
    pub markdown: MarkdownConfig,

    /// Theme palette overrides.
    pub theme: ThemeConfig,
}

/// Markdown rendering configuration.
///
/// Data only: the external rendering framework performs the actual
/// markdown-to-HTML conversion and loads the highlight stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Path of the code-highlight theme stylesheet.
    #[serde(default = "default_highlight_theme")]
    pub highlight_theme: String,
}

/// Theme palette overrides.
///
/// Colors declared here are merged over the built-in design token table at
/// startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Named color values, e.g. `lime = "#86bb1b"`.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

fn default_highlight_theme() -> String {
    "themes/a11y-dark.css".to_string()
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight_theme: default_highlight_theme(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    ///
    /// Values from `GROUNDWORK`-prefixed environment variables override the
    /// file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("GROUNDWORK").separator("__"))
            .build()?;

        let config: SiteConfig = settings.try_deserialize()?;
        config.validate(path)?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self, path: &Path) -> Result<()> {
        if self.head.title.is_empty() {
            return Err(CoreError::config("head.title cannot be empty"));
        }

        for (index, meta) in self.head.meta.iter().enumerate() {
            if !meta.is_identified() {
                return Err(CoreError::head(
                    path,
                    index,
                    "meta record has no name, hid, or charset",
                ));
            }
        }

        for (index, link) in self.head.link.iter().enumerate() {
            if link.rel.is_empty() {
                return Err(CoreError::head(path, index, "link record has an empty rel"));
            }
            if link.href.is_empty() {
                return Err(CoreError::head(path, index, "link record has an empty href"));
            }
        }

        if !self.markdown.highlight_theme.ends_with(".css") {
            tracing::warn!(
                theme = %self.markdown.highlight_theme,
                "markdown.highlight_theme does not point at a stylesheet"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r##"
[head]
title = "Shadow Smith"

[[head.meta]]
charset = "utf-8"

[[head.meta]]
name = "viewport"
content = "width=device-width, initial-scale=1"

[[head.meta]]
hid = "description"
name = "description"
content = "Portfolio of a developer and API designer."

[[head.link]]
rel = "icon"
type = "image/x-icon"
href = "/favicon.ico"

[markdown]
highlight_theme = "themes/a11y-dark.css"

[theme.colors]
chalkboard = "#2b2b2b"
lime = "#86bb1b"
sky = "#00e0e0"
haze = "#d4d0ab"
"##
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = SiteConfig::load(&config_path).expect("load config");

        assert_eq!(config.head.title, "Shadow Smith");
        assert_eq!(config.head.meta.len(), 3);
        assert_eq!(config.head.meta[0].charset.as_deref(), Some("utf-8"));
        assert_eq!(config.head.link[0].mime_type, "image/x-icon");
        assert_eq!(config.markdown.highlight_theme, "themes/a11y-dark.css");
        assert_eq!(config.theme.colors["lime"], "#86bb1b");
        assert_eq!(config.theme.colors["haze"], "#d4d0ab");
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = SiteConfig::load(&config_path).expect("load config");

        assert_eq!(config.head.title, "Shadow Smith");
        assert_eq!(config.head.meta.len(), 3);
        assert_eq!(config.head.link.len(), 1);
        assert_eq!(config.markdown.highlight_theme, "themes/a11y-dark.css");
        assert!(config.theme.colors.is_empty());
    }

    #[test]
    fn test_config_validation_empty_title() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        let config_content = r#"
[head]
title = ""
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = SiteConfig::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_anonymous_meta() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        let config_content = r#"
[head]
title = "Test"

[[head.meta]]
content = "orphaned content"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = SiteConfig::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("no name, hid, or charset")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = SiteConfig::load(Path::new("/nonexistent/site.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
