//! Unused-rule elimination configuration.
//!
//! Decides whether the CSS pipeline drops rules whose selectors appear in no
//! scanned source file, and which files are scanned to make that call.

use serde::{Deserialize, Serialize};

/// Environment indicator value that enables purging.
pub const PRODUCTION: &str = "production";

/// Source file globs scanned for class-name usage.
///
/// The set is fixed; only `enabled` varies with the environment.
pub const PURGE_CONTENT: [&str; 5] = [
    "components/**/*.html",
    "layouts/**/*.html",
    "pages/**/*.md",
    "scripts/**/*.js",
    "site.toml",
];

/// Purge decision handed to the CSS pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeConfig {
    /// Whether unused-rule elimination runs.
    pub enabled: bool,

    /// Source file globs to scan, in order.
    pub content: Vec<String>,
}

/// Compute the purge configuration from the environment indicator.
///
/// Purging is enabled iff the indicator is exactly `"production"`. Any other
/// value, the empty string, or an unset indicator means not-production; a
/// typo'd indicator silently disables purging rather than failing the build.
#[must_use]
pub fn purge_config(env: Option<&str>) -> PurgeConfig {
    let enabled = env == Some(PRODUCTION);
    tracing::debug!(enabled, env = env.unwrap_or("<unset>"), "purge decision");

    PurgeConfig {
        enabled,
        content: PURGE_CONTENT.iter().map(ToString::to_string).collect(),
    }
}
