//! Build command - emit theme artifacts for the external pipeline

use std::{fs, path::Path, time::Instant};

use color_eyre::eyre::Result;
use groundwork_core::SiteConfig;
use groundwork_theme::{base_rules, purge_config, render_stylesheet, DesignTokens};
use serde_json::json;
use tracing::{debug, info};

use crate::ENV_VAR;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of base style rules expanded.
    pub rules: usize,

    /// Number of artifact files written.
    pub artifacts: usize,

    /// Whether unused-rule elimination was enabled.
    pub purge_enabled: bool,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Run the build command.
///
/// Loads the site configuration, expands the base rule set, and writes the
/// three artifacts the external pipeline consumes: `base.css`, `purge.json`,
/// and `head.json`. One shot, no retries; any dangling token path aborts the
/// build before anything is written.
pub fn run(config_path: &Path, output_dir: &Path) -> Result<BuildStats> {
    let start = Instant::now();

    info!(
        config = %config_path.display(),
        output = %output_dir.display(),
        "starting build"
    );

    let config = SiteConfig::load_with_env(config_path)?;
    let env = std::env::var(ENV_VAR).ok();

    let tokens = DesignTokens::default().with_palette(&config.theme.colors);
    let rules = base_rules(&tokens)?;
    let stylesheet = render_stylesheet(&rules);
    let purge = purge_config(env.as_deref());

    fs::create_dir_all(output_dir)?;

    let css_path = output_dir.join("base.css");
    fs::write(&css_path, &stylesheet)?;
    debug!(path = %css_path.display(), "wrote base stylesheet");

    let purge_path = output_dir.join("purge.json");
    fs::write(&purge_path, serde_json::to_string_pretty(&purge)?)?;
    debug!(path = %purge_path.display(), "wrote purge manifest");

    let head = json!({
        "title": config.head.title,
        "meta": config.head.meta,
        "link": config.head.link,
        "highlight_theme": config.markdown.highlight_theme,
    });
    let head_path = output_dir.join("head.json");
    fs::write(&head_path, serde_json::to_string_pretty(&head)?)?;
    debug!(path = %head_path.display(), "wrote head metadata");

    let stats = BuildStats {
        rules: rules.len(),
        artifacts: 3,
        purge_enabled: purge.enabled,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        rules = stats.rules,
        artifacts = stats.artifacts,
        purge = stats.purge_enabled,
        duration_ms = stats.duration_ms,
        "build complete"
    );

    Ok(stats)
}
