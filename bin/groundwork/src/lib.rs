//! Groundwork CLI Library
//!
//! This library provides the functionality behind the Groundwork CLI: the
//! one-shot build step that turns the site configuration and design tokens
//! into the artifacts the external build pipeline consumes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)

pub mod cmd;

// Re-export core types for convenience
pub use groundwork_core::{HeadConfig, SiteConfig};
pub use groundwork_theme::{DesignTokens, PurgeConfig, StyleRule};

/// Environment variable carrying the build environment indicator.
///
/// Read once at build start. The literal value `production` enables
/// unused-rule elimination; anything else means not-production.
pub const ENV_VAR: &str = "GROUNDWORK_ENV";

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
