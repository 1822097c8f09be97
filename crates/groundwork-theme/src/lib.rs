//! Groundwork Theme Library
//!
//! Design tokens and base stylesheet generation for the Groundwork site
//! toolchain.
//!
//! # Modules
//!
//! - [`tokens`] - Design token table and dotted-path resolution
//! - [`rules`] - Base style rule expansion
//! - [`stylesheet`] - CSS text rendering
//! - [`purge`] - Unused-rule elimination configuration

pub mod purge;
pub mod rules;
pub mod stylesheet;
pub mod tokens;

pub use purge::{purge_config, PurgeConfig};
pub use rules::{base_rules, RuleError, StyleRule};
pub use stylesheet::render_stylesheet;
pub use tokens::{ColorEntry, DesignTokens, TokenError};
