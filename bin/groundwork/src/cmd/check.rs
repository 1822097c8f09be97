//! Check command - validate configuration and theme

use std::path::Path;

use color_eyre::eyre::{bail, Result};
use groundwork_core::SiteConfig;
use groundwork_theme::{base_rules, DesignTokens};

use crate::ENV_VAR;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the site configuration and expands the full theme so that a
/// dangling token path fails here rather than mid-build.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and theme");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = match SiteConfig::load(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    // Expand the theme with the site palette applied
    if let Some(ref cfg) = config {
        println!("\nChecking theme...");
        let tokens = DesignTokens::default().with_palette(&cfg.theme.colors);
        match base_rules(&tokens) {
            Ok(rules) => {
                println!("  ✓ All {} base rules expand cleanly", rules.len());
            }
            Err(e) => {
                result.add_error(format!("Theme error: {e}"));
                println!("  ✗ Theme expansion failed: {e}");
            }
        }
    }

    // Check the environment indicator
    println!("\nChecking environment...");
    check_environment(&mut result);

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Inspect the environment indicator.
///
/// An unrecognized value is a warning, not an error: the build contract
/// treats anything other than `production` as not-production, so a typo'd
/// value still builds - it just never purges.
fn check_environment(result: &mut ValidationResult) {
    match std::env::var(ENV_VAR) {
        Ok(value) if value == "production" || value == "development" => {
            println!("  ✓ {ENV_VAR}={value}");
        }
        Ok(value) if value.is_empty() => {
            result.add_warning(format!("{ENV_VAR} is set but empty - treated as not production"));
            println!("  ⚠ {ENV_VAR} is empty");
        }
        Ok(value) => {
            result.add_warning(format!(
                "Unrecognized {ENV_VAR} value '{value}' - treated as not production"
            ));
            println!("  ⚠ {ENV_VAR}={value} (unrecognized)");
        }
        Err(_) => {
            println!("  ✓ {ENV_VAR} unset - defaults to not production");
        }
    }
}
