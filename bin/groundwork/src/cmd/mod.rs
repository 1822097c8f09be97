//! Command implementations for the Groundwork CLI.

pub mod build;
pub mod check;
