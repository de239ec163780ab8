//! CLI module for barlog - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for directory
//! analysis and single-file event inspection.

pub mod commands;

pub use commands::Cli;
